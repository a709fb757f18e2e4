/// Python-style `str.islower`: at least one cased character and no uppercase ones.
fn is_all_lowercase(s: &str) -> bool {
	s.chars().any(|c| c.is_lowercase()) && !s.chars().any(|c| c.is_uppercase())
}

fn push_unique(labels: &mut Vec<String>, token: &str) {
	if !labels.iter().any(|l| l == token) {
		labels.push(token.to_string());
	}
}

/// Splits a mode string into its unique channel labels, based on its internal capitalization.
///
/// Anything after the first `;` is a raw storage qualifier and is ignored.
/// Tokens that are entirely lowercase are dropped when a following character closes them,
/// the trailing token is always kept.
///
/// ```
/// use pal_rs::palettes::abbreviations::split_abbreviations;
///
/// assert_eq!(split_abbreviations("RGB"), ["R", "G", "B"]);
/// assert_eq!(split_abbreviations("YCbCr"), ["Y", "Cb", "Cr"]);
/// assert_eq!(split_abbreviations("sRGB"), ["R", "G", "B"]);
/// assert_eq!(split_abbreviations("I;16B"), ["I"]);
/// ```
pub fn split_abbreviations(mode: &str) -> Vec<String> {
	let mode = mode.split(';').next().unwrap_or_default();

	let mut labels: Vec<String> = Vec::new();
	let mut current_token = String::new();
	for c in mode.chars() {
		if current_token.is_empty() || c.is_lowercase() {
			current_token.push(c);
			continue;
		}

		if !is_all_lowercase(&current_token) {
			push_unique(&mut labels, &current_token);
		}
		current_token.clear();
		current_token.push(c);
	}

	if !current_token.is_empty() {
		push_unique(&mut labels, &current_token);
	}

	labels
}

/// Number of channels a mode string describes.
pub fn channel_count(mode: &str) -> usize {
	split_abbreviations(mode).len()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lowercase_detection() {
		assert!(is_all_lowercase("s"));
		assert!(is_all_lowercase("ab1"));
		assert!(!is_all_lowercase("Cb"));
		assert!(!is_all_lowercase("16"));
		assert!(!is_all_lowercase(""));
	}

	#[test]
	fn digits_start_new_tokens() {
		// digits are not lowercase, so each one closes the previous token
		assert_eq!(split_abbreviations("I16B"), ["I", "1", "6", "B"]);
		assert_eq!(split_abbreviations("LA16"), ["L", "A", "1", "6"]);
	}

	#[test]
	fn trailing_lowercase_token_is_kept() {
		assert_eq!(split_abbreviations("Ra"), ["Ra"]);
		assert_eq!(split_abbreviations("abc"), ["abc"]);
		assert!(split_abbreviations("").is_empty());
		assert!(split_abbreviations(";16").is_empty());
	}
}
