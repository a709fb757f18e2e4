use pal_rs::palettes::abbreviations::{channel_count, split_abbreviations};

struct SplitTest {
	pub mode: String,
	pub expected_labels: Vec<String>,
}

impl SplitTest {
	fn new<S: Into<String>>(mode: S, expected: &[&str]) -> Self {
		Self {
			mode: mode.into(),
			expected_labels: expected.iter().map(|s| s.to_string()).collect(),
		}
	}
}

fn split_data() -> Vec<SplitTest> {
	vec![
		SplitTest::new("RGB",   &["R", "G", "B"]),
		SplitTest::new("CMYK",  &["C", "M", "Y", "K"]),
		SplitTest::new("YCbCr", &["Y", "Cb", "Cr"]),
		SplitTest::new("sRGB",  &["R", "G", "B"]),
		SplitTest::new("XYZZ",  &["X", "Y", "Z"]),
		SplitTest::new("I;16B", &["I"]),
		SplitTest::new("RGBA",  &["R", "G", "B", "A"]),
		SplitTest::new("LAB",   &["L", "A", "B"]),
		SplitTest::new("HSV",   &["H", "S", "V"]),
		SplitTest::new("RGB;L", &["R", "G", "B"]),
		SplitTest::new("L",     &["L"]),
	]
}

#[test]
fn abbreviation_splitting() {
	for (i, test) in split_data().iter().enumerate() {
		let labels = split_abbreviations(&test.mode);
		assert_eq!(labels, test.expected_labels, "{i}: labels for \"{}\" don't match!", test.mode);
		assert_eq!(channel_count(&test.mode), test.expected_labels.len(), "{i}: channel count doesn't match!");
	}
}

#[test]
fn abbreviations_are_unique_and_ordered() {
	for mode in ["XYZZ", "RGBRGB", "CbCrCb", "AaBbAa", "sRGBsRGB"] {
		let labels = split_abbreviations(mode);

		let mut deduped = labels.clone();
		deduped.dedup();
		deduped.sort();
		deduped.dedup();
		assert_eq!(deduped.len(), labels.len(), "\"{mode}\" produced duplicate labels: {labels:?}");

		// every label appears in the mode string in the order it was emitted
		let mut last = 0;
		for label in &labels {
			let pos = mode.find(label.as_str()).unwrap();
			assert!(pos >= last, "\"{mode}\": {label} is out of order in {labels:?}");
			last = pos;
		}
	}

	assert_eq!(split_abbreviations("RGBRGB"), ["R", "G", "B"]);
	assert_eq!(split_abbreviations("CbCrCb"), ["Cb", "Cr"]);
}
