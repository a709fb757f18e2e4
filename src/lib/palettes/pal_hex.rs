use std::io::BufRead;

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::error::FormatError;
use crate::palettes::loader::{PaletteFormat, PaletteReader, RawPaletteData};

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/hex_file.cpp

/// Parses `RRGGBB`, optionally prefixed with `#` or `0x`.
pub(crate) fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
	let s = s.trim();
	let s = s.strip_prefix("0x").unwrap_or(s);
	let s = s.strip_prefix('#').unwrap_or(s);

	if s.len() != 6 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
		return None;
	}

	let v = u32::from_str_radix(s, 16).ok()?;
	Some([(v >> 16) as u8, (v >> 8) as u8, v as u8])
}

/// One hexadecimal color per line. Lines starting with `#` that aren't colors are comments.
pub struct HexReader;

impl PaletteReader for HexReader {
	fn format(&self) -> PaletteFormat {
		PaletteFormat::Hex
	}

	fn parse(&self, reader: &mut dyn BufRead) -> Result<RawPaletteData, FormatError> {
		let mut data = Vec::new();

		for (i, line) in reader.lines().enumerate() {
			let trimmed_line = line?.trim().to_owned();
			if trimmed_line.is_empty() {
				continue;
			}

			match parse_hex_color(&trimmed_line) {
				Some(rgb) => data.extend_from_slice(&rgb),
				None if trimmed_line.starts_with('#') => continue,
				None => {
					return Err(FormatError::InvalidTextLine { line: i + 1, msg: "Not a hexadecimal color value".to_string() });
				}
			}

			if data.len() > MAX_PALETTE_COLORS * 3 {
				return Err(FormatError::TooManyColors);
			}
		}

		Ok(RawPaletteData::rgb(PaletteFormat::Hex, data))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_color_prefixes() {
		assert_eq!(parse_hex_color("1E3D54"), Some([0x1E, 0x3D, 0x54]));
		assert_eq!(parse_hex_color("#1e3d54"), Some([0x1E, 0x3D, 0x54]));
		assert_eq!(parse_hex_color("0x1E3D54"), Some([0x1E, 0x3D, 0x54]));
		assert_eq!(parse_hex_color("# Palette"), None);
		assert_eq!(parse_hex_color("1E3D5"), None);
		assert_eq!(parse_hex_color("+1E3D5"), None);
	}
}
