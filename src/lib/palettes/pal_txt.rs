use std::io::BufRead;

use crate::palettes::error::FormatError;
use crate::palettes::loader::{PaletteFormat, PaletteReader, RawPaletteData, grey_ramp_rgb};

const MAX_LINE_LENGTH: usize = 100;

/// Plain text palettes as written by [crate::palettes::palette::Palette::save]:
/// `#` comments, then `index r g b` or `index v` (grey) lines.
///
/// Yields 256 RGB entries, entries the file doesn't define stay grey.
pub struct TextPaletteReader;

impl PaletteReader for TextPaletteReader {
	fn format(&self) -> PaletteFormat {
		PaletteFormat::Text
	}

	fn parse(&self, reader: &mut dyn BufRead) -> Result<RawPaletteData, FormatError> {
		let mut data = grey_ramp_rgb();
		let mut found_entries = false;

		for (i, line) in reader.lines().enumerate() {
			let line = line?;
			if line.starts_with('#') {
				continue;
			}

			if line.len() > MAX_LINE_LENGTH {
				return Err(FormatError::InvalidTextLine { line: i + 1, msg: "Line too long".to_string() });
			}

			if line.trim().is_empty() {
				continue;
			}

			let values = line.split_whitespace()
				.map(|v| v.parse::<i64>())
				.collect::<Result<Vec<i64>, _>>()
				.map_err(|_| FormatError::InvalidTextLine { line: i + 1, msg: "Not an integer".to_string() })?;

			let (index, rgb) = match values.as_slice() {
				&[index, r, g, b] => (index, [r, g, b]),
				&[index, v] => (index, [v, v, v]),
				_ => return Err(FormatError::InvalidTextLine { line: i + 1, msg: "Malformed line".to_string() }),
			};

			let mut color = [0_u8; 3];
			for (dst, v) in color.iter_mut().zip(rgb) {
				*dst = u8::try_from(v)
					.map_err(|_| FormatError::InvalidTextLine { line: i + 1, msg: format!("Invalid color value {v}") })?;
			}

			// out of range indices are ignored
			if let Ok(index) = u8::try_from(index) {
				let offset = index as usize * 3;
				data[offset..offset + 3].copy_from_slice(&color);
			}
			found_entries = true;
		}

		if !found_entries {
			data.clear();
		}

		Ok(RawPaletteData::rgb(PaletteFormat::Text, data))
	}
}
