use std::io::BufRead;

use regex::Regex;

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::error::FormatError;
use crate::palettes::loader::{PaletteFormat, PaletteReader, RawPaletteData, grey_ramp_rgb};

// https://developer.gimp.org/core/standards/gpl/

const GIMP_MAGIC: &str = "GIMP Palette";
const MAX_LINE_LENGTH: usize = 100;

/// GIMP palettes. Always yields 256 RGB entries, entries the file doesn't define stay grey.
pub struct GimpPaletteReader;

impl PaletteReader for GimpPaletteReader {
	fn format(&self) -> PaletteFormat {
		PaletteFormat::Gpl
	}

	fn parse(&self, reader: &mut dyn BufRead) -> Result<RawPaletteData, FormatError> {
		let field_re = Regex::new(r"^\w+:").unwrap();

		let mut lines = reader.lines();
		let magic = lines.next().transpose()?.unwrap_or_default();
		if !magic.starts_with(GIMP_MAGIC) {
			return Err(FormatError::InvalidTextLine {
				line: 1,
				msg: format!("Invalid magic sequence: \"{}\"", magic.trim()),
			});
		}

		let mut data = grey_ramp_rgb();
		let mut index = 0;
		for (i, line) in lines.enumerate() {
			if index >= MAX_PALETTE_COLORS {
				break;
			}

			let line = line?;
			let trimmed_line = line.trim();
			if trimmed_line.is_empty() || trimmed_line.starts_with('#') || field_re.is_match(trimmed_line) {
				continue;
			}

			if line.len() > MAX_LINE_LENGTH {
				return Err(FormatError::InvalidTextLine { line: i + 2, msg: "Line too long".to_string() });
			}

			// anything after the third value is the color's name
			let values = trimmed_line.split_whitespace().take(3)
				.map(|v| v.parse::<u8>())
				.collect::<Result<Vec<u8>, _>>()
				.map_err(|_| FormatError::InvalidTextLine { line: i + 2, msg: "Invalid color value".to_string() })?;

			if values.len() != 3 {
				return Err(FormatError::InvalidTextLine { line: i + 2, msg: "Malformed line".to_string() });
			}

			data[index * 3..index * 3 + 3].copy_from_slice(&values);
			index += 1;
		}

		Ok(RawPaletteData::rgb(PaletteFormat::Gpl, data))
	}
}
