use std::io::BufRead;

use regex::{Captures, Regex};

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::error::FormatError;
use crate::palettes::loader::{PaletteFormat, PaletteReader, RawPaletteData};

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/pal_file.cpp

const PAL_MAGIC: &str = "JASC-PAL";
const PAL_VERSION: &str = "0100";

/// Paint Shop Pro palettes.
pub struct JascPalReader;

impl PaletteReader for JascPalReader {
	fn format(&self) -> PaletteFormat {
		PaletteFormat::Pal
	}

	fn parse(&self, reader: &mut dyn BufRead) -> Result<RawPaletteData, FormatError> {
		let re = Regex::new(r"^(?P<r>\d+)\s+(?P<g>\d+)\s+(?P<b>\d+)$").unwrap();

		let mut lines = reader.lines();

		let magic = lines.next().transpose()?.unwrap_or_default();
		if magic.trim() != PAL_MAGIC {
			return Err(FormatError::InvalidTextLine {
				line: 1,
				msg: format!("Invalid magic sequence: {}", magic.trim()),
			});
		}

		let version = lines.next().transpose()?.unwrap_or_default();
		if version.trim() != PAL_VERSION {
			return Err(FormatError::InvalidTextLine {
				line: 2,
				msg: format!("Invalid version: {}", version.trim()),
			});
		}

		// the declared number of colors isn't needed, the entries follow it
		lines.next().transpose()?;

		let mut data = Vec::new();
		for (i, line) in lines.enumerate() {
			let line_no = i + 4;
			let trimmed_line = line?.trim().to_owned();
			if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
				continue;
			}

			let groups: Captures = match re.captures(&trimmed_line) {
				None => {
					return Err(FormatError::InvalidTextLine {
						line: line_no,
						msg: "Malformed line".to_string(),
					});
				}
				Some(captures) => captures
			};

			for (name, label) in [("r", "red"), ("g", "green"), ("b", "blue")] {
				let v = groups[name].parse::<u8>()
					.map_err(|_| FormatError::InvalidTextLine { line: line_no, msg: format!("Invalid {label} value") })?;
				data.push(v);
			}

			if data.len() > MAX_PALETTE_COLORS * 3 {
				return Err(FormatError::TooManyColors);
			}
		}

		Ok(RawPaletteData::rgb(PaletteFormat::Pal, data))
	}
}
