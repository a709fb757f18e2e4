use std::io::BufRead;

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::error::FormatError;
use crate::palettes::loader::{PaletteFormat, PaletteReader, RawPaletteData};
use crate::palettes::pal_hex::parse_hex_color;

/// A JSON array of hexadecimal color strings.
pub struct JsonReader;

impl PaletteReader for JsonReader {
	fn format(&self) -> PaletteFormat {
		PaletteFormat::Json
	}

	fn parse(&self, reader: &mut dyn BufRead) -> Result<RawPaletteData, FormatError> {
		let colors: Vec<String> = serde_json::from_reader(reader)
			.map_err(|e| FormatError::InvalidTextLine { line: e.line(), msg: e.to_string() })?;

		if colors.len() > MAX_PALETTE_COLORS {
			return Err(FormatError::TooManyColors);
		}

		let mut data = Vec::with_capacity(colors.len() * 3);
		for (i, c) in colors.iter().enumerate() {
			let rgb = parse_hex_color(c).ok_or_else(|| FormatError::InvalidJsonEntry {
				index: i,
				msg: format!("\"{}\" is not a valid hexadecimal color value", c.trim()),
			})?;
			data.extend_from_slice(&rgb);
		}

		Ok(RawPaletteData::rgb(PaletteFormat::Json, data))
	}
}
