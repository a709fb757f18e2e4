use std::io::{BufRead, Cursor};

use byteorder::{BigEndian, ReadBytesExt};

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::error::FormatError;
use crate::palettes::loader::{PaletteFormat, PaletteReader, RawPaletteData};

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/act_file.cpp

const ACT_SIZE: usize = MAX_PALETTE_COLORS * 3;
// color count and transparent index, both u16
const ACT_FOOTER_SIZE: usize = 4;

/// Adobe Color Tables.
pub struct AdobeActReader;

impl PaletteReader for AdobeActReader {
	fn format(&self) -> PaletteFormat {
		PaletteFormat::AdobeAct
	}

	fn parse(&self, reader: &mut dyn BufRead) -> Result<RawPaletteData, FormatError> {
		let mut bytes = Vec::new();
		reader.read_to_end(&mut bytes)?;

		if bytes.len() != ACT_SIZE && bytes.len() != ACT_SIZE + ACT_FOOTER_SIZE {
			return Err(FormatError::InvalidBinaryData {
				position: 0,
				msg: format!("Unexpected file size {}", bytes.len()),
			});
		}

		let mut data = bytes[..ACT_SIZE].to_vec();

		if bytes.len() > ACT_SIZE {
			let mut footer = Cursor::new(&bytes[ACT_SIZE..]);
			let num_colors = footer.read_u16::<BigEndian>()?;

			if num_colors as usize > MAX_PALETTE_COLORS {
				return Err(FormatError::InvalidBinaryData {
					position: ACT_SIZE,
					msg: format!("Invalid footer value {num_colors:#X}"),
				});
			}

			data.truncate(num_colors as usize * 3);
		}

		Ok(RawPaletteData::rgb(PaletteFormat::AdobeAct, data))
	}
}
