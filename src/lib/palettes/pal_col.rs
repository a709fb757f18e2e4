use std::io::{BufRead, Cursor, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::error::FormatError;
use crate::palettes::loader::{PaletteFormat, PaletteReader, RawPaletteData};

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/col_file.cpp

const OLD_COL_SIZE: usize = MAX_PALETTE_COLORS * 3;
const PRO_HEADER_SIZE: usize = 8;
const PRO_MAGIC: u16 = 0xB123;

fn scale_6bits_to_8bits(v: u8) -> u8 {
	let v = v & 0b111111;
	(v << 2) | (v >> 4)
}

/// Animator (6-bit, headerless) and Animator Pro (8-bit, with header) COL palettes.
pub struct AnimatorColReader;

impl PaletteReader for AnimatorColReader {
	fn format(&self) -> PaletteFormat {
		PaletteFormat::AnimatorProCol
	}

	fn parse(&self, reader: &mut dyn BufRead) -> Result<RawPaletteData, FormatError> {
		let mut bytes = Vec::new();
		reader.read_to_end(&mut bytes)?;

		if bytes.len() == OLD_COL_SIZE {
			let data = bytes.iter().map(|&v| scale_6bits_to_8bits(v)).collect();
			return Ok(RawPaletteData::rgb(PaletteFormat::AnimatorProCol, data));
		}

		if bytes.len() < PRO_HEADER_SIZE || (bytes.len() - PRO_HEADER_SIZE) % 3 != 0 {
			return Err(FormatError::InvalidBinaryData { position: 0, msg: "Not an Animator COL file".to_string() });
		}

		let mut f = Cursor::new(&bytes);
		f.seek(SeekFrom::Start(4))?; // skip file size

		let magic = f.read_u16::<LittleEndian>()?;
		if magic != PRO_MAGIC {
			return Err(FormatError::InvalidBinaryData {
				position: (f.position() - 2) as usize,
				msg: format!("Invalid magic sequence {magic:#02X}"),
			});
		}

		let version = f.read_u16::<LittleEndian>()?;
		if version != 0 {
			return Err(FormatError::InvalidBinaryData {
				position: (f.position() - 2) as usize,
				msg: format!("Invalid version {version:#02X}"),
			});
		}

		let data = bytes[PRO_HEADER_SIZE..].to_vec();
		if data.len() > MAX_PALETTE_COLORS * 3 {
			return Err(FormatError::TooManyColors);
		}

		Ok(RawPaletteData::rgb(PaletteFormat::AnimatorProCol, data))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn six_bit_scaling() {
		assert_eq!(scale_6bits_to_8bits(0), 0);
		assert_eq!(scale_6bits_to_8bits(63), 255);
		assert_eq!(scale_6bits_to_8bits(32), 130);
	}
}
