use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::abbreviations::channel_count;
use crate::palettes::error::{FormatError, PaletteError, Result};
use crate::palettes::pal_act::AdobeActReader;
use crate::palettes::pal_col::AnimatorColReader;
use crate::palettes::pal_ggr::GimpGradientReader;
use crate::palettes::pal_gpl::GimpPaletteReader;
use crate::palettes::pal_hex::HexReader;
use crate::palettes::pal_json::JsonReader;
use crate::palettes::pal_pal::JascPalReader;
use crate::palettes::pal_txt::TextPaletteReader;
use crate::palettes::palette::Palette;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteFormat {
	Gpl, // GIMP palette
	Ggr, // GIMP gradient
	Text, // plain "index r g b" lines
	Pal, // JASC-PAL
	Json, // array of hex strings
	Hex, // one hex color per line
	AdobeAct, // .act
	AnimatorProCol, // .col
}

/// The order [load] tries the readers in.
pub const LOAD_ORDER: [PaletteFormat; 8] = [
	PaletteFormat::Gpl,
	PaletteFormat::Ggr,
	PaletteFormat::Text,
	PaletteFormat::Pal,
	PaletteFormat::Json,
	PaletteFormat::Hex,
	PaletteFormat::AdobeAct,
	PaletteFormat::AnimatorProCol,
];

impl PaletteFormat {
	pub fn reader(self) -> &'static dyn PaletteReader {
		match self {
			PaletteFormat::Gpl => &GimpPaletteReader,
			PaletteFormat::Ggr => &GimpGradientReader,
			PaletteFormat::Text => &TextPaletteReader,
			PaletteFormat::Pal => &JascPalReader,
			PaletteFormat::Json => &JsonReader,
			PaletteFormat::Hex => &HexReader,
			PaletteFormat::AdobeAct => &AdobeActReader,
			PaletteFormat::AnimatorProCol => &AnimatorColReader,
		}
	}
}

impl Display for PaletteFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteFormat::Gpl => write!(f, "gpl"),
			PaletteFormat::Ggr => write!(f, "ggr"),
			PaletteFormat::Text => write!(f, "txt"),
			PaletteFormat::Pal => write!(f, "pal"),
			PaletteFormat::Json => write!(f, "json"),
			PaletteFormat::Hex => write!(f, "hex"),
			PaletteFormat::AdobeAct => write!(f, "act"),
			PaletteFormat::AnimatorProCol => write!(f, "col"),
		}
	}
}

/// Parses one on-disk palette format.
///
/// Syntax and value errors mean "not this format" to [load], see [FormatError::is_mismatch].
pub trait PaletteReader {
	fn format(&self) -> PaletteFormat;

	fn parse(&self, reader: &mut dyn BufRead) -> std::result::Result<RawPaletteData, FormatError>;
}

/// Palette bytes as read from a file, one interleaved entry after another.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RawPaletteData {
	pub format: PaletteFormat,
	pub raw_mode: String,
	pub data: Vec<u8>,
}

impl RawPaletteData {
	pub(crate) fn rgb(format: PaletteFormat, data: Vec<u8>) -> Self {
		Self { format, raw_mode: "RGB".to_string(), data }
	}

	/// Number of complete entries.
	pub fn len(&self) -> usize {
		match channel_count(&self.raw_mode) {
			0 => 0,
			n => self.data.len() / n,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Complete entries in file order. Empty when the raw mode has no channels.
	pub fn entries(&self) -> impl Iterator<Item = &[u8]> {
		let channels = channel_count(&self.raw_mode);
		let data = if channels == 0 { &[][..] } else { self.data.as_slice() };
		data.chunks_exact(channels.max(1))
	}

	/// Wraps the data in a raw palette.
	pub fn into_palette(self) -> Palette {
		Palette::raw(self.raw_mode, self.data)
	}

	/// Unpacks the entries into a channel-major palette of `mode`.
	///
	/// Channels `mode` has beyond the raw mode, and entries past the end of the data, are 0.
	pub fn to_structured(&self, mode: &str) -> Palette {
		let channels = channel_count(mode);
		let mut data = vec![0_u8; MAX_PALETTE_COLORS * channels];

		for (i, entry) in self.entries().take(MAX_PALETTE_COLORS).enumerate() {
			for (c, &v) in entry.iter().take(channels).enumerate() {
				data[c * MAX_PALETTE_COLORS + i] = v;
			}
		}

		Palette::structured(mode, data)
	}
}

/// 256 interleaved RGB grey entries, the starting point of the GIMP and text palette readers.
pub(crate) fn grey_ramp_rgb() -> Vec<u8> {
	(0..=u8::MAX).flat_map(|i| [i, i, i]).collect()
}

/// Loads a palette file, trying every reader in [LOAD_ORDER].
pub fn load<P: AsRef<Path>>(path: P) -> Result<RawPaletteData> {
	let readers: Vec<&dyn PaletteReader> = LOAD_ORDER.iter().map(|f| f.reader()).collect();
	load_with(path, &readers)
}

/// Loads a palette file with a single known format.
///
/// Unlike [load], the reader's error is returned as-is.
pub fn load_as<P: AsRef<Path>>(path: P, format: PaletteFormat) -> Result<RawPaletteData> {
	let path = path.as_ref();
	let f = File::open(path)?;
	let mut reader = BufReader::new(f);

	let pal = format.reader().parse(&mut reader)?;
	if pal.data.is_empty() {
		return Err(PaletteError::PaletteLoad { path: path.to_path_buf() });
	}

	Ok(pal)
}

/// Loads a palette file, trying `readers` in order.
pub fn load_with<P: AsRef<Path>>(path: P, readers: &[&dyn PaletteReader]) -> Result<RawPaletteData> {
	let path = path.as_ref();
	let f = File::open(path)?;
	let mut reader = BufReader::new(f);

	load_from_reader_with(&mut reader, readers)?
		.ok_or_else(|| PaletteError::PaletteLoad { path: path.to_path_buf() })
}

/// Runs [LOAD_ORDER] over an arbitrary stream. `None` if no reader matched.
pub fn load_from_reader<R: BufRead + Seek>(stream: &mut R) -> Result<Option<RawPaletteData>> {
	let readers: Vec<&dyn PaletteReader> = LOAD_ORDER.iter().map(|f| f.reader()).collect();
	load_from_reader_with(stream, &readers)
}

pub fn load_from_reader_with<R: BufRead + Seek>(stream: &mut R, readers: &[&dyn PaletteReader]) -> Result<Option<RawPaletteData>> {
	for reader in readers {
		let format = reader.format();
		stream.rewind()?;

		match reader.parse(stream) {
			Ok(pal) if !pal.data.is_empty() => {
				debug!("loaded {} entries as {format}", pal.len());
				return Ok(Some(pal));
			}
			Ok(_) => debug!("{format} reader found no colors"),
			Err(e) if e.is_mismatch() => debug!("not a {format} palette: {e}"),
			Err(e) => return Err(e.into()),
		}
	}

	Ok(None)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn structured_unpacking() {
		let raw = RawPaletteData::rgb(PaletteFormat::Hex, vec![10, 20, 30, 40, 50, 60]);
		assert_eq!(raw.len(), 2);

		let pal = raw.to_structured("RGB");
		assert_eq!(pal.value(0, 0), Some(10));
		assert_eq!(pal.value(0, 2), Some(30));
		assert_eq!(pal.value(1, 1), Some(50));
		assert_eq!(pal.value(2, 0), Some(0));

		let pal = raw.to_structured("RGBA");
		assert_eq!(pal.value(1, 3), Some(0));
		assert_eq!(pal.to_bytes().unwrap().len(), 1024);
	}

	#[test]
	fn into_palette_is_raw() {
		let raw = RawPaletteData::rgb(PaletteFormat::Gpl, grey_ramp_rgb());
		let pal = raw.into_palette();
		assert!(pal.is_raw());
		assert_eq!(pal.get_data().0, "RGB");
		assert_eq!(pal.get_data().1.len(), 768);
	}

	#[test]
	fn channelless_mode_has_no_entries() {
		let raw = RawPaletteData { format: PaletteFormat::Hex, raw_mode: ";16".to_string(), data: vec![1, 2, 3] };
		assert_eq!(raw.len(), 0);
		assert!(raw.is_empty());
		assert_eq!(raw.entries().count(), 0);
		assert_eq!(raw.to_structured("RGB").value(0, 0), Some(0));
	}

	#[test]
	fn serializes_format_tag() {
		let raw = RawPaletteData::rgb(PaletteFormat::AdobeAct, vec![1, 2, 3]);
		let json = serde_json::to_value(&raw).unwrap();
		assert_eq!(json["format"], "adobe-act");
		assert_eq!(json["raw_mode"], "RGB");
		assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
	}
}
