use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::abbreviations::split_abbreviations;
use crate::palettes::error::{PaletteError, Result};

/// `0..=255` repeated once per channel, channel-major.
pub(crate) fn identity_ramp(channels: usize) -> Vec<u8> {
	(0..channels).flat_map(|_| 0..=u8::MAX).collect()
}

/// Dynamically allocated colors, iterated in allocation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorTable {
	order: Vec<Vec<u8>>,
	index: HashMap<Vec<u8>, u8>,
}

impl ColorTable {
	pub fn get(&self, color: &[u8]) -> Option<u8> {
		self.index.get(color).copied()
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	/// `(color, index)` pairs, oldest allocation first.
	pub fn iter(&self) -> impl Iterator<Item = (&[u8], u8)> {
		self.order.iter().enumerate().map(|(i, c)| (c.as_slice(), i as u8))
	}

	// indices are handed out sequentially, so a color's index is its position
	fn push(&mut self, color: &[u8]) -> u8 {
		let index = self.order.len() as u8;
		self.order.push(color.to_vec());
		self.index.insert(color.to_vec(), index);
		index
	}
}

/// How a palette stores its entries.
#[derive(Clone, Debug, PartialEq)]
pub enum Representation {
	/// `256 * channels` bytes, channel-major: index `i` of channel `c` lives at `c * 256 + i`.
	/// `colors` holds every dynamically allocated color and its index, in allocation order.
	Structured {
		data: Vec<u8>,
		colors: ColorTable,
	},
	/// Producer-defined bytes, passed through untouched along with their raw mode.
	Raw {
		raw_mode: String,
		data: Vec<u8>,
	},
}

/// Color palette for palette mapped images.
///
/// Cloning a palette yields a fully independent copy, including the buffer and the
/// color allocation table.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	mode: String,
	channels: Vec<String>,
	repr: Representation,
	dirty: bool,
}

impl Default for Palette {
	fn default() -> Self {
		Self::new("RGB")
	}
}

impl Palette {
	/// Creates a palette holding the identity ramp `0..=255` for every channel of `mode`.
	pub fn new(mode: &str) -> Self {
		let channels = split_abbreviations(mode);
		let data = identity_ramp(channels.len());
		Self::structured_with_channels(mode, channels, data)
	}

	/// Creates a palette from explicit parts.
	///
	/// `channels` falls back to the labels derived from `mode` when `None` or empty,
	/// `data` falls back to the identity ramp. A `size` of 0 requires `data` to hold exactly
	/// `256 * channels` bytes, any other `size` must equal the length of `data`.
	pub fn from_parts(mode: &str, channels: Option<Vec<String>>, data: Option<Vec<u8>>, size: usize) -> Result<Self> {
		let channels = match channels {
			Some(c) if !c.is_empty() => c,
			_ => split_abbreviations(mode),
		};

		let data = data.unwrap_or_else(|| identity_ramp(channels.len()));

		let expected = if size == 0 { channels.len() * MAX_PALETTE_COLORS } else { size };
		if data.len() != expected {
			return Err(PaletteError::InvalidSize { expected, actual: data.len() });
		}

		Ok(Self::structured_with_channels(mode, channels, data))
	}

	/// Creates a structured palette from channel-major `data` with `mode`'s derived labels.
	/// Callers guarantee the length.
	pub(crate) fn structured(mode: &str, data: Vec<u8>) -> Self {
		Self::structured_with_channels(mode, split_abbreviations(mode), data)
	}

	fn structured_with_channels(mode: &str, channels: Vec<String>, data: Vec<u8>) -> Self {
		Self {
			mode: mode.to_string(),
			channels,
			repr: Representation::Structured { data, colors: ColorTable::default() },
			dirty: false,
		}
	}

	/// Wraps raw palette data. The palette starts out dirty and takes its channel labels
	/// from `raw_mode`.
	pub fn raw<S: Into<String>>(raw_mode: S, data: Vec<u8>) -> Self {
		let raw_mode = raw_mode.into();
		Self {
			mode: "RGB".to_string(),
			channels: split_abbreviations(&raw_mode),
			repr: Representation::Raw { raw_mode, data },
			dirty: true,
		}
	}

	pub fn mode(&self) -> &str {
		&self.mode
	}

	pub fn channels(&self) -> &[String] {
		&self.channels
	}

	pub fn representation(&self) -> &Representation {
		&self.repr
	}

	pub fn raw_mode(&self) -> Option<&str> {
		match &self.repr {
			Representation::Raw { raw_mode, .. } => Some(raw_mode),
			Representation::Structured { .. } => None,
		}
	}

	pub fn is_raw(&self) -> bool {
		matches!(self.repr, Representation::Raw { .. })
	}

	/// Whether the buffer changed since the last [Palette::mark_clean].
	pub fn is_dirty(&self) -> bool {
		self.dirty
	}

	pub fn mark_clean(&mut self) {
		self.dirty = false;
	}

	/// Number of dynamically allocated colors.
	pub fn color_count(&self) -> usize {
		match &self.repr {
			Representation::Structured { colors, .. } => colors.len(),
			Representation::Raw { .. } => 0,
		}
	}

	/// Looks up a previously allocated color without allocating it.
	pub fn color_index(&self, color: &[u8]) -> Option<u8> {
		match &self.repr {
			Representation::Structured { colors, .. } => colors.get(color),
			Representation::Raw { .. } => None,
		}
	}

	/// Allocated colors with their indices, oldest first. Empty for raw palettes.
	pub fn allocated_colors(&self) -> impl Iterator<Item = (&[u8], u8)> {
		let colors = match &self.repr {
			Representation::Structured { colors, .. } => Some(colors),
			Representation::Raw { .. } => None,
		};
		colors.into_iter().flat_map(|c| c.iter())
	}

	/// Value of `channel` at palette `index`, if the buffer is structured and holds it.
	pub fn value(&self, index: u8, channel: usize) -> Option<u8> {
		match &self.repr {
			Representation::Structured { data, .. } if channel < self.channels.len() => {
				data.get(channel * MAX_PALETTE_COLORS + index as usize).copied()
			}
			_ => None,
		}
	}

	/// Returns the palette index of `color`, allocating the next free slot if it is new.
	///
	/// `color` needs one value per channel. Allocating writes the color into the buffer
	/// and marks the palette dirty.
	pub fn get_color(&mut self, color: &[u8]) -> Result<u8> {
		let num_channels = self.channels.len();
		let Representation::Structured { data, colors } = &mut self.repr else {
			return Err(PaletteError::RawPalette);
		};

		if let Some(index) = colors.get(color) {
			return Ok(index);
		}

		if color.len() != num_channels {
			return Err(PaletteError::InvalidColorSpecifier(format!(
				"{color:?} (expected {num_channels} channel values)"
			)));
		}

		let index = colors.len();
		if index >= MAX_PALETTE_COLORS {
			return Err(PaletteError::PaletteFull);
		}

		let required = num_channels.saturating_sub(1) * MAX_PALETTE_COLORS + index + 1;
		if data.len() < required {
			return Err(PaletteError::InvalidSize { expected: num_channels * MAX_PALETTE_COLORS, actual: data.len() });
		}

		for (c, &v) in color.iter().enumerate() {
			data[c * MAX_PALETTE_COLORS + index] = v;
		}

		let index = colors.push(color);
		self.dirty = true;

		debug!("allocated palette index {index} for {color:?}");
		Ok(index)
	}

	/// The channel-major buffer of a structured palette.
	pub fn to_bytes(&self) -> Result<&[u8]> {
		match &self.repr {
			Representation::Structured { data, .. } => Ok(data.as_slice()),
			Representation::Raw { .. } => Err(PaletteError::RawPalette),
		}
	}

	/// Palette contents paired with the mode tag an image's palette primitive expects.
	///
	/// Raw palettes yield their raw mode and bytes unchanged, structured ones yield
	/// `"<mode>;L"` and the channel-major buffer.
	pub fn get_data(&self) -> (String, &[u8]) {
		match &self.repr {
			Representation::Raw { raw_mode, data } => (raw_mode.clone(), data.as_slice()),
			Representation::Structured { data, .. } => (format!("{};L", self.mode), data.as_slice()),
		}
	}

	/// Writes a human-readable dump: two comment lines, then `index v0 v1 ...` for all 256 entries.
	pub fn save<W: Write>(&self, mut w: W) -> Result<()> {
		let data = self.to_bytes()?;

		writeln!(w, "# Palette")?;
		writeln!(w, "# Mode: {}", self.mode)?;

		let mut padded = false;
		for i in 0..MAX_PALETTE_COLORS {
			write!(w, "{i}")?;
			for c in 0..self.channels.len() {
				match data.get(c * MAX_PALETTE_COLORS + i) {
					Some(v) => write!(w, " {v}")?,
					None => {
						padded = true;
						write!(w, " 0")?
					}
				}
			}
			writeln!(w)?;
		}
		w.flush()?;

		if padded {
			warn!("palette buffer holds {} bytes, missing values were written as 0", data.len());
		}

		Ok(())
	}

	pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		// check before touching the file system
		self.to_bytes()?;

		let f = File::create(path)?;
		self.save(BufWriter::new(f))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn identity_ramp_is_channel_major() {
		let ramp = identity_ramp(2);
		assert_eq!(ramp.len(), 512);
		assert_eq!(ramp[0], 0);
		assert_eq!(ramp[255], 255);
		assert_eq!(ramp[256], 0);
		assert_eq!(ramp[511], 255);
	}

	#[test]
	fn raw_palettes_start_dirty() {
		let pal = Palette::raw("RGBA", vec![1, 2, 3, 4]);
		assert!(pal.is_dirty());
		assert_eq!(pal.mode(), "RGB");
		assert_eq!(pal.channels(), ["R", "G", "B", "A"]);
		assert_eq!(pal.raw_mode(), Some("RGBA"));
		assert_eq!(pal.value(0, 0), None);
	}

	#[test]
	fn short_buffers_refuse_allocation_out_of_bounds() {
		let mut pal = Palette::from_parts("RGB", None, Some(vec![0; 300]), 300).unwrap();
		assert!(matches!(pal.get_color(&[1, 2, 3]), Err(PaletteError::InvalidSize { expected: 768, actual: 300 })));
		assert!(!pal.is_dirty());
	}
}
