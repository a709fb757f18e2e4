use rand::Rng;

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::abbreviations::channel_count;
use crate::palettes::colors::{ColorResolver, CssColorResolver};
use crate::palettes::error::Result;
use crate::palettes::lut::linear_lut;
use crate::palettes::palette::{Palette, identity_ramp};

pub const DEFAULT_SEPIA_WHITE: &str = "#fff0c0";

/// Wraps raw palette data, see [Palette::raw].
pub fn raw<S: Into<String>>(raw_mode: S, data: Vec<u8>) -> Palette {
	Palette::raw(raw_mode, data)
}

/// A palette running from 255 down to 0 on every channel.
pub fn negative(mode: &str) -> Palette {
	let ramp: Vec<u8> = (0..=u8::MAX).rev().collect();
	Palette::structured(mode, ramp.repeat(channel_count(mode)))
}

/// A palette filled with uniformly random values.
pub fn random(mode: &str) -> Palette {
	random_with(mode, &mut rand::rng())
}

pub fn random_with<R: Rng>(mode: &str, rng: &mut R) -> Palette {
	let mut data = vec![0_u8; MAX_PALETTE_COLORS * channel_count(mode)];
	rng.fill(data.as_mut_slice());
	Palette::structured(mode, data)
}

/// An RGB palette ramping from black to `white`.
pub fn sepia(white: &str) -> Result<Palette> {
	sepia_with(white, &CssColorResolver)
}

pub fn sepia_with<C: ColorResolver + ?Sized>(white: &str, resolver: &C) -> Result<Palette> {
	let [r, g, b] = resolver.resolve(white)?;

	let mut data = Vec::with_capacity(MAX_PALETTE_COLORS * 3);
	for channel in [r, g, b] {
		data.extend_from_slice(&linear_lut(0, channel)?);
	}

	Ok(Palette::structured("RGB", data))
}

/// A palette running from 0 up to 255 on every channel.
pub fn wedge(mode: &str) -> Palette {
	Palette::structured(mode, identity_ramp(channel_count(mode)))
}
