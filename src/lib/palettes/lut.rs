use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::error::{PaletteError, Result};

/// An 8-bit to 8-bit lookup table.
pub type Lut = [u8; MAX_PALETTE_COLORS];

/// Builds a linear ramp from `black` to `white`.
///
/// Only `black == 0` is supported, entry `i` is `white * i / 255` rounded down.
pub fn linear_lut(black: u8, white: u8) -> Result<Lut> {
	if black != 0 {
		return Err(PaletteError::UnsupportedParameter(format!(
			"linear LUT with a black level of {black}"
		)));
	}

	let mut lut = [0_u8; MAX_PALETTE_COLORS];
	for (i, v) in lut.iter_mut().enumerate() {
		*v = (white as usize * i / 255) as u8;
	}

	Ok(lut)
}

/// Builds a gamma curve, entry `i` is `((i / 255) ^ exponent) * 255` rounded to nearest.
///
/// Results outside `0..=255` (e.g. for negative exponents) saturate.
pub fn gamma_lut(exponent: f64) -> Lut {
	let mut lut = [0_u8; MAX_PALETTE_COLORS];
	for (i, v) in lut.iter_mut().enumerate() {
		let x = (i as f64 / 255.0).powf(exponent);
		*v = (x * 255.0 + 0.5).floor() as u8;
	}

	lut
}
