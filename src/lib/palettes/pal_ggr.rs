use std::f64::consts::PI;
use std::io::BufRead;

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::error::FormatError;
use crate::palettes::loader::{PaletteFormat, PaletteReader, RawPaletteData};

// https://gitlab.gnome.org/GNOME/gimp/-/blob/master/devel-docs/ggr.txt

const GRADIENT_MAGIC: &str = "GIMP Gradient";
const EPSILON: f64 = 1e-10;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Blend {
	Linear,
	Curved,
	Sine,
	SphereIncreasing,
	SphereDecreasing,
}

impl TryFrom<u32> for Blend {
	type Error = u32;

	fn try_from(v: u32) -> Result<Self, Self::Error> {
		match v {
			0 => Ok(Blend::Linear),
			1 => Ok(Blend::Curved),
			2 => Ok(Blend::Sine),
			3 => Ok(Blend::SphereIncreasing),
			4 => Ok(Blend::SphereDecreasing),
			_ => Err(v),
		}
	}
}

fn linear(middle: f64, pos: f64) -> f64 {
	if pos <= middle {
		if middle < EPSILON { 0.0 } else { 0.5 * pos / middle }
	} else {
		let pos = pos - middle;
		let middle = 1.0 - middle;
		if middle < EPSILON { 1.0 } else { 0.5 + 0.5 * pos / middle }
	}
}

impl Blend {
	/// Blend factor at `pos` for a segment whose midpoint sits at `middle`, both in `0..=1`.
	fn factor(self, middle: f64, pos: f64) -> f64 {
		match self {
			Blend::Linear => linear(middle, pos),
			Blend::Curved => pos.powf(0.5_f64.ln() / middle.max(EPSILON).ln()),
			Blend::Sine => ((-PI / 2.0 + PI * linear(middle, pos)).sin() + 1.0) / 2.0,
			Blend::SphereIncreasing => (1.0 - (linear(middle, pos) - 1.0).powi(2)).sqrt(),
			Blend::SphereDecreasing => 1.0 - (1.0 - linear(middle, pos).powi(2)).sqrt(),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
struct Segment {
	left: f64,
	middle: f64,
	right: f64,
	left_color: [f64; 4],
	right_color: [f64; 4],
	blend: Blend,
}

impl Segment {
	fn parse(line: &str, line_no: usize) -> Result<Self, FormatError> {
		let invalid = |msg: &str| FormatError::InvalidTextLine { line: line_no, msg: msg.to_string() };

		let tokens: Vec<&str> = line.split_whitespace().collect();
		if tokens.len() < 11 {
			return Err(invalid("Malformed segment"));
		}

		let w = tokens[..11].iter()
			.map(|t| t.parse::<f64>())
			.collect::<Result<Vec<f64>, _>>()
			.map_err(|_| invalid("Invalid segment value"))?;

		// GIMP 1.2 segments may stop after the colors, both trailing fields default to 0
		let int_field = |i: usize| -> Result<u32, FormatError> {
			tokens.get(i).map_or(Ok(0), |t| t.parse::<u32>().map_err(|_| invalid("Invalid segment value")))
		};

		let blend = Blend::try_from(int_field(11)?)
			.map_err(|v| invalid(&format!("Unknown blending function {v}")))?;

		let color_space = int_field(12)?;
		if color_space != 0 {
			return Err(FormatError::Unsupported("HSV gradient segments".to_string()));
		}

		Ok(Self {
			left: w[0],
			middle: w[1],
			right: w[2],
			left_color: [w[3], w[4], w[5], w[6]],
			right_color: [w[7], w[8], w[9], w[10]],
			blend,
		})
	}

	fn color_at(&self, x: f64) -> [u8; 4] {
		let width = self.right - self.left;
		let scale = if width < EPSILON {
			self.blend.factor(0.5, 0.5)
		} else {
			self.blend.factor((self.middle - self.left) / width, (x - self.left) / width)
		};

		let mut rgba = [0_u8; 4];
		for (i, v) in rgba.iter_mut().enumerate() {
			let c0 = self.left_color[i];
			let c1 = self.right_color[i];
			*v = (255.0 * ((c1 - c0) * scale + c0) + 0.5).floor().clamp(0.0, 255.0) as u8;
		}
		rgba
	}
}

/// GIMP gradients, sampled into 256 RGBA entries.
pub struct GimpGradientReader;

impl GimpGradientReader {
	fn read_segments(reader: &mut dyn BufRead) -> Result<Vec<Segment>, FormatError> {
		let mut lines = reader.lines();

		let magic = lines.next().transpose()?.unwrap_or_default();
		if !magic.starts_with(GRADIENT_MAGIC) {
			return Err(FormatError::InvalidTextLine {
				line: 1,
				msg: format!("Invalid magic sequence: \"{}\"", magic.trim()),
			});
		}

		// GIMP 1.3 and later name their gradients, 1.2 doesn't
		let mut line_no = 2;
		let mut line = lines.next().transpose()?.unwrap_or_default();
		if line.starts_with("Name: ") {
			line_no += 1;
			line = lines.next().transpose()?.unwrap_or_default();
		}

		let count = line.trim().parse::<usize>()
			.map_err(|_| FormatError::InvalidTextLine { line: line_no, msg: "Invalid segment count".to_string() })?;

		let mut segments = Vec::with_capacity(count.min(MAX_PALETTE_COLORS));
		for _ in 0..count {
			line_no += 1;
			let line = lines.next().transpose()?
				.ok_or_else(|| FormatError::InvalidTextLine { line: line_no, msg: "Missing segment".to_string() })?;
			segments.push(Segment::parse(&line, line_no)?);
		}

		Ok(segments)
	}
}

impl PaletteReader for GimpGradientReader {
	fn format(&self) -> PaletteFormat {
		PaletteFormat::Ggr
	}

	fn parse(&self, reader: &mut dyn BufRead) -> Result<RawPaletteData, FormatError> {
		let segments = Self::read_segments(reader)?;

		let mut data = Vec::with_capacity(MAX_PALETTE_COLORS * 4);
		let mut ix = 0;
		if !segments.is_empty() {
			for i in 0..MAX_PALETTE_COLORS {
				let x = i as f64 / (MAX_PALETTE_COLORS - 1) as f64;
				while segments[ix].right < x && ix + 1 < segments.len() {
					ix += 1;
				}
				data.extend_from_slice(&segments[ix].color_at(x));
			}
		}

		Ok(RawPaletteData { format: PaletteFormat::Ggr, raw_mode: "RGBA".to_string(), data })
	}
}
