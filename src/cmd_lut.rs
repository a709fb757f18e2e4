use anyhow::Result;

use pal_rs::palettes::lut::{gamma_lut, linear_lut};

use crate::commands::{LutArgs, LutKind};

pub(crate) fn palette_lut(args: &LutArgs) -> Result<()> {
	let lut = match args.kind {
		LutKind::Linear => linear_lut(args.black, args.white)?,
		LutKind::Gamma => gamma_lut(args.exponent),
	};

	// 16 values per row, like a 16x16 palette grid
	for row in lut.chunks(16) {
		let row = row.iter().map(|v| format!("{v:>3}")).collect::<Vec<String>>();
		println!("{}", row.join(" "));
	}

	Ok(())
}
