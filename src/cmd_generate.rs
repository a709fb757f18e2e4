use std::io;

use anyhow::Result;

use pal_rs::palettes::factories::{negative, random, sepia, wedge};
use pal_rs::palettes::palette::Palette;

use crate::commands::{GenerateArgs, Generator};

pub(crate) fn palette_generate(args: &GenerateArgs) -> Result<()> {
	let pal: Palette = match args.kind {
		Generator::Wedge => wedge(&args.mode),
		Generator::Negative => negative(&args.mode),
		Generator::Random => random(&args.mode),
		Generator::Sepia => sepia(&args.white)?,
	};

	match &args.output {
		Some(output) => pal.save_to_file(output)?,
		None => pal.save(io::stdout().lock())?,
	}

	Ok(())
}
