use anyhow::Result;
use colored::Colorize;

use pal_rs::palettes::loader::{RawPaletteData, load, load_as};

use crate::commands::LoadArgs;
use crate::common::print_swatches;

pub(crate) fn palette_load(args: &LoadArgs) -> Result<()> {
	let raw = match args.format {
		Some(format) => load_as(&args.input, format)?,
		None => load(&args.input)?,
	};

	if args.json {
		println!("{}", serde_json::to_string_pretty(&raw)?);
	} else {
		print_summary(args, &raw);
	}

	if let Some(output) = &args.output {
		raw.to_structured(&args.mode).save_to_file(output)?;
	}

	Ok(())
}

fn print_summary(args: &LoadArgs, raw: &RawPaletteData) {
	println!(
		"{}: {} palette, {} entries in {} ({} bytes)",
		args.input.display(),
		raw.format.to_string().to_uppercase().cyan(),
		raw.len(),
		raw.raw_mode.bold(),
		raw.data.len(),
	);

	print_swatches(raw.entries());
}
