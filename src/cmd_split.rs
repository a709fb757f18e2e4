use anyhow::Result;
use colored::Colorize;

use pal_rs::palettes::abbreviations::split_abbreviations;

use crate::commands::SplitArgs;

pub(crate) fn palette_split(args: &SplitArgs) -> Result<()> {
	let labels = split_abbreviations(&args.mode);

	if args.json {
		println!("{}", serde_json::to_string(&labels)?);
		return Ok(());
	}

	if labels.is_empty() {
		eprintln!("NOTE: \"{}\" has no channels!", args.mode);
		return Ok(());
	}

	let labels = labels.iter().map(|l| l.bold().to_string()).collect::<Vec<String>>();
	println!("{} channels: {}", labels.len(), labels.join(", "));
	Ok(())
}
