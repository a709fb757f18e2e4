use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use humansize::DECIMAL;
use tracing::Level;

use crate::cmd_generate::palette_generate;
use crate::cmd_load::palette_load;
use crate::cmd_lut::palette_lut;
use crate::cmd_split::palette_split;
use crate::commands::{Cli, Commands};

mod cmd_generate;
mod cmd_load;
mod cmd_lut;
mod cmd_split;
mod commands;
mod common;

fn main() -> ExitCode {
	let cli = Cli::parse();

	tracing_subscriber::fmt()
		.with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
		.with_writer(std::io::stderr)
		.init();

	let output: Option<&PathBuf>;

	let result = match &cli.command {
		Some(Commands::Split(args)) => {
			output = None;
			palette_split(args)
		}
		Some(Commands::Generate(args)) => {
			output = args.output.as_ref();
			palette_generate(args)
		}
		Some(Commands::Load(args)) => {
			output = args.output.as_ref();
			palette_load(args)
		}
		Some(Commands::Lut(args)) => {
			output = None;
			palette_lut(args)
		}
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => {
			if let Some(output) = output {
				match fs::metadata(output) {
					Ok(m) => {
						let size = humansize::format_size(m.len(), DECIMAL);
						println!("Output file size: {size}");
					}
					Err(err) => {
						eprintln!("Can't determine output file size: {err}");
					}
				}
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("execution failed: {e}");
			ExitCode::FAILURE
		}
	}
}
