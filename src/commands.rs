use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use pal_rs::palettes::factories::DEFAULT_SEPIA_WHITE;
use pal_rs::palettes::loader::PaletteFormat;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Builds, inspects and converts palettes for palette mapped images")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, help = "Prints debug logging to stderr.")]
	pub debug: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub(crate) enum Generator {
	Wedge,
	Negative,
	Random,
	Sepia,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub(crate) enum LutKind {
	Linear,
	Gamma,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct SplitArgs {
	#[arg(help = "The mode string, e.g. RGB, YCbCr or I;16B.")]
	pub mode: String,

	#[arg(long, help = "Prints the labels as a JSON array.")]
	pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct GenerateArgs {
	#[arg(value_enum, help = "The kind of palette to generate.")]
	pub kind: Generator,

	#[arg(short, long, help = "The palette mode. Ignored for sepia palettes, which are always RGB.", default_value = "RGB")]
	pub mode: String,

	#[arg(short, long, help = "The white point of sepia palettes.", default_value = DEFAULT_SEPIA_WHITE)]
	pub white: String,

	#[arg(short, long, help = "The output file. Prints to stdout if omitted.")]
	pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct LoadArgs {
	#[arg(help = "The palette file.")]
	pub input: PathBuf,

	#[arg(short, long, value_enum, help = "Only tries this format instead of detecting it.")]
	pub format: Option<PaletteFormat>,

	#[arg(short, long, help = "The mode the loaded palette is unpacked into.", default_value = "RGB")]
	pub mode: String,

	#[arg(short, long, help = "Writes the unpacked palette's text dump to this file.")]
	pub output: Option<PathBuf>,

	#[arg(long, help = "Prints the loaded palette as JSON instead of swatches.")]
	pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct LutArgs {
	#[arg(value_enum, help = "The kind of lookup table.")]
	pub kind: LutKind,

	#[arg(long, help = "The black level of linear tables.", default_value_t = 0)]
	pub black: u8,
	#[arg(long, help = "The white level of linear tables.", default_value_t = 255)]
	pub white: u8,
	#[arg(short, long, help = "The exponent of gamma tables.", default_value_t = 1.0)]
	pub exponent: f64,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Prints the channel labels of a mode string")]
	Split(SplitArgs),

	#[command(about = "Generates a palette and writes its text dump")]
	Generate(GenerateArgs),

	#[command(about = "Loads a palette file and prints its colors")]
	Load(LoadArgs),

	#[command(about = "Prints a 256-entry lookup table")]
	Lut(LutArgs),
}
