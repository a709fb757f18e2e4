use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by palette construction, mutation, serialization and loading.
#[derive(Error, Debug)]
pub enum PaletteError {
	#[error("wrong palette size: expected {expected} bytes, got {actual}")]
	InvalidSize { expected: usize, actual: usize },

	#[error("palette contains raw palette data")]
	RawPalette,

	#[error("cannot allocate more than 256 colors")]
	PaletteFull,

	#[error("unknown color specifier: {0}")]
	InvalidColorSpecifier(String),

	#[error("unsupported parameter: {0}")]
	UnsupportedParameter(String),

	#[error("unknown color: \"{0}\"")]
	UnknownColor(String),

	#[error("cannot load palette from {}", path.display())]
	PaletteLoad { path: PathBuf },

	#[error("{0}")]
	Format(#[from] FormatError),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

/// Errors raised by an individual palette file reader.
#[derive(Error, Debug)]
pub enum FormatError {
	#[error("The palette file contains more than 256 colors")]
	TooManyColors,

	#[error("Unsupported palette feature: {0}")]
	Unsupported(String),

	#[error("Invalid data at byte {position:#X}: {msg}")]
	InvalidBinaryData { position: usize, msg: String },

	#[error("Invalid data in line {line}: {msg}")]
	InvalidTextLine { line: usize, msg: String },

	#[error("Invalid JSON array item at index {index}: {msg}")]
	InvalidJsonEntry { index: usize, msg: String },

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

impl FormatError {
	/// Whether this error only means "the stream is not in this format".
	pub fn is_mismatch(&self) -> bool {
		match self {
			FormatError::Unsupported(_) => false,
			FormatError::Io(e) => matches!(e.kind(), ErrorKind::InvalidData | ErrorKind::UnexpectedEof),
			_ => true,
		}
	}
}

pub type Result<T> = std::result::Result<T, PaletteError>;
