pub mod abbreviations;
pub mod colors;
pub mod error;
pub mod factories;
pub mod loader;
pub mod lut;
pub(crate) mod pal_act;
pub(crate) mod pal_col;
pub(crate) mod pal_ggr;
pub(crate) mod pal_gpl;
pub(crate) mod pal_hex;
pub(crate) mod pal_json;
pub(crate) mod pal_pal;
pub(crate) mod pal_txt;
pub mod palette;

/// Entries in a palette, and the ceiling for dynamically allocated colors.
pub const MAX_PALETTE_COLORS: usize = 256;
