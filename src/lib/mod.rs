pub mod palettes;

pub use palettes::error::{FormatError, PaletteError};
pub use palettes::loader::{PaletteFormat, RawPaletteData, load};
pub use palettes::palette::Palette;
