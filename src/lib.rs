//! Conversion between three representations of 16-color palettes: 24-bit
//! RGB hex text, packed 15-bit BGR byte text, and the 52-byte TPL binary
//! palette file format used by legacy tile editors.

pub mod bgr;
pub mod color;
pub mod compare;
pub mod error;
pub mod palette;
pub mod preview;
pub mod tpl;

pub use bgr::Bgr15;
pub use color::Rgb;
pub use compare::Comparison;
pub use error::PaletteError;
pub use palette::{Palette, PALETTE_SIZE};
