//! Palette types
//!
//! A [`Palette`] is an ordered list of [`PaletteEntry`] values with unique
//! ids. The built-in catalogue is available through [`Palette::builtin()`].

mod catalogue;
mod entry;
mod error;
mod palette;

pub use entry::PaletteEntry;
pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
