pub mod palette;
pub mod pattern;
pub mod preview;
pub mod stylize;

pub use palette::{handle_palette, PaletteColor, __path_handle_palette};
pub use pattern::{handle_pattern, PatternQuery, __path_handle_pattern};
pub use preview::{handle_preview, PreviewQuery, __path_handle_preview};
pub use stylize::{handle_stylize, __path_handle_stylize};
