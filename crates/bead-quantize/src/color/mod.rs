//! Color types
//!
//! - [`Rgb`]: an 8-bit color, used for palette entries and region averages.
//! - [`PixelSample`]: an 8-bit RGBA pixel read from a decoded image.

mod rgb;
mod sample;

pub use rgb::Rgb;
pub use sample::{PixelSample, OPAQUE_THRESHOLD};
