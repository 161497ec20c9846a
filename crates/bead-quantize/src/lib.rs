//! bead-quantize: turn images into fused-bead patterns
//!
//! This library converts a decoded image into a square grid of colors drawn
//! from a fixed catalogue of physical bead colors, plus a bill of materials
//! counting how many beads of each color the pattern needs.
//!
//! # Quick Start
//!
//! ```
//! use bead_quantize::{quantize, Palette, PixelSample, RgbaImage, Rgb};
//!
//! let palette = Palette::builtin();
//! let image = RgbaImage::filled(64, 64, PixelSample::opaque(Rgb::new(250, 215, 5))).unwrap();
//!
//! let (grid, usage) = quantize(&image, 16, &palette).unwrap();
//!
//! assert_eq!(grid.size(), 16);
//! assert_eq!(usage.total(), 16 * 16);
//! assert_eq!(usage.count("D03"), 256); // golden yellow
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelSource (W x H, RGBA)
//!     |
//!     v
//! Region::for_cell        floor/ceil block edges, clamped to the image
//!     |
//!     v
//! Region::sample_points   step max(1, extent/3) per axis
//!     |
//!     v
//! region_color            mean of samples with alpha >= 128, rounded;
//!     |                   None if nothing is opaque
//!     v
//! matcher::nearest        squared RGB distance, first entry wins ties;
//!     |                   None -> palette.background()
//!     v
//! BeadGrid  --(one pass)-->  UsageAggregate
//! ```
//!
//! Palette order matters twice: the first entry is the fill for fully
//! transparent regions, and it breaks distance ties in favor of earlier
//! entries.
//!
//! Decoding image files is not part of this crate. Anything implementing
//! [`PixelSource`] can be quantized; [`RgbaImage`] wraps a raw RGBA8 buffer.

pub mod color;
pub mod matcher;
pub mod output;
pub mod palette;
pub mod quantize;
pub mod source;


pub use color::{PixelSample, Rgb, OPAQUE_THRESHOLD};
pub use output::{BeadGrid, UsageAggregate, UsageItem};
pub use palette::{Palette, PaletteEntry, PaletteError, ParseColorError};
pub use quantize::{quantize, Dimension, GridQuantizer, QuantizeError, Region};
pub use source::{PixelSource, RgbaImage, SourceError};
