//! Grid quantization.
//!
//! Partition the image into `grid_size × grid_size` [`Region`]s, average a
//! small lattice of opaque samples per region and snap the result to the
//! nearest palette entry.

mod error;
mod quantizer;
mod region;

pub use error::{Dimension, QuantizeError};
pub use quantizer::{quantize, region_color, GridQuantizer};
pub use region::Region;
