//! Output types of the quantization pipeline.
//!
//! - [`BeadGrid`]: one palette entry per cell, with the palette attached
//! - [`UsageAggregate`]: bead counts per color, derived from a grid

mod bead_grid;
mod usage;

pub use bead_grid::BeadGrid;
pub use usage::{UsageAggregate, UsageItem};
