//! GridQuantizer builder -- the primary entry point for the crate.

use std::time::Instant;

use rayon::prelude::*;

use super::error::{Dimension, QuantizeError};
use super::region::Region;
use crate::color::Rgb;
use crate::output::{BeadGrid, UsageAggregate};
use crate::palette::Palette;
use crate::source::PixelSource;

/// Turns images into bead grids against a fixed palette.
///
/// - Constructor requires a [`Palette`] (no invalid states)
/// - [`quantize()`](Self::quantize) takes `&self`, so one quantizer can be
///   shared and reused across images and grid sizes
/// - Every call builds a fresh grid; nothing carries over between calls
///
/// # Example
///
/// ```
/// use bead_quantize::{GridQuantizer, Palette, PixelSample, RgbaImage, Rgb};
///
/// let palette = Palette::from_records(&[("W", "White", "#FFF"), ("R", "Red", "#F00")]).unwrap();
/// let image = RgbaImage::filled(2, 2, PixelSample::opaque(Rgb::new(255, 0, 0))).unwrap();
///
/// let (grid, usage) = GridQuantizer::new(palette).quantize(&image, 1).unwrap();
/// assert_eq!(grid.cell(0, 0).id, "R");
/// assert_eq!(usage.count("R"), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GridQuantizer {
    palette: Palette,
    parallel: bool,
}

impl GridQuantizer {
    /// Create a serial quantizer for `palette`.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            parallel: false,
        }
    }

    /// Quantize rows on the rayon thread pool.
    ///
    /// Output is identical to the serial path: rows are computed
    /// independently and collected in order.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Build the grid and its usage counts.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::InvalidDimension`] if `grid_size` is zero or the
    /// source has zero width or height. `grid_size` is never clamped; range
    /// limits are the caller's business.
    pub fn quantize<S>(
        &self,
        source: &S,
        grid_size: u32,
    ) -> Result<(BeadGrid, UsageAggregate), QuantizeError>
    where
        S: PixelSource + ?Sized,
    {
        let grid = self.build_grid(source, grid_size)?;
        let usage = UsageAggregate::from_grid(&grid);
        Ok((grid, usage))
    }

    /// Build only the grid. Usage can be derived later with
    /// [`BeadGrid::usage()`].
    pub fn build_grid<S>(&self, source: &S, grid_size: u32) -> Result<BeadGrid, QuantizeError>
    where
        S: PixelSource + ?Sized,
    {
        let (width, height) = (source.width(), source.height());
        validate(grid_size, width, height)?;

        let started = Instant::now();
        let rows: Vec<Vec<usize>> = if self.parallel {
            (0..grid_size)
                .into_par_iter()
                .map(|gy| self.quantize_row(source, grid_size, gy))
                .collect()
        } else {
            (0..grid_size)
                .map(|gy| self.quantize_row(source, grid_size, gy))
                .collect()
        };
        let indices: Vec<usize> = rows.into_iter().flatten().collect();

        tracing::debug!(
            grid_size,
            width,
            height,
            parallel = self.parallel,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Quantized image"
        );

        Ok(BeadGrid::new(indices, grid_size, self.palette.clone()))
    }

    fn quantize_row<S>(&self, source: &S, grid_size: u32, gy: u32) -> Vec<usize>
    where
        S: PixelSource + ?Sized,
    {
        (0..grid_size)
            .map(|gx| {
                let region = Region::for_cell(gx, gy, grid_size, source.width(), source.height());
                match region_color(source, &region) {
                    Some(rgb) => self.palette.nearest_index(rgb),
                    // Nothing opaque: background entry
                    None => 0,
                }
            })
            .collect()
    }
}

/// Quantize `source` into a `grid_size × grid_size` grid against `palette`.
///
/// One-shot form of [`GridQuantizer::quantize()`].
pub fn quantize<S>(
    source: &S,
    grid_size: u32,
    palette: &Palette,
) -> Result<(BeadGrid, UsageAggregate), QuantizeError>
where
    S: PixelSource + ?Sized,
{
    GridQuantizer::new(palette.clone()).quantize(source, grid_size)
}

/// Representative color of a region: the rounded mean of its opaque
/// samples, or `None` when no sampled pixel is opaque.
pub fn region_color<S>(source: &S, region: &Region) -> Option<Rgb>
where
    S: PixelSource + ?Sized,
{
    let (mut r, mut g, mut b, mut count) = (0u32, 0u32, 0u32, 0u32);

    for (x, y) in region.sample_points(source.width(), source.height()) {
        let sample = source.pixel(x, y);
        if sample.is_opaque() {
            r += sample.r as u32;
            g += sample.g as u32;
            b += sample.b as u32;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }
    Some(Rgb::new(
        rounded_mean(r, count),
        rounded_mean(g, count),
        rounded_mean(b, count),
    ))
}

/// `sum / count` rounded half up.
#[inline]
fn rounded_mean(sum: u32, count: u32) -> u8 {
    ((2 * sum + count) / (2 * count)) as u8
}

fn validate(grid_size: u32, width: u32, height: u32) -> Result<(), QuantizeError> {
    let checks = [
        (Dimension::GridSize, grid_size),
        (Dimension::ImageWidth, width),
        (Dimension::ImageHeight, height),
    ];
    for (dimension, value) in checks {
        if value == 0 {
            return Err(QuantizeError::InvalidDimension { dimension, value });
        }
    }
    Ok(())
}
