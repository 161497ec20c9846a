//! BeadGrid: the quantized pattern.

use crate::palette::{Palette, PaletteEntry};

use super::usage::UsageAggregate;

/// A square grid of bead colors.
///
/// Stores one palette index per cell in row-major order (`y` outer, `x`
/// inner) together with the palette that produced it, so every cell is
/// guaranteed to resolve to an entry of that palette.
///
/// # Example
///
/// ```
/// use bead_quantize::{BeadGrid, Palette};
///
/// let palette = Palette::from_records(&[("W", "White", "#FFF"), ("K", "Black", "#000")]).unwrap();
/// let grid = BeadGrid::new(vec![0, 1, 1, 0], 2, palette);
///
/// assert_eq!(grid.size(), 2);
/// assert_eq!(grid.cell(1, 0).id, "K");
/// assert_eq!(grid.usage().count("W"), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeadGrid {
    indices: Vec<usize>,
    size: u32,
    palette: Palette,
}

impl BeadGrid {
    /// Create a grid from palette indices.
    ///
    /// # Panics
    ///
    /// Panics if `indices.len() != size * size` or an index is outside the
    /// palette. Both are programming errors in the caller.
    pub fn new(indices: Vec<usize>, size: u32, palette: Palette) -> Self {
        assert_eq!(
            indices.len(),
            size as usize * size as usize,
            "indices length ({}) must match size² ({}²)",
            indices.len(),
            size,
        );
        assert!(
            indices.iter().all(|&i| i < palette.len()),
            "palette index out of range (palette has {} entries)",
            palette.len()
        );
        Self {
            indices,
            size,
            palette,
        }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Palette indices in row-major order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette index of cell `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.size && y < self.size, "cell ({x}, {y}) outside grid");
        self.indices[y as usize * self.size as usize + x as usize]
    }

    /// Palette entry of cell `(x, y)`.
    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> &PaletteEntry {
        &self.palette.entries()[self.index(x, y)]
    }

    /// Iterate rows top to bottom; each row yields its entries left to right.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&PaletteEntry>> + '_ {
        let entries = self.palette.entries();
        self.indices
            .chunks(self.size.max(1) as usize)
            .map(move |row| row.iter().map(|&i| &entries[i]).collect())
    }

    /// Entry ids laid out as rows.
    pub fn ids(&self) -> Vec<Vec<&str>> {
        self.rows()
            .map(|row| row.into_iter().map(|e| e.id.as_str()).collect())
            .collect()
    }

    /// RGB bytes, one pixel per cell, `[R, G, B, R, G, B, ...]`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let entries = self.palette.entries();
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            rgb.extend_from_slice(&entries[idx].rgb.to_bytes());
        }
        rgb
    }

    /// Per-color bead counts for this grid.
    pub fn usage(&self) -> UsageAggregate {
        UsageAggregate::from_grid(self)
    }
}
