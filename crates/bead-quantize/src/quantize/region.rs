//! Source rectangles and sample lattices for grid cells.

/// The half-open source rectangle `[sx, ex) × [sy, ey)` mapped to one cell.
///
/// Block extents are real-valued (`width / grid_size`), start edges are
/// floored and end edges ceiled, then clamped to the image. Adjacent
/// regions therefore cover the whole image with no gaps, overlapping by at
/// most one pixel when the image size is not a multiple of the grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub sx: u32,
    pub sy: u32,
    pub ex: u32,
    pub ey: u32,
}

impl Region {
    /// The region for cell `(gx, gy)` of a `grid_size × grid_size` grid over
    /// a `width × height` image.
    ///
    /// ```
    /// use bead_quantize::Region;
    ///
    /// // 10 px split three ways: blocks of 3.33 px
    /// let r = Region::for_cell(1, 0, 3, 10, 10);
    /// assert_eq!((r.sx, r.ex), (3, 7));
    /// ```
    pub fn for_cell(gx: u32, gy: u32, grid_size: u32, width: u32, height: u32) -> Self {
        let block_w = width as f64 / grid_size as f64;
        let block_h = height as f64 / grid_size as f64;

        let sx = (gx as f64 * block_w).floor() as u32;
        let sy = (gy as f64 * block_h).floor() as u32;
        let ex = (((gx + 1) as f64 * block_w).ceil() as u32).min(width);
        let ey = (((gy + 1) as f64 * block_h).ceil() as u32).min(height);

        Self { sx, sy, ex, ey }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.ex.saturating_sub(self.sx)
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.ey.saturating_sub(self.sy)
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.area() == 0
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.sx && x < self.ex && y >= self.sy && y < self.ey
    }

    /// Sample coordinates inside the region, row by row.
    ///
    /// Steps by `max(1, extent / 3)` along each axis, which yields at most
    /// five points per axis however large the region is. Points are clamped
    /// to the `image_width × image_height` bounds. A degenerate region
    /// falls back to its top-left corner.
    pub fn sample_points(&self, image_width: u32, image_height: u32) -> Vec<(u32, u32)> {
        let step_x = (self.width() / 3).max(1) as usize;
        let step_y = (self.height() / 3).max(1) as usize;
        let max_x = image_width.saturating_sub(1);
        let max_y = image_height.saturating_sub(1);

        let mut points = Vec::with_capacity(16);
        for y in (self.sy..self.ey).step_by(step_y) {
            for x in (self.sx..self.ex).step_by(step_x) {
                points.push((x.min(max_x), y.min(max_y)));
            }
        }

        if points.is_empty() {
            points.push((self.sx.min(max_x), self.sy.min(max_y)));
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(grid_size: u32, width: u32, height: u32) -> Vec<Region> {
        let mut out = Vec::new();
        for gy in 0..grid_size {
            for gx in 0..grid_size {
                out.push(Region::for_cell(gx, gy, grid_size, width, height));
            }
        }
        out
    }

    #[test]
    fn test_even_division() {
        let r = Region::for_cell(1, 2, 4, 8, 8);
        assert_eq!(r, Region { sx: 2, sy: 4, ex: 4, ey: 6 });
        assert_eq!(r.area(), 4);
    }

    #[test]
    fn test_uneven_division_overlaps_by_one() {
        let xs: Vec<(u32, u32)> = (0..3)
            .map(|gx| {
                let r = Region::for_cell(gx, 0, 3, 10, 10);
                (r.sx, r.ex)
            })
            .collect();
        assert_eq!(xs, [(0, 4), (3, 7), (6, 10)]);
    }

    #[test]
    fn test_grid_larger_than_image() {
        // 2 px wide, 5 cells: every cell still gets a non-empty span
        for gx in 0..5 {
            let r = Region::for_cell(gx, 0, 5, 2, 2);
            assert!(!r.is_degenerate(), "cell {gx} is degenerate: {r:?}");
            assert!(r.ex <= 2);
        }
    }

    #[test]
    fn test_full_coverage_without_out_of_bounds() {
        for &(w, h, n) in &[(10, 10, 3), (7, 13, 4), (1, 1, 1), (30, 100, 8), (256, 170, 32)] {
            let all = regions(n, w, h);
            let mut hits = vec![0u32; (w * h) as usize];
            for r in &all {
                assert!(r.ex <= w && r.ey <= h, "{r:?} escapes {w}x{h}");
                for y in r.sy..r.ey {
                    for x in r.sx..r.ex {
                        hits[(y * w + x) as usize] += 1;
                    }
                }
            }
            // No gaps; overlaps are at most one pixel wide per axis, so a
            // pixel can be shared by at most 2x2 regions.
            assert!(hits.iter().all(|&c| (1..=4).contains(&c)), "{w}x{h}/{n}");

            let total: u64 = all.iter().map(Region::area).sum();
            assert!(total >= w as u64 * h as u64);
        }
    }

    #[test]
    fn test_exact_cover_when_divisible() {
        let total: u64 = regions(4, 16, 8).iter().map(Region::area).sum();
        assert_eq!(total, 16 * 8);
    }

    #[test]
    fn test_sample_lattice_steps() {
        // 12x12 region: step 4 -> 3x3 points
        let r = Region { sx: 0, sy: 0, ex: 12, ey: 12 };
        let points = r.sample_points(12, 12);
        assert_eq!(
            points,
            [
                (0, 0),
                (4, 0),
                (8, 0),
                (0, 4),
                (4, 4),
                (8, 4),
                (0, 8),
                (4, 8),
                (8, 8)
            ]
        );
    }

    #[test]
    fn test_sample_lattice_is_bounded() {
        for extent in 1..200 {
            let r = Region { sx: 0, sy: 0, ex: extent, ey: extent };
            let points = r.sample_points(extent, extent);
            assert!(points.len() <= 25, "extent {extent} gave {}", points.len());
            assert!(points.iter().all(|&(x, y)| r.contains(x, y)));
        }
    }

    #[test]
    fn test_sample_lattice_small_regions() {
        let r = Region { sx: 5, sy: 5, ex: 7, ey: 6 };
        assert_eq!(r.sample_points(10, 10), [(5, 5), (6, 5)]);

        let r = Region { sx: 0, sy: 0, ex: 5, ey: 1 };
        assert_eq!(r.sample_points(5, 1).len(), 5);
    }

    #[test]
    fn test_degenerate_region_falls_back_to_corner() {
        let r = Region { sx: 3, sy: 2, ex: 3, ey: 6 };
        assert!(r.is_degenerate());
        assert_eq!(r.sample_points(10, 10), [(3, 2)]);

        // Corner itself is clamped into the image
        let r = Region { sx: 10, sy: 10, ex: 10, ey: 10 };
        assert_eq!(r.sample_points(10, 10), [(9, 9)]);
    }
}
