//! Nearest-color matching.
//!
//! A linear scan over the palette using squared Euclidean distance in raw
//! RGB. Bead catalogues hold tens of colors, so no spatial index is used.

use crate::color::Rgb;
use crate::palette::{Palette, PaletteEntry};

/// Index of the palette entry closest to `rgb`.
///
/// Ties go to the entry that appears first in the palette: the comparison
/// is strict, so a later entry only replaces the current best when it is
/// strictly closer.
#[inline]
pub fn nearest_index(rgb: Rgb, palette: &Palette) -> usize {
    let mut best_idx = 0;
    let mut best_dist = u32::MAX;

    for (i, entry) in palette.iter().enumerate() {
        let dist = rgb.distance_squared(entry.rgb);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
            if dist == 0 {
                break;
            }
        }
    }

    best_idx
}

/// The palette entry closest to `rgb`.
///
/// Total for every color: palettes are non-empty by construction.
///
/// ```
/// use bead_quantize::{matcher, Palette, Rgb};
///
/// let palette = Palette::from_records(&[("W", "White", "#FFF"), ("K", "Black", "#000")]).unwrap();
/// assert_eq!(matcher::nearest(Rgb::new(40, 40, 40), &palette).id, "K");
/// ```
#[inline]
pub fn nearest(rgb: Rgb, palette: &Palette) -> &PaletteEntry {
    &palette.entries()[nearest_index(rgb, palette)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(records: &[(&str, &str, &str)]) -> Palette {
        Palette::from_records(records).unwrap()
    }

    #[test]
    fn test_exact_match_wins() {
        let palette = Palette::builtin();
        for entry in palette.iter() {
            assert_eq!(
                nearest(entry.rgb, &palette).id,
                entry.id,
                "{} should match itself",
                entry.id
            );
        }
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        // (100,100,100) is 50² * 3 away from both
        let forward = palette(&[("LO", "", "#323232"), ("HI", "", "#969696")]);
        let probe = Rgb::new(100, 100, 100);
        assert_eq!(nearest(probe, &forward).id, "LO");

        let reversed = palette(&[("HI", "", "#969696"), ("LO", "", "#323232")]);
        assert_eq!(nearest(probe, &reversed).id, "HI");
    }

    #[test]
    fn test_tie_with_duplicate_colors() {
        let palette = palette(&[("A", "", "#FF0000"), ("B", "", "#FF0000")]);
        assert_eq!(nearest(Rgb::new(255, 0, 0), &palette).id, "A");
        assert_eq!(nearest(Rgb::new(200, 10, 10), &palette).id, "A");
    }

    #[test]
    fn test_deterministic() {
        let palette = Palette::builtin();
        for v in (0..=255u8).step_by(5) {
            let rgb = Rgb::new(v, 255 - v, v / 2);
            assert_eq!(nearest(rgb, &palette), nearest(rgb, &palette));
        }
    }

    #[test]
    fn test_single_entry_palette() {
        let palette = palette(&[("ONLY", "", "#123456")]);
        assert_eq!(nearest_index(Rgb::WHITE, &palette), 0);
        assert_eq!(nearest_index(Rgb::BLACK, &palette), 0);
    }

    #[test]
    fn test_builtin_sanity() {
        let palette = Palette::builtin();
        assert_eq!(nearest(Rgb::new(247, 247, 247), &palette).id, "A05");
        assert_eq!(nearest(Rgb::new(5, 5, 5), &palette).id, "M02");
        assert_eq!(nearest(Rgb::new(20, 140, 250), &palette).id, "H23");
        assert_eq!(nearest(Rgb::new(130, 130, 130), &palette).id, "B08");
    }
}
