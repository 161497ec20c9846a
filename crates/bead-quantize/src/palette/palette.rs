//! Ordered, validated bead palette.

use std::collections::HashSet;
use std::sync::Arc;

use super::catalogue;
use super::entry::PaletteEntry;
use super::error::PaletteError;
use crate::color::Rgb;
use crate::matcher;

/// An immutable, ordered catalogue of bead colors.
///
/// # Ordering is part of the contract
///
/// - The **first** entry is the background: regions without any opaque
///   pixels are filled with it.
/// - When two entries are equally close to a color, the **earlier** one
///   wins.
///
/// Reordering a catalogue therefore changes output even though the set of
/// colors is the same.
///
/// Entries live behind an `Arc`, so cloning a palette is cheap and every
/// [`BeadGrid`](crate::BeadGrid) can keep the palette it was built with.
///
/// # Example
///
/// ```
/// use bead_quantize::{Palette, PaletteEntry, Rgb};
///
/// let palette = Palette::new(vec![
///     PaletteEntry::new("W", "White", Rgb::WHITE),
///     PaletteEntry::new("R", "Red", Rgb::new(255, 0, 0)),
/// ])
/// .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.background().id, "W");
/// assert_eq!(palette.nearest(Rgb::new(240, 10, 10)).id, "R");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Arc<[PaletteEntry]>,
}

impl Palette {
    /// Create a palette from entries in display order.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `entries` is empty
    /// - [`PaletteError::EmptyId`] if an entry's id is blank
    /// - [`PaletteError::DuplicateId`] if two entries share an id
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(PaletteError::EmptyId { index });
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(PaletteError::DuplicateId {
                    id: entry.id.clone(),
                    index,
                });
            }
        }

        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Create a palette from `(id, name, hex)` records.
    ///
    /// ```
    /// use bead_quantize::Palette;
    ///
    /// let palette = Palette::from_records(&[
    ///     ("M01", "Pure White", "#FFFFFF"),
    ///     ("M02", "Pure Black", "#000"),
    /// ])
    /// .unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn from_records(records: &[(&str, &str, &str)]) -> Result<Self, PaletteError> {
        let entries = records
            .iter()
            .enumerate()
            .map(|(index, &(id, name, hex))| {
                hex.parse::<Rgb>()
                    .map(|rgb| PaletteEntry::new(id, name, rgb))
                    .map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// The built-in 32-color catalogue (pure white first).
    pub fn builtin() -> Palette {
        catalogue::builtin().clone()
    }

    /// All entries in palette order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// Look up an entry by id.
    pub fn find(&self, id: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Position of the entry with the given id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// The first entry, used for regions with no opaque pixels.
    #[inline]
    pub fn background(&self) -> &PaletteEntry {
        &self.entries[0]
    }

    /// Nearest entry to `rgb`. See [`matcher::nearest`].
    #[inline]
    pub fn nearest(&self, rgb: Rgb) -> &PaletteEntry {
        matcher::nearest(rgb, self)
    }

    /// Index of the nearest entry to `rgb`. See [`matcher::nearest_index`].
    #[inline]
    pub fn nearest_index(&self, rgb: Rgb) -> usize {
        matcher::nearest_index(rgb, self)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    fn entry(id: &str, rgb: Rgb) -> PaletteEntry {
        PaletteEntry::new(id, id, rgb)
    }

    #[test]
    fn test_palette_basic_construction() {
        let palette = Palette::new(vec![
            entry("W", Rgb::WHITE),
            entry("K", Rgb::BLACK),
            entry("R", Rgb::new(255, 0, 0)),
        ])
        .unwrap();
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
        assert_eq!(palette.background().id, "W");
    }

    #[test]
    fn test_palette_empty_error() {
        let result = Palette::new(Vec::new());
        assert_eq!(result, Err(PaletteError::EmptyPalette));
    }

    #[test]
    fn test_palette_duplicate_id() {
        let result = Palette::new(vec![
            entry("A", Rgb::WHITE),
            entry("B", Rgb::BLACK),
            entry("A", Rgb::new(1, 2, 3)),
        ]);
        assert_eq!(
            result,
            Err(PaletteError::DuplicateId {
                id: "A".to_string(),
                index: 2
            })
        );
    }

    #[test]
    fn test_palette_duplicate_color_allowed() {
        // Ids carry identity; two bead brands may share a shade
        let palette = Palette::new(vec![entry("A", Rgb::WHITE), entry("B", Rgb::WHITE)]);
        assert!(palette.is_ok());
    }

    #[test]
    fn test_palette_blank_id() {
        let result = Palette::new(vec![entry("A", Rgb::WHITE), entry("  ", Rgb::BLACK)]);
        assert_eq!(result, Err(PaletteError::EmptyId { index: 1 }));
    }

    #[test]
    fn test_from_records_invalid_hex() {
        let result = Palette::from_records(&[("A", "a", "#FFFFFF"), ("B", "b", "#FFFF")]);
        assert_eq!(
            result,
            Err(PaletteError::ParseColor {
                index: 1,
                source: ParseColorError::InvalidLength(4)
            })
        );
    }

    #[test]
    fn test_lookup_helpers() {
        let palette = Palette::from_records(&[
            ("W", "White", "#FFF"),
            ("K", "Black", "#000"),
            ("R", "Red", "#F00"),
        ])
        .unwrap();

        assert_eq!(palette.find("R").map(|e| e.rgb), Some(Rgb::new(255, 0, 0)));
        assert_eq!(palette.index_of("K"), Some(1));
        assert_eq!(palette.find("X"), None);
        assert_eq!(palette.get(2).map(|e| e.name.as_str()), Some("Red"));
        assert_eq!(palette.get(3), None);

        let ids: Vec<&str> = palette.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["W", "K", "R"]);
    }

    #[test]
    fn test_clone_shares_entries() {
        let palette = Palette::builtin();
        let clone = palette.clone();
        assert_eq!(palette, clone);
        assert!(std::ptr::eq(
            palette.entries().as_ptr(),
            clone.entries().as_ptr()
        ));
    }
}
