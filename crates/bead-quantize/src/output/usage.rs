//! Bead usage counts.

use serde::Serialize;

use crate::palette::PaletteEntry;

use super::bead_grid::BeadGrid;

/// How many beads of one color a grid needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageItem {
    #[serde(flatten)]
    pub entry: PaletteEntry,
    pub count: usize,
}

/// Per-color bead counts for a [`BeadGrid`].
///
/// Built in one pass over a finished grid, so counts always sum to
/// `size²`. Only colors that occur are listed, in palette order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct UsageAggregate {
    items: Vec<UsageItem>,
}

impl UsageAggregate {
    /// Tally the cells of `grid`.
    pub fn from_grid(grid: &BeadGrid) -> Self {
        let palette = grid.palette();
        let mut counts = vec![0usize; palette.len()];
        for &idx in grid.indices() {
            counts[idx] += 1;
        }

        let items = palette
            .iter()
            .zip(counts)
            .filter(|&(_, count)| count > 0)
            .map(|(entry, count)| UsageItem {
                entry: entry.clone(),
                count,
            })
            .collect();

        Self { items }
    }

    /// Count for the color with the given id, zero if unused.
    pub fn count(&self, id: &str) -> usize {
        self.items
            .iter()
            .find(|item| item.entry.id == id)
            .map_or(0, |item| item.count)
    }

    /// Total number of beads.
    pub fn total(&self) -> usize {
        self.items.iter().map(|item| item.count).sum()
    }

    /// Number of distinct colors used.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in palette order.
    pub fn iter(&self) -> std::slice::Iter<'_, UsageItem> {
        self.items.iter()
    }

    /// Items sorted by descending count; equal counts keep palette order.
    pub fn by_count(&self) -> Vec<&UsageItem> {
        let mut sorted: Vec<&UsageItem> = self.items.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}

impl<'a> IntoIterator for &'a UsageAggregate {
    type Item = &'a UsageItem;
    type IntoIter = std::slice::Iter<'a, UsageItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
