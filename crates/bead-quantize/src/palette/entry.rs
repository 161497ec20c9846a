//! A single bead color in a catalogue.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// One purchasable bead color.
///
/// Identity is [`id`](Self::id), the short code printed on the bead bag
/// (e.g. `"M01"`). Serializes as `{ "id", "name", "hex" }`; catalogue files
/// may also spell the id as `code`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteEntry {
    #[serde(alias = "code")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "hex")]
    pub rgb: Rgb,
}

impl PaletteEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rgb,
        }
    }
}
