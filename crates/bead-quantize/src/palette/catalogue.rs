//! Built-in bead catalogue.
//!
//! A 32-color subset of the MARD/COCO bead cards, ordered so that pure
//! white comes first: it doubles as the background color for transparent
//! regions. Reordering this table changes tie-breaks and the background.

use std::sync::OnceLock;

use super::entry::PaletteEntry;
use super::palette::Palette;
use crate::color::Rgb;

const BUILTIN: &[(&str, &str, Rgb)] = &[
    // White / black
    ("M01", "Pure White", Rgb::new(255, 255, 255)),
    ("M02", "Pure Black", Rgb::new(0, 0, 0)),
    // Yellows
    ("E02", "Cream Yellow", Rgb::new(255, 248, 220)),
    ("D03", "Golden Yellow", Rgb::new(255, 215, 0)),
    ("K09", "Apricot", Rgb::new(255, 179, 71)),
    // Blues
    ("G01", "Sky Blue", Rgb::new(135, 206, 235)),
    ("H23", "Dodger Blue", Rgb::new(30, 144, 255)),
    ("H31", "Dark Blue", Rgb::new(0, 0, 139)),
    // Reds
    ("K08", "Scarlet", Rgb::new(230, 57, 70)),
    ("C01", "Dark Red", Rgb::new(139, 0, 0)),
    ("K33", "Magenta", Rgb::new(199, 21, 133)),
    // Greens
    ("F05", "Light Green", Rgb::new(144, 238, 144)),
    ("G03", "Lime Green", Rgb::new(50, 205, 50)),
    ("G08", "Forest Green", Rgb::new(34, 139, 34)),
    // Purples
    ("J07", "Lavender", Rgb::new(230, 230, 250)),
    ("J14", "Medium Purple", Rgb::new(147, 112, 219)),
    ("J17", "Indigo", Rgb::new(75, 0, 130)),
    // Skin tones
    ("K03", "Peach", Rgb::new(255, 228, 196)),
    ("K24", "Nude", Rgb::new(222, 184, 135)),
    ("K30", "Rosy Brown", Rgb::new(188, 143, 143)),
    // Browns
    ("Z02", "Wheat", Rgb::new(245, 222, 179)),
    ("Z15", "Saddle Brown", Rgb::new(139, 69, 19)),
    ("Z19", "Dark Brown", Rgb::new(62, 39, 35)),
    // Greys
    ("A05", "Light Grey", Rgb::new(245, 245, 245)),
    ("B08", "Medium Grey", Rgb::new(128, 128, 128)),
    ("B11", "Dark Grey", Rgb::new(64, 64, 64)),
    // Dark tones
    ("Y01", "Slate Grey", Rgb::new(47, 79, 79)),
    ("Y06", "Dark Green", Rgb::new(46, 125, 50)),
    // Oranges
    ("F01", "Dark Orange", Rgb::new(255, 140, 0)),
    ("K05", "Light Salmon", Rgb::new(255, 160, 122)),
    // Pinks
    ("C02", "Pink", Rgb::new(255, 182, 193)),
    ("K12", "Hot Pink", Rgb::new(255, 105, 180)),
];

static PALETTE: OnceLock<Palette> = OnceLock::new();

/// The built-in catalogue, constructed once per process.
pub(crate) fn builtin() -> &'static Palette {
    PALETTE.get_or_init(|| {
        let entries = BUILTIN
            .iter()
            .map(|&(id, name, rgb)| PaletteEntry::new(id, name, rgb))
            .collect();
        match Palette::new(entries) {
            Ok(palette) => palette,
            Err(e) => unreachable!("built-in bead catalogue is invalid: {e}"),
        }
    })
}
