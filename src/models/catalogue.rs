//! Bead catalogue files.
//!
//! A catalogue is a YAML list of `{ code, name, hex }` records. File order is
//! palette order, so the first record is the background color.
//!
//! ```yaml
//! - code: M01
//!   name: Pure White
//!   hex: "#FFFFFF"
//! - code: M02
//!   name: Black
//!   hex: "#000000"
//! ```

use bead_quantize::{Palette, PaletteEntry, PaletteError};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("Failed to read catalogue {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalogue YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid catalogue: {0}")]
    Palette(#[from] PaletteError),
}

/// Parse a catalogue from YAML text.
pub fn parse_catalogue(yaml: &str) -> Result<Palette, CatalogueError> {
    let entries: Vec<PaletteEntry> = serde_yaml::from_str(yaml)?;
    Ok(Palette::new(entries)?)
}

/// Read and parse a catalogue file.
pub fn load_catalogue(path: &Path) -> Result<Palette, CatalogueError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| CatalogueError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let palette = parse_catalogue(&yaml)?;
    tracing::info!(path = %path.display(), colors = palette.len(), "Loaded bead catalogue");
    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bead_quantize::Rgb;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_keeps_file_order() {
        let palette = parse_catalogue(
            r##"
- code: Z9
  name: Last Alphabetically
  hex: "#123456"
- code: A1
  name: First Alphabetically
  hex: "#ABCDEF"
"##,
        )
        .unwrap();

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.background().id, "Z9");
        assert_eq!(palette.get(1).unwrap().rgb, Rgb::new(0xAB, 0xCD, 0xEF));
    }

    #[test]
    fn test_name_is_optional() {
        let palette = parse_catalogue("- { code: X, hex: '#000' }").unwrap();
        assert_eq!(palette.background().name, "");
        assert_eq!(palette.background().rgb, Rgb::BLACK);
    }

    #[test]
    fn test_bad_hex_rejected() {
        let err = parse_catalogue("- { code: X, hex: '#GG0000' }").unwrap_err();
        assert!(matches!(err, CatalogueError::Yaml(_)));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let err =
            parse_catalogue("- { code: X, hex: '#000' }\n- { code: X, hex: '#FFF' }").unwrap_err();
        assert!(matches!(
            err,
            CatalogueError::Palette(PaletteError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_empty_list_rejected() {
        let err = parse_catalogue("[]").unwrap_err();
        assert!(matches!(err, CatalogueError::Palette(PaletteError::EmptyPalette)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalogue(Path::new("/nonexistent/catalogue.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalogue.yaml"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beads.yaml");
        std::fs::write(&path, "- { code: R, name: Red, hex: '#FF0000' }\n").unwrap();
        let palette = load_catalogue(&path).unwrap();
        assert_eq!(palette.find("R").unwrap().name, "Red");
    }
}
