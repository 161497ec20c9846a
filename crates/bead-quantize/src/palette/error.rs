//! Error types for palette operations

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    #[error("invalid hex color length {0} (expected 3 or 6 digits)")]
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit
    #[error("invalid hex character {0:?}")]
    InvalidCharacter(char),
    #[error("invalid hex value: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
///
/// A palette that passes validation is non-empty and has unique,
/// non-empty ids, so matching against it can never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette cannot be empty")]
    EmptyPalette,
    #[error("palette entry {index} has an empty id")]
    EmptyId { index: usize },
    /// Two entries share an id; `index` is the later one.
    #[error("duplicate palette id {id:?} at index {index}")]
    DuplicateId { id: String, index: usize },
    #[error("invalid color for palette entry {index}: {source}")]
    ParseColor {
        index: usize,
        #[source]
        source: ParseColorError,
    },
}
