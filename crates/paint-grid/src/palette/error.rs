//! Error types for palette operations

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette construction and truncation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,
    /// Duplicate color found at the specified index
    #[error("duplicate color found at index {index}")]
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// Requested truncation is zero or larger than the palette
    #[error("palette size {requested} out of range (1..={available})")]
    InvalidSize {
        /// Number of colors requested
        requested: usize,
        /// Number of colors the palette has
        available: usize,
    },
    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PaletteError::EmptyPalette.to_string(),
            "palette cannot be empty"
        );
        assert_eq!(
            PaletteError::DuplicateColor { index: 3 }.to_string(),
            "duplicate color found at index 3"
        );
        assert_eq!(
            PaletteError::InvalidSize {
                requested: 30,
                available: 24
            }
            .to_string(),
            "palette size 30 out of range (1..=24)"
        );
        assert_eq!(
            ParseColorError::InvalidLength.to_string(),
            "invalid hex color length (expected 3 or 6 characters)"
        );
    }

    #[test]
    fn test_parse_error_source_chain() {
        use std::error::Error as _;

        let parse_err = "zz".parse::<u8>().unwrap_err();
        let err = PaletteError::from(ParseColorError::from(parse_err));
        let source = err.source().expect("ParseColor should expose its source");
        assert!(source.to_string().starts_with("invalid hex character"));
    }
}
