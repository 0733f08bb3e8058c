//! Error types for the swatchbook crate.

use thiserror::Error;

/// Errors that can occur when operating on grids, palettes, or documents.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// Grid rows or columns below the 1x1 minimum.
    #[error("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// Removal target is not in the palette.
    #[error("no sample with hex {0} in the palette")]
    NotFound(String),

    /// A persisted document is missing required fields or has the wrong shape.
    #[error("malformed palette document: {0}")]
    MalformedDocument(String),

    /// A hex string that does not name an RGB color.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// Result type for swatchbook operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
