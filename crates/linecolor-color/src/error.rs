//! Error types for linecolor-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] linecolor_core::Error),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },

    /// Threshold outside the 8-bit luminance range
    #[error("invalid threshold {0}: must be within 0..=255")]
    InvalidThreshold(i64),

    /// No colored pixel within reach of an uncolored one
    #[error("no colored pixel found around ({x}, {y}) up to radius {radius}")]
    SearchExhausted { x: u32, y: u32, radius: u32 },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
