//! Error types for simsearch.

use thiserror::Error;

/// Result alias for simsearch operations.
pub type SimSearchResult<T> = std::result::Result<T, SimSearchError>;

/// Precondition violations reported by simsearch operations.
///
/// Every variant is an invalid-argument error: the caller passed a grid,
/// window or offset that the operation cannot accept. None of them are
/// transient, so retrying with the same input fails the same way.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimSearchError {
    /// A grid or window has a zero extent.
    #[error("invalid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    /// Nested rows do not all share the first row's length.
    #[error("jagged rows: row {row} has {got} columns, expected {expected}")]
    JaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// The backing buffer is shorter than the declared shape requires.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// An owned buffer's length differs from `rows * cols`.
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    /// Stride is smaller than the row length.
    #[error("invalid stride {stride} for {cols} columns")]
    InvalidStride { cols: usize, stride: usize },
    /// A cell holds NaN or an infinity.
    #[error("non-finite value at ({row}, {col})")]
    NonFiniteValue { row: usize, col: usize },
    /// A window does not fit inside its grid at the requested offset.
    #[error(
        "window {rows}x{cols} at ({row}, {col}) exceeds grid {grid_rows}x{grid_cols}"
    )]
    WindowOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
        grid_rows: usize,
        grid_cols: usize,
    },
    /// The pattern is larger than the image in at least one dimension.
    #[error(
        "pattern {pattern_rows}x{pattern_cols} exceeds image {image_rows}x{image_cols}"
    )]
    PatternTooLarge {
        pattern_rows: usize,
        pattern_cols: usize,
        image_rows: usize,
        image_cols: usize,
    },
}

impl SimSearchError {
    /// Returns `true` for precondition violations, which is every variant.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            SimSearchError::InvalidDimensions { .. }
            | SimSearchError::JaggedRows { .. }
            | SimSearchError::BufferTooSmall { .. }
            | SimSearchError::LengthMismatch { .. }
            | SimSearchError::InvalidStride { .. }
            | SimSearchError::NonFiniteValue { .. }
            | SimSearchError::WindowOutOfBounds { .. }
            | SimSearchError::PatternTooLarge { .. } => true,
        }
    }
}
