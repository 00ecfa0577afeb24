//! Grid error type.

use thiserror::Error;

/// Errors produced by `abm-grid`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x:      i64,
        y:      i64,
        width:  usize,
        height: usize,
    },

    #[error("invalid grid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    #[error("unknown cell state code {0}")]
    UnknownState(u8),
}

pub type GridResult<T> = Result<T, GridError>;
