//! Grid error type.

use thiserror::Error;

use fg_core::Cell;

/// Errors produced by `fg-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {cell} is outside the {width}x{height} grid")]
    InvalidPosition { cell: Cell, width: u32, height: u32 },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

pub type GridResult<T> = Result<T, GridError>;
