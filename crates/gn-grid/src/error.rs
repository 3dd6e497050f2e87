//! Grid-construction error type.

use thiserror::Error;

/// Errors produced by `gn-grid`.  All of them mean "invalid grid".
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid has zero size ({width}x{height})")]
    Empty { width: usize, height: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, got: usize },

    #[error("grid is {width}x{height}, more cells than a StateId can index")]
    TooLarge { width: usize, height: usize },

    #[error("grid uses {0} distinct tile kinds, more than a TileKind can index")]
    TooManyKinds(usize),

    #[error("grid parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
