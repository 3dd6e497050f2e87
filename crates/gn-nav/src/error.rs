use gn_core::CoreError;
use gn_grid::GridError;
use gn_motion::MotionError;
use thiserror::Error;

/// Every way a navigation query can fail.
///
/// "No path" is not an error: path queries return `Ok(None)`.
#[derive(Debug, Error)]
pub enum NavError {
    /// The grid could not be built (ragged rows, zero size, unreadable file).
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridError),

    /// A start or goal the caller supplied is out of bounds or not a valid
    /// standing state.
    #[error("invalid state: {0}")]
    InvalidState(MotionError),

    /// The engine violated one of its own invariants.
    #[error("engine fault: {0}")]
    EngineFault(MotionError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<MotionError> for NavError {
    fn from(e: MotionError) -> Self {
        if e.is_invalid_state() {
            NavError::InvalidState(e)
        } else {
            NavError::EngineFault(e)
        }
    }
}

pub type NavResult<T> = Result<T, NavError>;
