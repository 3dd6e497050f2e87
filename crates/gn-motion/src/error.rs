use gn_core::State;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    #[error("state {0} is not a valid standing state")]
    NotStanding(State),

    /// A built trajectory passes through a solid or out-of-bounds cell before
    /// its final point.  Always an engine bug, never bad input.
    #[error("trajectory point {step} lies in blocked cell ({x}, {y})")]
    Tunneling { step: usize, x: i32, y: i32 },
}

impl MotionError {
    /// `true` for errors caused by the caller's query rather than the engine.
    pub fn is_invalid_state(&self) -> bool {
        !matches!(self, MotionError::Tunneling { .. })
    }
}

pub type MotionResult<T> = Result<T, MotionError>;
