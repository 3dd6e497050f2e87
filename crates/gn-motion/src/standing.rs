//! Standing validity.

use gn_core::State;
use gn_grid::NavGrid;

use crate::{MotionError, MotionResult};

/// `true` if the agent can rest at `state`: its own cell is open and the cell
/// one step in the gravity direction is solid.
#[inline]
pub fn is_standing(grid: &NavGrid, state: State) -> bool {
    let (fx, fy) = state.floor_cell();
    grid.is_open(state.x, state.y) && grid.is_solid(fx, fy)
}

/// Like [`is_standing`] but reports why a state is rejected.
pub fn require_standing(grid: &NavGrid, state: State) -> MotionResult<()> {
    if !grid.in_bounds(state.x, state.y) {
        return Err(MotionError::OutOfBounds { x: state.x, y: state.y });
    }
    if !is_standing(grid, state) {
        return Err(MotionError::NotStanding(state));
    }
    Ok(())
}
