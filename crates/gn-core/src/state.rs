//! Agent state and continuous positions.

use std::fmt;

use crate::Gravity;

// ── State ─────────────────────────────────────────────────────────────────────

/// A node of the navigation graph: a cell plus the gravity the agent has there.
///
/// Coordinates are signed so that neighbour arithmetic near the grid edge
/// never wraps; whether a state lies inside a particular grid is the grid's
/// business.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub x: i32,
    pub y: i32,
    pub gravity: Gravity,
}

impl State {
    #[inline]
    pub const fn new(x: i32, y: i32, gravity: Gravity) -> Self {
        Self { x, y, gravity }
    }

    /// The cell one step in the gravity direction (the floor cell).
    #[inline]
    pub fn floor_cell(&self) -> (i32, i32) {
        let (gx, gy) = self.gravity.vector();
        (self.x + gx, self.y + gy)
    }

    /// Same cell under a different gravity.
    #[inline]
    pub fn with_gravity(self, gravity: Gravity) -> State {
        State { gravity, ..self }
    }

    /// Manhattan distance between the two cells, ignoring gravity.
    #[inline]
    pub fn manhattan(&self, other: &State) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Centre of the occupied cell.
    #[inline]
    pub fn center(&self) -> Point {
        Point::cell_center(self.x, self.y)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.gravity)
    }
}

// ── Point ─────────────────────────────────────────────────────────────────────

/// A continuous position in grid units.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Centre of cell `(x, y)`.
    #[inline]
    pub fn cell_center(x: i32, y: i32) -> Self {
        Self { x: x as f32 + 0.5, y: y as f32 + 0.5 }
    }

    /// The cell containing this point.  Points on a cell boundary belong to
    /// the cell on the positive side.
    #[inline]
    pub fn cell(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}
