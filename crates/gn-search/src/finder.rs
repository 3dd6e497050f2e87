//! Goal-directed path finding.
//!
//! # Pluggability
//!
//! Callers go through the [`PathFinder`] trait, so the default
//! [`AStarFinder`] can be swapped for [`DijkstraFinder`] (the zero-heuristic
//! reference used to cross-check A*) or a custom implementation.

use log::debug;

use gn_core::{Gravity, State};
use gn_motion::{MotionError, MotionResult, MoveGenerator, Path, require_standing};

use crate::frontier::Frontier;

// ── Goal ──────────────────────────────────────────────────────────────────────

/// Target cell, optionally with a required gravity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Goal {
    pub x: i32,
    pub y: i32,
    /// `None` accepts any orientation at `(x, y)`.
    pub gravity: Option<Gravity>,
}

impl Goal {
    pub fn new(x: i32, y: i32, gravity: Option<Gravity>) -> Self {
        Self { x, y, gravity }
    }

    /// Any orientation at `(x, y)`.
    pub fn cell(x: i32, y: i32) -> Self {
        Self { x, y, gravity: None }
    }

    /// Exactly `state`.
    pub fn state(state: State) -> Self {
        Self { x: state.x, y: state.y, gravity: Some(state.gravity) }
    }

    #[inline]
    pub fn matches(&self, state: State) -> bool {
        state.x == self.x
            && state.y == self.y
            && self.gravity.is_none_or(|g| g == state.gravity)
    }

    /// Manhattan distance from `state`'s cell to the goal cell.
    #[inline]
    pub fn distance(&self, state: State) -> u32 {
        state.x.abs_diff(self.x) + state.y.abs_diff(self.y)
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable path search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one finder can serve queries on
/// several threads; every call allocates its own frontier.
pub trait PathFinder: Send + Sync {
    /// Cheapest path from `start` to any state matching `goal`.
    ///
    /// Returns `Ok(Some(empty path))` when `start` already matches and
    /// `Ok(None)` when no matching state is reachable.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for a goal outside the grid, `OutOfBounds`/`NotStanding`
    /// for a bad start.
    fn find(
        &self,
        generator: &MoveGenerator<'_>,
        start:     State,
        goal:      &Goal,
    ) -> MotionResult<Option<Path>>;
}

// ── Implementations ───────────────────────────────────────────────────────────

/// A* with the Manhattan distance to the goal cell as heuristic.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStarFinder;

impl PathFinder for AStarFinder {
    fn find(
        &self,
        generator: &MoveGenerator<'_>,
        start:     State,
        goal:      &Goal,
    ) -> MotionResult<Option<Path>> {
        best_first(generator, start, goal, |s| goal.distance(s))
    }
}

/// Uniform-cost search: the same loop as [`AStarFinder`] without a heuristic.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraFinder;

impl PathFinder for DijkstraFinder {
    fn find(
        &self,
        generator: &MoveGenerator<'_>,
        start:     State,
        goal:      &Goal,
    ) -> MotionResult<Option<Path>> {
        best_first(generator, start, goal, |_| 0)
    }
}

fn best_first<H>(
    generator: &MoveGenerator<'_>,
    start:     State,
    goal:      &Goal,
    heuristic: H,
) -> MotionResult<Option<Path>>
where
    H: Fn(State) -> u32,
{
    let grid = generator.grid();
    require_standing(grid, start)?;
    if !grid.in_bounds(goal.x, goal.y) {
        return Err(MotionError::OutOfBounds { x: goal.x, y: goal.y });
    }
    if goal.matches(start) {
        return Ok(Some(Path::empty()));
    }
    let Some(start_id) = grid.state_id(start) else {
        return Err(MotionError::OutOfBounds { x: start.x, y: start.y });
    };

    let mut frontier = Frontier::new(grid, start_id, heuristic(start));
    let found = frontier.run(generator, &heuristic, |s| goal.matches(s))?;
    debug!(
        "search {} -> ({}, {}): {} after {} finalized, {} expanded",
        frontier.start(),
        goal.x,
        goal.y,
        if found.is_some() { "found" } else { "no path" },
        frontier.finalized(),
        frontier.expanded
    );
    Ok(found.map(|end| frontier.path_to(end)))
}
