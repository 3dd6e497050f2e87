//! Free functions over plain string grids.
//!
//! Each call builds a `NavGrid` from `grid[y][x]` tile tags and the list of
//! solid tags, then runs one query with `NavConfig::default()`.  Hosts that
//! issue many queries against one grid should build the grid once and use
//! [`NavEngine`] directly.

use gn_core::{Gravity, NavConfig, State};
use gn_diag::NavigationStats;
use gn_grid::{NavGrid, SolidSet, TileGrid};
use gn_motion::{Move, Path};
use gn_search::{Goal, ReachableCell};

use crate::{ClosestReachable, NavEngine, NavResult};

fn build<R, S, T>(grid: &[R], solid: &[T]) -> NavResult<(NavEngine, NavGrid)>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let tiles  = TileGrid::from_rows(grid)?;
    let solids = SolidSet::new(solid);
    Ok((NavEngine::new(NavConfig::default())?, NavGrid::new(&tiles, &solids)))
}

/// Cheapest path from `start` to `goal`, or `None` if unreachable.
pub fn find_path<R, S, T>(grid: &[R], solid: &[T], start: State, goal: Goal) -> NavResult<Option<Path>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let (engine, grid) = build(grid, solid)?;
    engine.find_path(&grid, start, &goal)
}

/// Step-by-step text for `path`.
pub fn describe_path(path: &Path) -> String {
    gn_diag::describe_path(path)
}

pub fn get_navigation_stats<R, S, T>(grid: &[R], solid: &[T]) -> NavResult<NavigationStats>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let (engine, grid) = build(grid, solid)?;
    engine.navigation_stats(&grid)
}

pub fn get_all_valid_states<R, S, T>(grid: &[R], solid: &[T]) -> NavResult<Vec<State>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let (engine, grid) = build(grid, solid)?;
    Ok(engine.all_valid_states(&grid))
}

/// Every state reachable from `(x, y, gravity)`, start included.  The full
/// set is always returned; pagination is the caller's business.
pub fn calculate_reachable_cells<R, S, T>(
    x:       i32,
    y:       i32,
    gravity: Gravity,
    grid:    &[R],
    solid:   &[T],
) -> NavResult<Vec<ReachableCell>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let (engine, grid) = build(grid, solid)?;
    engine.reachable_cells(&grid, State::new(x, y, gravity))
}

pub fn find_closest_reachable<R, S, T>(
    x:        i32,
    y:        i32,
    gravity:  Gravity,
    target_x: i32,
    target_y: i32,
    grid:     &[R],
    solid:    &[T],
) -> NavResult<ClosestReachable>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let (engine, grid) = build(grid, solid)?;
    engine.closest_reachable(&grid, State::new(x, y, gravity), target_x, target_y)
}

/// Jump moves from `(x, y, gravity)`, for drawing arcs.
pub fn get_jump_trajectories<R, S, T>(
    x:       i32,
    y:       i32,
    gravity: Gravity,
    grid:    &[R],
    solid:   &[T],
) -> NavResult<Vec<Move>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let (engine, grid) = build(grid, solid)?;
    engine.jump_trajectories(&grid, State::new(x, y, gravity))
}
