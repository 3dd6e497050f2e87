//! `NavEngine` — a validated configuration plus a path finder, queried
//! against any number of grids.

use std::sync::Arc;

use log::debug;

use gn_core::{NavConfig, State};
use gn_diag::NavigationStats;
use gn_grid::NavGrid;
use gn_motion::{Move, MoveGenerator, Path, require_standing};
use gn_search::{AStarFinder, Goal, PathFinder, ReachCache, ReachableCell, ReachableSet, explore};

use crate::closest::{ClosestReachable, closest_reachable};
use crate::NavResult;

/// Entry point for navigation queries.
///
/// Holds no per-grid state: every method takes the grid it works on, and
/// every call allocates its own search structures, so one engine can be
/// shared across threads.
///
/// # Example
///
/// ```rust,ignore
/// let engine = NavEngine::new(NavConfig::default())?;
/// let grid   = NavGrid::from_ascii(level_text, "#")?;
/// match engine.find_path(&grid, start, &Goal::cell(9, 1))? {
///     Some(path) => println!("{}", describe_path(&path)),
///     None       => println!("unreachable"),
/// }
/// ```
pub struct NavEngine<F: PathFinder = AStarFinder> {
    config: NavConfig,
    finder: F,
}

impl NavEngine<AStarFinder> {
    /// Engine using A*.
    ///
    /// # Errors
    ///
    /// [`NavError::Core`][crate::NavError::Core] if `config` fails
    /// [`NavConfig::validate`].
    pub fn new(config: NavConfig) -> NavResult<Self> {
        Self::with_finder(config, AStarFinder)
    }
}

impl<F: PathFinder> NavEngine<F> {
    /// Engine using a custom [`PathFinder`].
    pub fn with_finder(config: NavConfig, finder: F) -> NavResult<Self> {
        config.validate()?;
        Ok(Self { config, finder })
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    fn generator<'a>(&'a self, grid: &'a NavGrid) -> MoveGenerator<'a> {
        MoveGenerator::new(grid, &self.config)
    }

    // ── Path finding ──────────────────────────────────────────────────────

    /// Cheapest path from `start` to `goal`; `Ok(None)` if there is none.
    pub fn find_path(&self, grid: &NavGrid, start: State, goal: &Goal) -> NavResult<Option<Path>> {
        Ok(self.finder.find(&self.generator(grid), start, goal)?)
    }

    // ── Reachability ──────────────────────────────────────────────────────

    pub fn reachable(&self, grid: &NavGrid, start: State) -> NavResult<ReachableSet> {
        Ok(explore(&self.generator(grid), start)?)
    }

    /// Every reachable state with cost and path, in finalization order.
    pub fn reachable_cells(&self, grid: &NavGrid, start: State) -> NavResult<Vec<ReachableCell>> {
        Ok(self.reachable(grid, start)?.cells())
    }

    /// Like [`reachable`](Self::reachable), memoized in a caller-owned cache.
    ///
    /// The cache must not be shared with an engine using a different config.
    pub fn reachable_cached(
        &self,
        cache: &mut ReachCache,
        grid:  &NavGrid,
        start: State,
    ) -> NavResult<Arc<ReachableSet>> {
        Ok(cache.get_or_explore(&self.generator(grid), start)?)
    }

    /// Reachable state nearest to the target cell `(tx, ty)`.
    pub fn closest_reachable(
        &self,
        grid:  &NavGrid,
        start: State,
        tx:    i32,
        ty:    i32,
    ) -> NavResult<ClosestReachable> {
        let set = self.reachable(grid, start)?;
        let closest = closest_reachable(&set, tx, ty);
        debug!(
            "closest reachable to ({tx}, {ty}) from {start}: {:?} at {:?}",
            closest.cell.as_ref().map(|c| c.state),
            closest.distance
        );
        Ok(closest)
    }

    // ── Visualisation & diagnostics ───────────────────────────────────────

    /// Jump moves available from `start`, with trajectories.
    pub fn jump_trajectories(&self, grid: &NavGrid, start: State) -> NavResult<Vec<Move>> {
        require_standing(grid, start)?;
        Ok(self.generator(grid).jumps_from(start)?)
    }

    pub fn navigation_stats(&self, grid: &NavGrid) -> NavResult<NavigationStats> {
        Ok(gn_diag::navigation_stats(grid, &self.config)?)
    }

    pub fn all_valid_states(&self, grid: &NavGrid) -> Vec<State> {
        gn_diag::all_valid_states(grid)
    }
}
