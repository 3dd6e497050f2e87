//! Level-design statistics: how much of a grid an agent can actually use.
//!
//! # Sampling
//!
//! Exploring from every valid state is quadratic in grid size, so the
//! per-start figures are computed over at most `config.stats.sample_limit`
//! starts.  When the grid has more valid states than that, the sample is
//! drawn with a `SmallRng` seeded from `config.stats.seed`, so the same grid
//! and config always produce the same numbers.  With the `parallel` feature
//! the sampled explorations run on Rayon's thread pool.

use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;
use rustc_hash::FxHashSet;

use gn_core::{Gravity, NavConfig, State};
use gn_grid::NavGrid;
use gn_motion::{MotionResult, MoveGenerator, is_standing};
use gn_search::explore;

// ── GravityCounts ─────────────────────────────────────────────────────────────

/// Valid standing states bucketed by gravity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GravityCounts {
    pub down:  usize,
    pub up:    usize,
    pub left:  usize,
    pub right: usize,
}

impl GravityCounts {
    pub fn get(&self, gravity: Gravity) -> usize {
        match gravity {
            Gravity::Down  => self.down,
            Gravity::Up    => self.up,
            Gravity::Left  => self.left,
            Gravity::Right => self.right,
        }
    }

    fn bump(&mut self, gravity: Gravity) {
        match gravity {
            Gravity::Down  => self.down += 1,
            Gravity::Up    => self.up += 1,
            Gravity::Left  => self.left += 1,
            Gravity::Right => self.right += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.down + self.up + self.left + self.right
    }
}

// ── NavigationStats ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationStats {
    pub total_cells: usize,
    pub open_cells:  usize,
    /// Distinct cells with at least one valid gravity.
    pub standable_cells: usize,
    /// Valid standing states over all gravities.
    pub total_states: usize,
    pub by_gravity:   GravityCounts,

    /// First valid `Down` state in row-major order, else the first valid
    /// state of any gravity.  `None` if nothing is standable.
    pub canonical_start: Option<State>,
    /// States reachable from `canonical_start`, the start included.
    pub reachable_states: usize,
    /// Distinct cells among those states.
    pub reachable_cells: usize,
    /// `reachable_cells / standable_cells`; 0 for a grid with no standable
    /// cells.
    pub reachable_fraction: f64,

    /// Number of starts explored for the figures below.
    pub sampled_starts: usize,
    /// Mean over sampled starts of the fraction of standable cells reached.
    pub mean_sample_fraction: f64,
    /// Sampled starts that reach nothing but themselves.
    pub isolated_states: usize,
}

// ── Enumeration ───────────────────────────────────────────────────────────────

/// Every valid standing state: row-major, gravities in `Gravity::ALL` order.
pub fn all_valid_states(grid: &NavGrid) -> Vec<State> {
    let mut out = Vec::new();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            for gravity in Gravity::ALL {
                let s = State::new(x, y, gravity);
                if is_standing(grid, s) {
                    out.push(s);
                }
            }
        }
    }
    out
}

// ── Aggregation ───────────────────────────────────────────────────────────────

/// Per-start result of a sampled exploration.
struct Sample {
    cells:    usize,
    isolated: bool,
}

/// Compute [`NavigationStats`] for `grid` under `config`.
///
/// # Errors
///
/// Only `Tunneling`, which indicates an engine bug: every start explored is
/// taken from [`all_valid_states`].
pub fn navigation_stats(grid: &NavGrid, config: &NavConfig) -> MotionResult<NavigationStats> {
    let generator = MoveGenerator::new(grid, config);
    let states    = all_valid_states(grid);

    let mut by_gravity = GravityCounts::default();
    let mut standable  = FxHashSet::default();
    for s in &states {
        by_gravity.bump(s.gravity);
        standable.insert((s.x, s.y));
    }
    let standable_cells = standable.len();
    let fraction = |cells: usize| {
        if standable_cells == 0 { 0.0 } else { cells as f64 / standable_cells as f64 }
    };

    let open_cells = (0..grid.height() as i32)
        .flat_map(|y| (0..grid.width() as i32).map(move |x| (x, y)))
        .filter(|&(x, y)| grid.is_open(x, y))
        .count();

    let canonical_start = states
        .iter()
        .find(|s| s.gravity == Gravity::Down)
        .or_else(|| states.first())
        .copied();

    let (reachable_states, reachable_cells) = match canonical_start {
        Some(start) => {
            let set = explore(&generator, start)?;
            (set.len(), set.distinct_cells().len())
        }
        None => (0, 0),
    };

    let starts  = sample_starts(&states, config.stats.sample_limit, config.stats.seed);
    let samples = run_samples(&generator, &starts)?;
    let mean_sample_fraction = if samples.is_empty() {
        0.0
    } else {
        samples.iter().map(|s| fraction(s.cells)).sum::<f64>() / samples.len() as f64
    };
    let isolated_states = samples.iter().filter(|s| s.isolated).count();

    let stats = NavigationStats {
        total_cells: grid.cell_count(),
        open_cells,
        standable_cells,
        total_states: states.len(),
        by_gravity,
        canonical_start,
        reachable_states,
        reachable_cells,
        reachable_fraction: fraction(reachable_cells),
        sampled_starts: starts.len(),
        mean_sample_fraction,
        isolated_states,
    };

    info!(
        "navigation stats {}x{}: {} standable cells, {} states, {:.1}% reachable from canonical start, {} sampled ({} isolated)",
        grid.width(),
        grid.height(),
        stats.standable_cells,
        stats.total_states,
        stats.reachable_fraction * 100.0,
        stats.sampled_starts,
        stats.isolated_states
    );
    Ok(stats)
}

/// All states when there are at most `limit`, otherwise a seeded sample kept
/// in row-major order.
fn sample_starts(states: &[State], limit: usize, seed: u64) -> Vec<State> {
    if states.len() <= limit {
        return states.to_vec();
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut picked = index::sample(&mut rng, states.len(), limit).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| states[i]).collect()
}

fn explore_sample(generator: &MoveGenerator<'_>, start: State) -> MotionResult<Sample> {
    let set = explore(generator, start)?;
    Ok(Sample { cells: set.distinct_cells().len(), isolated: set.len() == 1 })
}

#[cfg(not(feature = "parallel"))]
fn run_samples(generator: &MoveGenerator<'_>, starts: &[State]) -> MotionResult<Vec<Sample>> {
    starts.iter().map(|&s| explore_sample(generator, s)).collect()
}

#[cfg(feature = "parallel")]
fn run_samples(generator: &MoveGenerator<'_>, starts: &[State]) -> MotionResult<Vec<Sample>> {
    use rayon::prelude::*;

    starts.par_iter().map(|&s| explore_sample(generator, s)).collect()
}
