//! Reachability: every state the agent can get to from a start, with the
//! minimum cost and a path for each.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use gn_core::State;
use gn_motion::{Move, MotionError, MotionResult, MoveGenerator, Path, require_standing};

use crate::frontier::{Frontier, unwind};

// ── ReachableCell ─────────────────────────────────────────────────────────────

/// One reachable state with its cheapest cost and the path achieving it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachableCell {
    pub state: State,
    pub cost:  u32,
    pub path:  Path,
}

// ── ReachableSet ──────────────────────────────────────────────────────────────

/// Result of [`explore`].  Always contains the start state at cost 0.
///
/// States that cannot be reached are simply absent.
#[derive(Clone, Debug)]
pub struct ReachableSet {
    start: State,
    /// Finalization order.
    order: Vec<State>,
    costs: FxHashMap<State, u32>,
    prev:  FxHashMap<State, Move>,
}

impl ReachableSet {
    pub fn start(&self) -> State {
        self.start
    }

    /// Number of reachable states, including the start.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Never true in practice: the start is always reachable.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, state: State) -> bool {
        self.costs.contains_key(&state)
    }

    /// Minimum total cost from the start, or `None` if unreachable.
    pub fn cost(&self, state: State) -> Option<u32> {
        self.costs.get(&state).copied()
    }

    /// Cheapest path from the start to `state`.
    pub fn path_to(&self, state: State) -> Option<Path> {
        if !self.contains(state) {
            return None;
        }
        Some(unwind(self.start, state, |s| self.prev.get(&s)))
    }

    /// Reachable states in the order they were finalized (non-decreasing
    /// cost).
    pub fn states(&self) -> &[State] {
        &self.order
    }

    /// Distinct `(x, y)` cells covered by at least one reachable state, in
    /// first-reached order.
    pub fn distinct_cells(&self) -> Vec<(i32, i32)> {
        let mut seen = FxHashSet::default();
        self.order
            .iter()
            .map(|s| (s.x, s.y))
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Every reachable state with its cost and full path, in finalization
    /// order.
    pub fn cells(&self) -> Vec<ReachableCell> {
        self.order
            .iter()
            .map(|&state| ReachableCell {
                state,
                cost: self.costs[&state],
                path: unwind(self.start, state, |s| self.prev.get(&s)),
            })
            .collect()
    }
}

// ── Exploration ───────────────────────────────────────────────────────────────

/// Explore the whole state graph reachable from `start`.
///
/// # Errors
///
/// [`MotionError::OutOfBounds`] or [`MotionError::NotStanding`] if
/// `start` is not a valid standing state; `Tunneling` if move generation
/// builds a bad trajectory.
pub fn explore(generator: &MoveGenerator<'_>, start: State) -> MotionResult<ReachableSet> {
    let grid = generator.grid();
    require_standing(grid, start)?;
    let Some(start_id) = grid.state_id(start) else {
        return Err(MotionError::OutOfBounds { x: start.x, y: start.y });
    };

    let mut frontier = Frontier::new(grid, start_id, 0);
    frontier.run(generator, |_| 0, |_| false)?;
    debug!(
        "explore from {start}: {} states finalized, {} expanded",
        frontier.finalized(),
        frontier.expanded
    );

    let finalized = frontier.into_finalized();
    let mut set = ReachableSet {
        start,
        order: Vec::with_capacity(finalized.len()),
        costs: FxHashMap::default(),
        prev:  FxHashMap::default(),
    };
    for (state, cost, via) in finalized {
        set.order.push(state);
        set.costs.insert(state, cost);
        if let Some(m) = via {
            set.prev.insert(state, m);
        }
    }
    Ok(set)
}
