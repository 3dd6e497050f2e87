//! Moves and paths.

use gn_core::{Point, State};

// ── MoveKind ──────────────────────────────────────────────────────────────────

/// Which jump variant produced a `Jump` move.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpLaunch {
    /// Index into `NavConfig::jumps`.
    pub spec: usize,
    /// `-1` / `+1` along the lateral axis, `0` for a straight jump.
    pub direction: i8,
    /// Initial velocity in world coordinates (cells per step).
    pub velocity: Point,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    Walk,
    Fall,
    Jump(JumpLaunch),
}

impl MoveKind {
    pub fn is_walk(&self) -> bool {
        matches!(self, MoveKind::Walk)
    }

    pub fn is_fall(&self) -> bool {
        matches!(self, MoveKind::Fall)
    }

    pub fn is_jump(&self) -> bool {
        matches!(self, MoveKind::Jump(_))
    }
}

// ── Move ──────────────────────────────────────────────────────────────────────

/// One edge of the navigation graph.
///
/// `trajectory` is empty for walks.  For falls it holds the centres of the
/// cells passed through; for jumps the launch point, every simulated step
/// before contact, and the contact point itself.  Only the final point may
/// lie in a solid cell.
///
/// `cost` is 1 for a walk and cells covered for a fall.  A jump costs its
/// simulation step count, raised to the Manhattan distance between `from`
/// and `to` when a fast variant covers more than one cell per step; that
/// floor keeps the Manhattan heuristic admissible.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from:       State,
    pub to:         State,
    pub kind:       MoveKind,
    pub cost:       u32,
    pub trajectory: Vec<Point>,
}

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered chain of moves where each move starts where the previous one
/// ended.  An empty path means the start already satisfies the goal.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    moves: Vec<Move>,
}

impl Path {
    /// Wrap an already-chained move list.
    pub fn new(moves: Vec<Move>) -> Self {
        debug_assert!(
            moves.windows(2).all(|w| w[0].to == w[1].from),
            "path moves must be chained"
        );
        Self { moves }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// `true` when no movement is needed.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Sum of move costs.
    pub fn total_cost(&self) -> u32 {
        self.moves.iter().map(|m| m.cost).sum()
    }

    /// State of the first move, or `None` for an empty path.
    pub fn start(&self) -> Option<State> {
        self.moves.first().map(|m| m.from)
    }

    /// Destination of the last move, or `None` for an empty path.
    pub fn end(&self) -> Option<State> {
        self.moves.last().map(|m| m.to)
    }

    /// Number of moves of each kind: `(walks, falls, jumps)`.
    pub fn kind_counts(&self) -> (usize, usize, usize) {
        self.moves.iter().fold((0, 0, 0), |(w, f, j), m| match m.kind {
            MoveKind::Walk    => (w + 1, f, j),
            MoveKind::Fall    => (w, f + 1, j),
            MoveKind::Jump(_) => (w, f, j + 1),
        })
    }
}
