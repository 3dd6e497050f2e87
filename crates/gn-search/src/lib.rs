//! `gn-search` — searching the implicit state graph.
//!
//! Nodes are `State`s; edges are the moves produced by
//! [`MoveGenerator::moves_from`][gn_motion::MoveGenerator::moves_from],
//! generated lazily as states are expanded.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`reach`]    | `explore`, `ReachableSet`, `ReachableCell`                |
//! | [`finder`]   | `Goal`, `PathFinder` trait, `AStarFinder`, `DijkstraFinder` |
//! | [`cache`]    | `ReachCache` — caller-owned memo of explorations          |
//!
//! # Search discipline
//!
//! Every search runs the same best-first loop: a binary heap keyed
//! `(priority, discovery seq)`, relaxation only on a strictly smaller cost,
//! and a state is finalized the first time it is popped and never expanded
//! again.  Exploration uses a zero heuristic and no goal; A* uses the
//! Manhattan distance to the goal cell.  Every move costs at least the grid
//! distance it covers, so that heuristic is consistent and A* costs match
//! exploration costs exactly.

mod frontier;

pub mod cache;
pub mod finder;
pub mod reach;


pub use cache::ReachCache;
pub use finder::{AStarFinder, DijkstraFinder, Goal, PathFinder};
pub use reach::{ReachableCell, ReachableSet, explore};
