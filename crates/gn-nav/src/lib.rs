//! `gn-nav` — the navigation engine's public surface.
//!
//! Hosts normally depend on this crate alone: it re-exports the types they
//! need from the `gn-*` crates and folds their errors into [`NavError`].
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`engine`]  | `NavEngine<F: PathFinder>` — queries over a `NavGrid`      |
//! | [`api`]     | free functions over `grid[y][x]` string tags               |
//! | [`closest`] | `ClosestReachable`, R-tree nearest reachable state         |
//! | [`error`]   | `NavError`, `NavResult<T>`                                 |
//!
//! # Error taxonomy
//!
//! | Outcome                        | Returned as                        |
//! |--------------------------------|------------------------------------|
//! | ragged / empty grid            | `Err(NavError::InvalidGrid)`       |
//! | start or goal not usable       | `Err(NavError::InvalidState)`      |
//! | bad config                     | `Err(NavError::Core)`              |
//! | engine invariant broken        | `Err(NavError::EngineFault)`       |
//! | no path                        | `Ok(None)`                         |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Sampled statistics explorations run on Rayon.           |
//! | `serde`    | `Serialize`/`Deserialize` on public types.              |

pub mod api;
pub mod closest;
pub mod engine;
pub mod error;


pub use api::{
    calculate_reachable_cells, describe_path, find_closest_reachable, find_path,
    get_all_valid_states, get_jump_trajectories, get_navigation_stats,
};
pub use closest::ClosestReachable;
pub use engine::NavEngine;
pub use error::{NavError, NavResult};

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use gn_core::{Gravity, JumpSpec, NavConfig, Point, State, StatsConfig};
pub use gn_diag::{GravityCounts, NavigationStats, describe_outcome};
pub use gn_grid::{GridKey, NavGrid, SolidSet, TileGrid, load_grid_csv, load_grid_reader};
pub use gn_motion::{JumpLaunch, Move, MoveKind, Path};
pub use gn_search::{AStarFinder, DijkstraFinder, Goal, PathFinder, ReachCache, ReachableCell, ReachableSet};
