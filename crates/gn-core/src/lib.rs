//! `gn-core` — foundational types for the `rust_gravnav` navigation engine.
//!
//! This crate is a dependency of every other `gn-*` crate.  It has no `gn-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `TileKind`, `StateId`                                   |
//! | [`gravity`]   | `Gravity` — the four "down" directions                  |
//! | [`state`]     | `State` (x, y, gravity), `Point` (continuous position)  |
//! | [`config`]    | `NavConfig`, `JumpSpec`, `StatsConfig`                  |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Coordinates
//!
//! Screen convention: `x` grows to the right, `y` grows downward, so
//! [`Gravity::Down`] is the vector `(0, 1)`.  The agent occupying cell
//! `(x, y)` sits at the continuous point `(x + 0.5, y + 0.5)`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod gravity;
pub mod ids;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{JumpSpec, NavConfig, StatsConfig};
pub use error::{CoreError, CoreResult};
pub use gravity::Gravity;
pub use ids::{StateId, TileKind};
pub use state::{Point, State};
