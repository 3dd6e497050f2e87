//! `gn-motion` — the movement primitives of the navigation graph.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`moves`]      | `Move`, `MoveKind`, `JumpLaunch`, `Path`                   |
//! | [`standing`]   | `is_standing`, `require_standing`                          |
//! | [`kinematics`] | `Flight` — discrete jump trajectory simulation             |
//! | [`collide`]    | `trace_segment`, `first_contact` — grid collision (DDA)    |
//! | [`landing`]    | `resolve` — landing state from the struck face             |
//! | [`generator`]  | `MoveGenerator` — all legal moves out of a state           |
//! | [`error`]      | `MotionError`, `MotionResult<T>`                           |
//!
//! # Jump pipeline
//!
//! Jumps go through three independently testable stages:
//!
//! 1. **simulate**: [`kinematics::Flight`] yields the positions after each
//!    fixed step, knowing nothing about the grid.
//! 2. **validate**: [`collide::first_contact`] walks the polyline cell by
//!    cell and reports the first solid face struck, or that the flight left
//!    the grid.
//! 3. **land**: [`landing::resolve`] turns the struck face into a standing
//!    state whose gravity points into that face.

pub mod collide;
pub mod error;
pub mod generator;
pub mod kinematics;
pub mod landing;
pub mod moves;
pub mod standing;

#[cfg(test)]
mod tests;

pub use error::{MotionError, MotionResult};
pub use generator::{Fall, MoveGenerator, verify_trajectory};
pub use moves::{JumpLaunch, Move, MoveKind, Path};
pub use standing::{is_standing, require_standing};
