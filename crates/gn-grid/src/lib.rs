//! `gn-grid` — the read-only grid model the navigation engine runs on.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`tile`]     | `TileGrid` — interned tile-kind tags, row-major            |
//! | [`solid`]    | `SolidSet` — which tags block movement                     |
//! | [`nav_grid`] | `NavGrid` (solidity mask + state indexing), `GridKey`      |
//! | [`loader`]   | `load_grid_csv`, `load_grid_reader`                        |
//! | [`error`]    | `GridError`, `GridResult<T>`                               |
//!
//! Malformed input (ragged rows, zero dimensions, grids too large to index)
//! is rejected when the grid is built, never discovered later through an
//! out-of-range read.

pub mod error;
pub mod loader;
pub mod nav_grid;
pub mod solid;
pub mod tile;


pub use error::{GridError, GridResult};
pub use loader::{load_grid_csv, load_grid_reader};
pub use nav_grid::{GridKey, NavGrid, MAX_CELLS};
pub use solid::SolidSet;
pub use tile::TileGrid;
