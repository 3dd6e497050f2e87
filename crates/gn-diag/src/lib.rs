//! `gn-diag` — human-facing views of navigation results.
//!
//! Nothing here searches for paths on its own behalf: descriptions are pure
//! formatting and statistics are aggregates over `gn-search` explorations.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`describe`] | `describe_path`, `describe_outcome`                       |
//! | [`stats`]    | `navigation_stats`, `NavigationStats`, `all_valid_states` |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs sampled explorations on Rayon's thread pool.        |

pub mod describe;
pub mod stats;


pub use describe::{describe_outcome, describe_path};
pub use stats::{GravityCounts, NavigationStats, all_valid_states, navigation_stats};
