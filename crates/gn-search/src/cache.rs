//! The `ReachCache` — caller-owned memo of exploration results.

use std::sync::Arc;

use log::debug;
use rustc_hash::FxHashMap;

use gn_core::State;
use gn_grid::GridKey;
use gn_motion::{MotionResult, MoveGenerator};

use crate::{ReachableSet, explore};

/// Memoizes [`explore`] per `(GridKey, start)`.
///
/// Results are shared as `Arc<ReachableSet>`, so a hit costs one refcount
/// increment.  The key does not include the configuration: use one cache per
/// `NavConfig`.  Entries live until [`invalidate_grid`](Self::invalidate_grid)
/// or [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct ReachCache {
    entries: FxHashMap<(GridKey, State), Arc<ReachableSet>>,
    hits:    u64,
    misses:  u64,
}

impl ReachCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached exploration from `start` on the generator's grid, computing it
    /// on a miss.  Errors are not cached.
    pub fn get_or_explore(
        &mut self,
        generator: &MoveGenerator<'_>,
        start:     State,
    ) -> MotionResult<Arc<ReachableSet>> {
        let key = (generator.grid().key(), start);
        if let Some(set) = self.entries.get(&key) {
            self.hits += 1;
            return Ok(Arc::clone(set));
        }
        self.misses += 1;
        let set = Arc::new(explore(generator, start)?);
        self.entries.insert(key, Arc::clone(&set));
        Ok(set)
    }

    /// Drop every entry computed on the grid identified by `key`.  Returns the
    /// number of entries removed.
    pub fn invalidate_grid(&mut self, key: GridKey) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(k, _), _| *k != key);
        let removed = before - self.entries.len();
        debug!("reach cache: invalidated {removed} entries for {key:?}");
        removed
    }

    pub fn clear(&mut self) {
        debug!("reach cache: cleared {} entries", self.entries.len());
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
