//! `SolidSet` — the tile kinds that block movement and can be stood on.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashSet, FxHasher};

/// A set of tile-kind tags treated as solid.  Every other tag is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolidSet {
    tags: FxHashSet<String>,
}

impl SolidSet {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags.into_iter().map(|t| t.as_ref().to_string()).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Order-independent content hash.
    pub fn fingerprint(&self) -> u64 {
        let mut sorted: Vec<&String> = self.tags.iter().collect();
        sorted.sort_unstable();
        let mut h = FxHasher::default();
        sorted.hash(&mut h);
        h.finish()
    }
}
