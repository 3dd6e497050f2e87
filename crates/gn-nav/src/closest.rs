//! Nearest reachable state to an arbitrary target cell.
//!
//! An R-tree (via `rstar`) over the cells of a `ReachableSet` answers
//! "which reachable cell is closest to `(tx, ty)`" by Euclidean cell
//! distance.  Several states can share the nearest distance (different
//! gravities in one cell, or cells on a circle around the target); the
//! cheapest wins, then the one finalized first.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use gn_search::{ReachableCell, ReachableSet};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct CellEntry {
    point: [f32; 2], // [x, y] cell coordinates
    /// Position in the set's finalization order.
    rank:  usize,
    cost:  u32,
}

impl RTreeObject for CellEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CellEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Query ─────────────────────────────────────────────────────────────────────

/// Result of a closest-reachable query.  Both fields are `None` only when
/// the reachable set is empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosestReachable {
    pub cell:     Option<ReachableCell>,
    /// Euclidean distance in cells from `cell`'s position to the target.
    pub distance: Option<f32>,
}

/// Reachable state nearest to `(tx, ty)`.
pub fn closest_reachable(set: &ReachableSet, tx: i32, ty: i32) -> ClosestReachable {
    let entries: Vec<CellEntry> = set
        .states()
        .iter()
        .enumerate()
        .map(|(rank, s)| CellEntry {
            point: [s.x as f32, s.y as f32],
            rank,
            cost:  set.cost(*s).unwrap_or(u32::MAX),
        })
        .collect();
    let tree   = RTree::bulk_load(entries);
    let target = [tx as f32, ty as f32];

    // Entries come back in ascending distance; keep the leading run that
    // ties with the first.
    let mut iter = tree.nearest_neighbor_iter(&target);
    let Some(first) = iter.next() else {
        return ClosestReachable { cell: None, distance: None };
    };
    let best_d2 = first.distance_2(&target);
    let best = iter
        .take_while(|e| e.distance_2(&target) <= best_d2)
        .fold(first, |acc, e| if (e.cost, e.rank) < (acc.cost, acc.rank) { e } else { acc });

    let state = set.states()[best.rank];
    ClosestReachable {
        cell: set.path_to(state).map(|path| ReachableCell { state, cost: best.cost, path }),
        distance: Some(best_d2.sqrt()),
    }
}
