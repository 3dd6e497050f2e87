//! Best-first search core shared by exploration and the path finders.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use gn_core::{State, StateId};
use gn_grid::NavGrid;
use gn_motion::{Move, MotionResult, MoveGenerator, Path};

/// Search bookkeeping over the dense state index of one grid.
pub(crate) struct Frontier<'g> {
    grid:   &'g NavGrid,
    start:  State,
    // dist[id] = best known cost; u32::MAX for undiscovered states.
    dist:   Vec<u32>,
    closed: Vec<bool>,
    // prev[id] = move that produced dist[id].
    prev:   FxHashMap<StateId, Move>,
    // Finalized states in pop order.
    order:  Vec<StateId>,
    // Min-heap on (priority, seq); seq breaks ties by discovery order.
    heap:   BinaryHeap<Reverse<(u32, u64, StateId)>>,
    seq:    u64,
    pub expanded: usize,
}

impl<'g> Frontier<'g> {
    /// Seed the frontier with `start` (whose id must exist in `grid`).
    pub fn new(grid: &'g NavGrid, start: StateId, start_priority: u32) -> Self {
        let n = grid.state_count();
        let mut f = Self {
            grid,
            start:    grid.state_of(start),
            dist:     vec![u32::MAX; n],
            closed:   vec![false; n],
            prev:     FxHashMap::default(),
            order:    Vec::new(),
            heap:     BinaryHeap::new(),
            seq:      0,
            expanded: 0,
        };
        f.dist[start.index()] = 0;
        f.push(start_priority, start);
        f
    }

    fn push(&mut self, priority: u32, id: StateId) {
        self.heap.push(Reverse((priority, self.seq, id)));
        self.seq += 1;
    }

    /// Pop and expand until a finalized state satisfies `accept`, or the
    /// heap is empty.
    ///
    /// `heuristic` must never exceed the true remaining cost and must be
    /// consistent, otherwise finalize-on-first-pop loses optimality.
    pub fn run<H, A>(
        &mut self,
        generator: &MoveGenerator<'_>,
        heuristic: H,
        accept:    A,
    ) -> MotionResult<Option<State>>
    where
        H: Fn(State) -> u32,
        A: Fn(State) -> bool,
    {
        while let Some(Reverse((_, _, id))) = self.heap.pop() {
            // Skip stale heap entries.
            if self.closed[id.index()] {
                continue;
            }
            self.closed[id.index()] = true;
            self.order.push(id);

            let state = self.grid.state_of(id);
            if accept(state) {
                return Ok(Some(state));
            }

            let cost = self.dist[id.index()];
            self.expanded += 1;

            for m in generator.moves_from(state)? {
                let Some(next) = self.grid.state_id(m.to) else {
                    continue;
                };
                if self.closed[next.index()] {
                    continue;
                }
                let new_cost = cost.saturating_add(m.cost);
                if new_cost < self.dist[next.index()] {
                    self.dist[next.index()] = new_cost;
                    self.push(new_cost.saturating_add(heuristic(m.to)), next);
                    self.prev.insert(next, m);
                }
            }
        }
        Ok(None)
    }

    pub fn start(&self) -> State {
        self.start
    }

    pub fn finalized(&self) -> usize {
        self.order.len()
    }

    /// Path from the start to a finalized `state`.
    pub fn path_to(&self, state: State) -> Path {
        unwind(self.start, state, |s| self.grid.state_id(s).and_then(|id| self.prev.get(&id)))
    }

    /// Finalized states in pop order, with their costs and the move that
    /// reached each one.
    pub fn into_finalized(self) -> Vec<(State, u32, Option<Move>)> {
        let Self { grid, dist, mut prev, order, .. } = self;
        order
            .into_iter()
            .map(|id| (grid.state_of(id), dist[id.index()], prev.remove(&id)))
            .collect()
    }
}

/// Follow predecessor moves from `end` back to `start`.
pub(crate) fn unwind<'m, F>(start: State, end: State, prev: F) -> Path
where
    F: Fn(State) -> Option<&'m Move>,
{
    let mut moves = Vec::new();
    let mut cur = end;
    while cur != start {
        let Some(m) = prev(cur) else {
            break;
        };
        moves.push(m.clone());
        cur = m.from;
    }
    moves.reverse();
    Path::new(moves)
}
