//! Grid collision for simulated flights.
//!
//! Each segment between two consecutive flight positions is walked cell by
//! cell (Amanatides–Woo voxel traversal), so a fast step can never skip over
//! a thin wall.
//!
//! # Boundary convention
//!
//! A point lying exactly on a cell boundary belongs to the cell on the
//! positive side (`floor`).  Moving in the positive direction, reaching the
//! boundary therefore already counts as entering the next cell; moving in the
//! negative direction the boundary must be passed strictly.

use gn_core::{Gravity, Point};
use gn_grid::NavGrid;

// ── Results ───────────────────────────────────────────────────────────────────

/// One way of resting against the struck surface: the open cell the agent
/// would occupy and the direction from it into the solid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub cell:   (i32, i32),
    pub normal: Gravity,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SegmentTrace {
    /// The whole segment lies in open cells.
    Clear,
    /// The segment leaves the grid before touching anything solid.
    Escaped,
    /// The segment enters a solid cell at `point`.  Normally one candidate;
    /// a crossing exactly through a cell corner can produce several.
    Blocked { point: Point, candidates: Vec<Candidate> },
}

/// Where a flight first touched something.
#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    /// 1-based step during which contact happened.
    pub step:       u32,
    pub point:      Point,
    pub candidates: Vec<Candidate>,
    /// Launch point, every step position before contact, then `point`.
    pub trajectory: Vec<Point>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArcOutcome {
    Contact(Contact),
    /// Left the grid during `step`.
    Escaped { step: u32 },
    /// Step budget ran out in mid-air.
    Exhausted { steps: u32 },
}

// ── Segment traversal ─────────────────────────────────────────────────────────

/// Per-axis traversal state.
struct Axis {
    step:  i32,
    t_max: f32,
    t_del: f32,
}

impl Axis {
    fn new(origin: f32, cell: i32, delta: f32) -> Self {
        if delta > 0.0 {
            Self { step: 1, t_max: ((cell + 1) as f32 - origin) / delta, t_del: 1.0 / delta }
        } else if delta < 0.0 {
            Self { step: -1, t_max: (cell as f32 - origin) / delta, t_del: -1.0 / delta }
        } else {
            Self { step: 0, t_max: f32::INFINITY, t_del: f32::INFINITY }
        }
    }

    /// Whether the next boundary on this axis is crossed within the segment.
    #[inline]
    fn crosses(&self) -> bool {
        match self.step {
            1  => self.t_max <= 1.0,
            -1 => self.t_max < 1.0,
            _  => false,
        }
    }

    fn normal(&self, horizontal: bool) -> Gravity {
        let v = if horizontal { (self.step, 0) } else { (0, self.step) };
        // `step` is ±1 whenever a crossing happens.
        Gravity::from_vector(v.0, v.1).unwrap_or_default()
    }
}

/// Walk the segment `a → b` through the grid.
///
/// `a` must lie in an open cell; the trace starts from `a.cell()`.
pub fn trace_segment(grid: &NavGrid, a: Point, b: Point) -> SegmentTrace {
    let (mut cx, mut cy) = a.cell();
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut ax = Axis::new(a.x, cx, dx);
    let mut ay = Axis::new(a.y, cy, dy);

    let at = |t: f32| Point::new(a.x + dx * t, a.y + dy * t);

    loop {
        let (cross_x, cross_y) = match (ax.crosses(), ay.crosses()) {
            (false, false) => return SegmentTrace::Clear,
            (true, true) if ax.t_max < ay.t_max => (true, false),
            (true, true) if ay.t_max < ax.t_max => (false, true),
            other => other,
        };

        if cross_x && cross_y {
            // Exact corner crossing.
            let t    = ax.t_max;
            let side = (cx + ax.step, cy);
            let vert = (cx, cy + ay.step);
            let diag = (cx + ax.step, cy + ay.step);

            let mut candidates = Vec::new();
            if grid.is_solid(side.0, side.1) {
                candidates.push(Candidate { cell: (cx, cy), normal: ax.normal(true) });
            }
            if grid.is_solid(vert.0, vert.1) {
                candidates.push(Candidate { cell: (cx, cy), normal: ay.normal(false) });
            }
            if candidates.is_empty() && grid.is_solid(diag.0, diag.1) {
                // Only the diagonal cell is solid: rest beside it on either
                // open neighbour.
                if grid.is_open(side.0, side.1) {
                    candidates.push(Candidate { cell: side, normal: ay.normal(false) });
                }
                if grid.is_open(vert.0, vert.1) {
                    candidates.push(Candidate { cell: vert, normal: ax.normal(true) });
                }
            }
            if !candidates.is_empty() {
                return SegmentTrace::Blocked { point: at(t), candidates };
            }
            if !grid.is_open(diag.0, diag.1)
                || !grid.is_open(side.0, side.1)
                || !grid.is_open(vert.0, vert.1)
            {
                return SegmentTrace::Escaped;
            }
            cx = diag.0;
            cy = diag.1;
            ax.t_max += ax.t_del;
            ay.t_max += ay.t_del;
            continue;
        }

        let (next, t, normal) = if cross_x {
            ((cx + ax.step, cy), ax.t_max, ax.normal(true))
        } else {
            ((cx, cy + ay.step), ay.t_max, ay.normal(false))
        };

        if !grid.in_bounds(next.0, next.1) {
            return SegmentTrace::Escaped;
        }
        if grid.is_solid(next.0, next.1) {
            return SegmentTrace::Blocked {
                point:      at(t),
                candidates: vec![Candidate { cell: (cx, cy), normal }],
            };
        }

        (cx, cy) = next;
        if cross_x {
            ax.t_max += ax.t_del;
        } else {
            ay.t_max += ay.t_del;
        }
    }
}

// ── Flight validation ─────────────────────────────────────────────────────────

/// Follow a flight from `origin` through `steps` until it touches a solid
/// cell, leaves the grid, or runs out of steps.
///
/// `origin` must lie in an open cell.
pub fn first_contact<I>(grid: &NavGrid, origin: Point, steps: I) -> ArcOutcome
where
    I: IntoIterator<Item = Point>,
{
    let mut trajectory = vec![origin];
    let mut prev = origin;
    let mut step = 0u32;

    for next in steps {
        step += 1;
        match trace_segment(grid, prev, next) {
            SegmentTrace::Clear => {
                trajectory.push(next);
                prev = next;
            }
            SegmentTrace::Escaped => return ArcOutcome::Escaped { step },
            SegmentTrace::Blocked { point, candidates } => {
                trajectory.push(point);
                return ArcOutcome::Contact(Contact { step, point, candidates, trajectory });
            }
        }
    }

    ArcOutcome::Exhausted { steps: step }
}
