//! Plain-text rendering of paths.
//!
//! Directions are screen directions (`up` is towards row 0) regardless of
//! the agent's gravity.  A path renders as one numbered line per step, with
//! runs of walks in the same direction merged:
//!
//! ```text
//! 1. walk right ×4
//! 2. jump up-right landing on floor
//! 3. walk right ×3
//! ```

use std::fmt::Write;

use gn_core::{Gravity, Point};
use gn_motion::{Move, MoveKind, Path};

/// Text for a path whose start already satisfies the goal.
pub const NO_MOVEMENT: &str = "no movement needed";
/// Text for a query that found no path.
pub const NO_PATH: &str = "no path found";

/// Describe `path` step by step.  An empty path reads
/// `"no movement needed"`.
pub fn describe_path(path: &Path) -> String {
    if path.is_empty() {
        return NO_MOVEMENT.to_string();
    }
    let mut out = String::new();
    for (n, step) in steps(path.moves()).iter().enumerate() {
        if n > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{}. {step}", n + 1);
    }
    out
}

/// Like [`describe_path`], but also covers the no-path outcome.
pub fn describe_outcome(path: Option<&Path>) -> String {
    match path {
        Some(p) => describe_path(p),
        None    => NO_PATH.to_string(),
    }
}

// ── Step rendering ────────────────────────────────────────────────────────────

fn steps(moves: &[Move]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut i = 0;
    while i < moves.len() {
        let m = &moves[i];
        let (line, used) = match m.kind {
            MoveKind::Walk => {
                let dir = walk_direction(m);
                let run = moves[i..]
                    .iter()
                    .take_while(|w| w.kind.is_walk() && walk_direction(w) == dir)
                    .count();
                let line = if run > 1 { format!("walk {dir} ×{run}") } else { format!("walk {dir}") };
                (line, run)
            }
            MoveKind::Fall         => (describe_fall(m), 1),
            MoveKind::Jump(launch) => (describe_jump(m, launch.velocity), 1),
        };
        lines.push(line);
        i += used;
    }
    lines
}

fn walk_direction(m: &Move) -> &'static str {
    let dx = (m.to.x - m.from.x).signum();
    let dy = (m.to.y - m.from.y).signum();
    Gravity::from_vector(dx, dy).map_or("?", Gravity::tag)
}

fn describe_fall(m: &Move) -> String {
    let g = m.from.gravity;
    let (gx, gy) = g.vector();
    let fallen = (m.to.x - m.from.x) * gx + (m.to.y - m.from.y) * gy;
    if g == Gravity::Down {
        format!("fall {fallen}")
    } else {
        format!("fall {fallen} {}", g.tag())
    }
}

/// `jump <launch direction> landing on <surface>`.  The launch direction
/// names the component against gravity first, then the sideways one
/// (`up-left` under normal gravity, `right-down` on a left wall).
fn describe_jump(m: &Move, velocity: Point) -> String {
    let g = m.from.gravity;
    let (gx, gy) = g.vector();
    let (lx, ly) = g.lateral();
    let along = velocity.x * gx as f32 + velocity.y * gy as f32;
    let side  = velocity.x * lx as f32 + velocity.y * ly as f32;

    let mut parts = Vec::with_capacity(2);
    if along < 0.0 {
        parts.push(g.opposite().tag());
    } else if along > 0.0 {
        parts.push(g.tag());
    }
    if side != 0.0 {
        let s = side.signum() as i32;
        if let Some(d) = Gravity::from_vector(s * lx, s * ly) {
            parts.push(d.tag());
        }
    }
    format!("jump {} landing on {}", parts.join("-"), m.to.gravity.surface_name())
}
