//! Discrete jump simulation.
//!
//! A flight is integrated in fixed steps in the agent's local frame: `l` is
//! the lateral (walking) axis and `g` the gravity vector.
//!
//! ```text
//! v₀      = direction · lateral · l − launch · g
//! p_{k+1} = p_k + v_k
//! v_{k+1} = v_k + accel · g        (gravity-axis speed capped at terminal)
//! ```
//!
//! This stage knows nothing about the grid; collision is [`crate::collide`]'s
//! job.

use gn_core::{Gravity, JumpSpec, NavConfig, Point};

/// Initial world-space velocity for a jump variant.
pub fn launch_velocity(gravity: Gravity, spec: &JumpSpec, direction: i8) -> Point {
    let (gx, gy) = gravity.vector();
    let (lx, ly) = gravity.lateral();
    let side = direction as f32 * spec.lateral;
    Point::new(
        side * lx as f32 - spec.launch * gx as f32,
        side * ly as f32 - spec.launch * gy as f32,
    )
}

/// Iterator over the positions after each simulation step.
///
/// The launch point itself is not yielded.  Yields at most
/// `config.max_jump_steps` points.
#[derive(Clone, Debug)]
pub struct Flight {
    pos:       Point,
    vel:       Point,
    gravity:   (f32, f32),
    accel:     f32,
    terminal:  f32,
    remaining: u32,
}

impl Flight {
    pub fn new(origin: Point, gravity: Gravity, velocity: Point, config: &NavConfig) -> Self {
        let (gx, gy) = gravity.vector();
        Self {
            pos:       origin,
            vel:       velocity,
            gravity:   (gx as f32, gy as f32),
            accel:     config.gravity_accel,
            terminal:  config.terminal_velocity,
            remaining: config.max_jump_steps,
        }
    }

    /// Convenience: a flight launched from `origin` with a configured variant.
    pub fn launch(
        origin:    Point,
        gravity:   Gravity,
        spec:      &JumpSpec,
        direction: i8,
        config:    &NavConfig,
    ) -> Self {
        Self::new(origin, gravity, launch_velocity(gravity, spec, direction), config)
    }
}

impl Iterator for Flight {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        self.pos = Point::new(self.pos.x + self.vel.x, self.pos.y + self.vel.y);

        let (gx, gy) = self.gravity;
        let along = self.vel.x * gx + self.vel.y * gy;
        let next  = (along + self.accel).min(self.terminal);
        self.vel.x += (next - along) * gx;
        self.vel.y += (next - along) * gy;

        Some(self.pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}
