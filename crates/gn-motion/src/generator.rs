//! `MoveGenerator` — the outgoing edges of a navigation state.
//!
//! Moves are produced in a fixed order (walks, falls, then jumps in config
//! order, negative direction before positive), so searches that break ties by
//! discovery order are deterministic.

use log::trace;

use gn_core::{NavConfig, Point, State};
use gn_grid::NavGrid;

use crate::collide::{ArcOutcome, first_contact};
use crate::kinematics::{Flight, launch_velocity};
use crate::{JumpLaunch, Move, MoveKind, MotionError, MotionResult, is_standing, landing};

/// Result of free-falling from an unsupported cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Fall {
    /// Where the agent comes to rest (gravity unchanged).
    pub landing: State,
    /// Cells fallen below the starting cell.
    pub distance: u32,
    /// Centres of the starting cell and every cell fallen through.
    pub trajectory: Vec<Point>,
}

/// Enumerates legal moves over a borrowed grid and config.
///
/// Cheap to construct; holds no state of its own.
#[derive(Copy, Clone)]
pub struct MoveGenerator<'a> {
    grid:   &'a NavGrid,
    config: &'a NavConfig,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(grid: &'a NavGrid, config: &'a NavConfig) -> Self {
        Self { grid, config }
    }

    pub fn grid(&self) -> &'a NavGrid {
        self.grid
    }

    pub fn config(&self) -> &'a NavConfig {
        self.config
    }

    /// All legal moves out of `state`, in generation order.
    ///
    /// A state the agent cannot stand in has no outgoing moves.
    ///
    /// # Errors
    ///
    /// [`MotionError::Tunneling`] if a built jump trajectory fails
    /// verification.
    pub fn moves_from(&self, state: State) -> MotionResult<Vec<Move>> {
        if !is_standing(self.grid, state) {
            return Ok(Vec::new());
        }
        let mut moves = self.walks(state);
        moves.extend(self.ledge_falls(state));
        moves.extend(self.jumps(state)?);
        Ok(moves)
    }

    /// Jump moves only (for trajectory visualisation).
    pub fn jumps_from(&self, state: State) -> MotionResult<Vec<Move>> {
        if !is_standing(self.grid, state) {
            return Ok(Vec::new());
        }
        self.jumps(state)
    }

    // ── Walk ──────────────────────────────────────────────────────────────

    /// One cell along the surface, each way, where the floor continues.
    fn walks(&self, state: State) -> Vec<Move> {
        let (lx, ly) = state.gravity.lateral();
        let (gx, gy) = state.gravity.vector();
        [-1, 1]
            .into_iter()
            .filter_map(|s| {
                let (nx, ny) = (state.x + s * lx, state.y + s * ly);
                let ok = self.grid.is_open(nx, ny) && self.grid.is_solid(nx + gx, ny + gy);
                ok.then(|| Move {
                    from:       state,
                    to:         State::new(nx, ny, state.gravity),
                    kind:       MoveKind::Walk,
                    cost:       1,
                    trajectory: Vec::new(),
                })
            })
            .collect()
    }

    // ── Fall ──────────────────────────────────────────────────────────────

    /// Free-fall from `state` in its gravity direction.
    ///
    /// Scans consecutive open cells until the next one is solid (the new
    /// floor).  Returns `None` if the start cell is not open, or if the agent
    /// would leave the grid.  A state that is already standing lands in place
    /// with `distance == 0`.
    pub fn fall_from(&self, state: State) -> Option<Fall> {
        if !self.grid.is_open(state.x, state.y) {
            return None;
        }
        let (gx, gy) = state.gravity.vector();
        let (mut x, mut y) = (state.x, state.y);
        let mut trajectory = vec![Point::cell_center(x, y)];
        loop {
            let (nx, ny) = (x + gx, y + gy);
            if !self.grid.in_bounds(nx, ny) {
                return None;
            }
            if self.grid.is_solid(nx, ny) {
                return Some(Fall {
                    landing:    State::new(x, y, state.gravity),
                    distance:   trajectory.len() as u32 - 1,
                    trajectory,
                });
            }
            (x, y) = (nx, ny);
            trajectory.push(Point::cell_center(x, y));
        }
    }

    /// Step off a ledge on either side and fall to the surface below.
    ///
    /// Cost counts every cell passed through after leaving the ledge (the
    /// step-off cell plus the cells fallen), which equals the grid distance
    /// covered.
    fn ledge_falls(&self, state: State) -> Vec<Move> {
        let (lx, ly) = state.gravity.lateral();
        let (gx, gy) = state.gravity.vector();
        [-1, 1]
            .into_iter()
            .filter_map(|s| {
                let (nx, ny) = (state.x + s * lx, state.y + s * ly);
                if !self.grid.is_open(nx, ny) || self.grid.is_solid(nx + gx, ny + gy) {
                    return None;
                }
                let fall = self.fall_from(State::new(nx, ny, state.gravity))?;
                Some(Move {
                    from:       state,
                    to:         fall.landing,
                    kind:       MoveKind::Fall,
                    cost:       fall.distance + 1,
                    trajectory: fall.trajectory,
                })
            })
            .collect()
    }

    // ── Jump ──────────────────────────────────────────────────────────────

    fn jumps(&self, state: State) -> MotionResult<Vec<Move>> {
        let mut moves = Vec::new();
        for (index, spec) in self.config.jumps.iter().enumerate() {
            let directions: &[i8] = if spec.lateral > 0.0 { &[-1, 1] } else { &[0] };
            for &direction in directions {
                if let Some(m) = self.jump(state, index, direction)? {
                    moves.push(m);
                }
            }
        }
        Ok(moves)
    }

    /// Simulate, validate, and land a single jump variant.
    ///
    /// The move costs `max(steps, manhattan(from, to))`: the step count, or
    /// the grid distance when the variant outruns one cell per step.
    fn jump(&self, from: State, index: usize, direction: i8) -> MotionResult<Option<Move>> {
        let spec     = &self.config.jumps[index];
        let velocity = launch_velocity(from.gravity, spec, direction);
        let flight   = Flight::new(from.center(), from.gravity, velocity, self.config);

        let contact = match first_contact(self.grid, from.center(), flight) {
            ArcOutcome::Contact(c) => c,
            ArcOutcome::Escaped { step } => {
                trace!("jump {index}/{direction} from {from} left the grid at step {step}");
                return Ok(None);
            }
            ArcOutcome::Exhausted { steps } => {
                trace!("jump {index}/{direction} from {from} still airborne after {steps} steps");
                return Ok(None);
            }
        };

        if contact.step == 1 {
            trace!("jump {index}/{direction} from {from} blocked on the first step");
            return Ok(None);
        }

        let Some(to) = landing::resolve(self.grid, &contact, from.gravity) else {
            trace!("jump {index}/{direction} from {from} has no standing landing");
            return Ok(None);
        };
        if to == from {
            return Ok(None);
        }

        verify_trajectory(self.grid, &contact.trajectory)?;

        Ok(Some(Move {
            from,
            to,
            kind:       MoveKind::Jump(JumpLaunch { spec: index, direction, velocity }),
            cost:       contact.step.max(from.manhattan(&to)),
            trajectory: contact.trajectory,
        }))
    }
}

/// Check that every trajectory point except the last lies in an open cell.
///
/// # Errors
///
/// [`MotionError::Tunneling`] naming the first offending point.
pub fn verify_trajectory(grid: &NavGrid, trajectory: &[Point]) -> MotionResult<()> {
    let Some((_, body)) = trajectory.split_last() else {
        return Ok(());
    };
    for (step, p) in body.iter().enumerate() {
        let (x, y) = p.cell();
        if !grid.is_open(x, y) {
            return Err(MotionError::Tunneling { step, x, y });
        }
    }
    Ok(())
}
