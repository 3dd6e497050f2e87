//! Engine configuration.
//!
//! Typically loaded from a JSON file by the application and passed to the
//! navigation engine.  Every field has a default, so a partial file (or no
//! file at all) is valid.
//!
//! # Units
//!
//! Velocities are in cells per simulation step; `gravity_accel` is in cells
//! per step².  One simulation step is one unit of Jump cost.

use crate::{CoreError, CoreResult};

// ── JumpSpec ──────────────────────────────────────────────────────────────────

/// One jump variant: the launch velocity expressed in the agent's local frame.
///
/// A jump with `lateral > 0` is enumerated twice per standing state (once in
/// each walking direction); `lateral == 0` is a straight jump "up", enumerated
/// once.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpSpec {
    /// Speed along the walking axis.  Must be `>= 0`.
    pub lateral: f32,
    /// Initial speed against gravity.  Must be `> 0`.
    pub launch: f32,
}

impl JumpSpec {
    pub const fn new(lateral: f32, launch: f32) -> Self {
        Self { lateral, launch }
    }
}

// ── StatsConfig ───────────────────────────────────────────────────────────────

/// Controls the sampled part of navigation statistics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatsConfig {
    /// Maximum number of start states explored when sampling.  Grids with
    /// fewer valid states are explored exhaustively.
    pub sample_limit: usize,
    /// Seed for choosing the sample.  The same seed always picks the same
    /// start states.
    pub seed: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self { sample_limit: 64, seed: 42 }
    }
}

// ── NavConfig ─────────────────────────────────────────────────────────────────

/// Top-level navigation engine configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Acceleration along the gravity vector applied after every step.
    pub gravity_accel: f32,

    /// Cap on the speed along the gravity vector.
    pub terminal_velocity: f32,

    /// Jump simulations that have not touched anything after this many steps
    /// are discarded.
    pub max_jump_steps: u32,

    /// Jump variants tried from every standing state, in this order.
    pub jumps: Vec<JumpSpec>,

    pub stats: StatsConfig,
}

impl Default for NavConfig {
    /// A short hop that clears a one-cell gap, a longer leap, and a straight
    /// vault for reaching ceilings.
    fn default() -> Self {
        Self {
            gravity_accel:     0.25,
            terminal_velocity: 1.0,
            max_jump_steps:    64,
            jumps: vec![
                JumpSpec::new(0.35, 0.5),
                JumpSpec::new(0.75, 0.75),
                JumpSpec::new(0.0, 1.25),
            ],
            stats: StatsConfig::default(),
        }
    }
}

impl NavConfig {
    /// Configuration with no jump variants (walks and falls only).
    pub fn without_jumps() -> Self {
        Self { jumps: Vec::new(), ..Self::default() }
    }

    /// Reject values that would make jump simulation meaningless or
    /// non-terminating.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.gravity_accel.is_finite() && self.gravity_accel > 0.0) {
            return Err(CoreError::Config(format!(
                "gravity_accel must be positive, got {}",
                self.gravity_accel
            )));
        }
        if !(self.terminal_velocity.is_finite() && self.terminal_velocity > 0.0) {
            return Err(CoreError::Config(format!(
                "terminal_velocity must be positive, got {}",
                self.terminal_velocity
            )));
        }
        if self.max_jump_steps == 0 {
            return Err(CoreError::Config("max_jump_steps must be at least 1".into()));
        }
        for (i, jump) in self.jumps.iter().enumerate() {
            if !(jump.lateral.is_finite() && jump.lateral >= 0.0) {
                return Err(CoreError::Config(format!(
                    "jumps[{i}].lateral must be >= 0, got {}",
                    jump.lateral
                )));
            }
            if !(jump.launch.is_finite() && jump.launch > 0.0) {
                return Err(CoreError::Config(format!(
                    "jumps[{i}].launch must be positive, got {}",
                    jump.launch
                )));
            }
        }
        Ok(())
    }
}
