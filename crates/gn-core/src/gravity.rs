//! The four gravity directions.
//!
//! Gravity is part of an agent's identity in the navigation graph: the same
//! cell reached standing on a floor and standing on a wall are two different
//! states.  Each variant maps to a fixed unit vector, so movement code never
//! dispatches on string tags.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// The cardinal direction currently treated as "down" for an agent.
///
/// | Variant | Vector    | Lateral (walking) axis |
/// |---------|-----------|------------------------|
/// | `Down`  | `(0, 1)`  | `(1, 0)`               |
/// | `Up`    | `(0, -1)` | `(1, 0)`               |
/// | `Left`  | `(-1, 0)` | `(0, 1)`               |
/// | `Right` | `(1, 0)`  | `(0, 1)`               |
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gravity {
    #[default]
    Down,
    Up,
    Left,
    Right,
}

impl Gravity {
    /// All variants in canonical order (also the `StateId` slot order).
    pub const ALL: [Gravity; 4] = [Gravity::Down, Gravity::Up, Gravity::Left, Gravity::Right];

    /// Slot of this variant within a cell's four states.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index).  Only the low two bits are used.
    #[inline]
    pub fn from_index(i: usize) -> Gravity {
        Self::ALL[i & 3]
    }

    /// Unit vector pointing "down" for this gravity.
    #[inline]
    pub fn vector(self) -> (i32, i32) {
        match self {
            Gravity::Down  => (0, 1),
            Gravity::Up    => (0, -1),
            Gravity::Left  => (-1, 0),
            Gravity::Right => (1, 0),
        }
    }

    /// Positive unit vector of the axis the agent walks along.
    #[inline]
    pub fn lateral(self) -> (i32, i32) {
        match self {
            Gravity::Down | Gravity::Up    => (1, 0),
            Gravity::Left | Gravity::Right => (0, 1),
        }
    }

    /// The gravity pointing the opposite way.
    pub fn opposite(self) -> Gravity {
        match self {
            Gravity::Down  => Gravity::Up,
            Gravity::Up    => Gravity::Down,
            Gravity::Left  => Gravity::Right,
            Gravity::Right => Gravity::Left,
        }
    }

    /// Gravity whose vector is exactly `(dx, dy)`, if it is a unit axis vector.
    pub fn from_vector(dx: i32, dy: i32) -> Option<Gravity> {
        match (dx, dy) {
            (0, 1)  => Some(Gravity::Down),
            (0, -1) => Some(Gravity::Up),
            (-1, 0) => Some(Gravity::Left),
            (1, 0)  => Some(Gravity::Right),
            _       => None,
        }
    }

    /// Name of the surface an agent with this gravity stands on.
    pub fn surface_name(self) -> &'static str {
        match self {
            Gravity::Down  => "floor",
            Gravity::Up    => "ceiling",
            Gravity::Left  => "left wall",
            Gravity::Right => "right wall",
        }
    }

    /// The string tag used at the external interface.
    pub fn tag(self) -> &'static str {
        match self {
            Gravity::Down  => "down",
            Gravity::Up    => "up",
            Gravity::Left  => "left",
            Gravity::Right => "right",
        }
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Gravity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "down"  => Ok(Gravity::Down),
            "up"    => Ok(Gravity::Up),
            "left"  => Ok(Gravity::Left),
            "right" => Ok(Gravity::Right),
            _       => Err(CoreError::UnknownGravity(s.to_string())),
        }
    }
}
