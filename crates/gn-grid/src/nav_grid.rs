//! `NavGrid` — the engine's read-only view of a grid.
//!
//! # Data layout
//!
//! Solidity is resolved once at construction into a row-major `Vec<bool>`,
//! so the hot `is_solid` query in move generation is a bounds check plus one
//! indexed load.  States are indexed densely:
//!
//! ```text
//! StateId = (y * width + x) * 4 + gravity.index()
//! ```
//!
//! which lets search code keep per-state arrays (`dist`, `closed`) as plain
//! `Vec`s of length `state_count()`.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use gn_core::{Gravity, State, StateId};

use crate::{GridError, GridResult, SolidSet, TileGrid};

/// Largest grid, in cells, whose four states per cell fit a `u32` `StateId`.
pub const MAX_CELLS: usize = 1 << 30;

/// Reject zero-sized grids and grids too large to index.
pub(crate) fn check_size(width: usize, height: usize) -> GridResult<()> {
    if width == 0 || height == 0 {
        return Err(GridError::Empty { width, height });
    }
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        _ => Err(GridError::TooLarge { width, height }),
    }
}

// ── GridKey ───────────────────────────────────────────────────────────────────

/// Identity of a `(TileGrid, SolidSet)` pair for memoization.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct GridKey {
    /// [`TileGrid::fingerprint`] (or a hash of the raw mask).
    pub tiles: u64,
    /// [`SolidSet::fingerprint`] (zero for mask-built grids).
    pub solids: u64,
}

// ── NavGrid ───────────────────────────────────────────────────────────────────

/// Rectangular solidity mask.  Exposes no mutation methods.
#[derive(Clone, Debug)]
pub struct NavGrid {
    width:  usize,
    height: usize,
    solid:  Vec<bool>,
    key:    GridKey,
}

impl NavGrid {
    /// Resolve every cell of `tiles` against `solids`.
    pub fn new(tiles: &TileGrid, solids: &SolidSet) -> Self {
        // Classify each palette entry once, then map cells through it.
        let kind_solid: Vec<bool> = tiles.palette().iter().map(|t| solids.contains(t)).collect();
        let solid = tiles.cells().iter().map(|k| kind_solid[k.index()]).collect();
        Self {
            width:  tiles.width(),
            height: tiles.height(),
            solid,
            key: GridKey { tiles: tiles.fingerprint(), solids: solids.fingerprint() },
        }
    }

    /// Build directly from a row-major solidity mask.
    ///
    /// # Errors
    ///
    /// [`GridError::Empty`] for zero dimensions, [`GridError::TooLarge`] past
    /// [`MAX_CELLS`], [`GridError::Parse`] if the mask length is not
    /// `width * height`.
    pub fn from_mask(width: usize, height: usize, solid: Vec<bool>) -> GridResult<Self> {
        check_size(width, height)?;
        if solid.len() != width * height {
            return Err(GridError::Parse(format!(
                "mask has {} cells, expected {width}x{height}",
                solid.len()
            )));
        }
        let mut h = FxHasher::default();
        width.hash(&mut h);
        height.hash(&mut h);
        solid.hash(&mut h);
        Ok(Self {
            width,
            height,
            solid,
            key: GridKey { tiles: h.finish(), solids: 0 },
        })
    }

    /// Convenience for fixtures: ASCII layout where any character listed in
    /// `solid_chars` is solid.
    pub fn from_ascii(text: &str, solid_chars: &str) -> GridResult<Self> {
        let tiles  = TileGrid::from_ascii(text)?;
        let solids = SolidSet::new(solid_chars.chars().map(String::from));
        Ok(Self::new(&tiles, &solids))
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Upper bound on the number of navigation states: four per cell.
    pub fn state_count(&self) -> usize {
        self.cell_count() * 4
    }

    pub fn key(&self) -> GridKey {
        self.key
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// `true` if `(x, y)` is inside the grid and solid.  Out-of-bounds cells
    /// are never solid.
    #[inline]
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.solid[y as usize * self.width + x as usize]
    }

    /// `true` if `(x, y)` is inside the grid and not solid.
    #[inline]
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && !self.solid[y as usize * self.width + x as usize]
    }

    // ── State indexing ────────────────────────────────────────────────────

    /// Dense index of `state`, or `None` if its cell is outside the grid.
    ///
    /// Construction caps grids at [`MAX_CELLS`], so the index fits a `u32`.
    #[inline]
    pub fn state_id(&self, state: State) -> Option<StateId> {
        if !self.in_bounds(state.x, state.y) {
            return None;
        }
        let cell = state.y as usize * self.width + state.x as usize;
        Some(StateId((cell * 4 + state.gravity.index()) as u32))
    }

    /// Inverse of [`state_id`](Self::state_id).
    #[inline]
    pub fn state_of(&self, id: StateId) -> State {
        let cell = id.index() / 4;
        State {
            x:       (cell % self.width) as i32,
            y:       (cell / self.width) as i32,
            gravity: Gravity::from_index(id.index()),
        }
    }
}
