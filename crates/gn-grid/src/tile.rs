//! `TileGrid` — the authored tile layout.
//!
//! Tags are interned once at construction: each distinct tag string gets a
//! [`TileKind`] index into `palette`, and the grid stores one `TileKind` per
//! cell in row-major order.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};

use gn_core::TileKind;

use crate::nav_grid::check_size;
use crate::{GridError, GridResult};

/// A rectangular grid of tile-kind tags.
///
/// Immutable once built.  Do not construct directly; use
/// [`from_rows`](Self::from_rows), [`from_ascii`](Self::from_ascii), or the
/// CSV [`loader`](crate::loader).
#[derive(Clone, Debug)]
pub struct TileGrid {
    width:   usize,
    height:  usize,
    cells:   Vec<TileKind>,
    palette: Vec<String>,
}

impl TileGrid {
    /// Build from rows of string tags (`rows[y][x]`).
    ///
    /// # Errors
    ///
    /// [`GridError::Empty`] if there are no rows or the first row is empty;
    /// [`GridError::TooLarge`] past [`MAX_CELLS`](crate::nav_grid::MAX_CELLS);
    /// [`GridError::Ragged`] if any row's length differs from the first;
    /// [`GridError::TooManyKinds`] once the distinct tags outgrow `TileKind`.
    pub fn from_rows<R, S>(rows: &[R]) -> GridResult<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let height = rows.len();
        let width  = rows.first().map_or(0, |r| r.as_ref().len());
        check_size(width, height)?;

        let mut interned: FxHashMap<String, TileKind> = FxHashMap::default();
        let mut palette: Vec<String> = Vec::new();
        let mut cells:   Vec<TileKind> = Vec::with_capacity(width * height);

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged { row: y, expected: width, got: row.len() });
            }
            for tag in row {
                let tag = tag.as_ref();
                let kind = match interned.get(tag) {
                    Some(&k) => k,
                    None => {
                        let k = TileKind::try_from(palette.len())
                            .ok()
                            .filter(|k| *k != TileKind::INVALID)
                            .ok_or(GridError::TooManyKinds(palette.len() + 1))?;
                        palette.push(tag.to_string());
                        interned.insert(tag.to_string(), k);
                        k
                    }
                };
                cells.push(kind);
            }
        }

        Ok(Self { width, height, cells, palette })
    }

    /// Build from text: one row per non-blank line, one tag per character.
    ///
    /// Leading and trailing whitespace on each line is ignored, so the text
    /// can be written as an indented string literal.  Spaces are therefore not
    /// usable as tags; use `.` or similar for open cells.
    ///
    /// ```
    /// use gn_grid::TileGrid;
    ///
    /// let grid = TileGrid::from_ascii("
    ///     ....
    ///     #####
    /// ").unwrap();
    /// assert_eq!((grid.width(), grid.height()), (4, 2));
    /// assert_eq!(grid.tag_at(0, 1), Some("#"));
    /// ```
    pub fn from_ascii(text: &str) -> GridResult<Self> {
        let rows: Vec<Vec<String>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(String::from).collect())
            .collect();
        Self::from_rows(&rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Distinct tags in first-seen order, indexed by `TileKind`.
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Tile kind at `(x, y)`, or `None` out of bounds.
    #[inline]
    pub fn kind_at(&self, x: i32, y: i32) -> Option<TileKind> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    /// Tag string at `(x, y)`, or `None` out of bounds.
    pub fn tag_at(&self, x: i32, y: i32) -> Option<&str> {
        self.kind_at(x, y).map(|k| self.palette[k.index()].as_str())
    }

    /// Row-major cell kinds.
    pub fn cells(&self) -> &[TileKind] {
        &self.cells
    }

    /// Content hash over dimensions and tag strings.  Two grids with the same
    /// layout hash identically regardless of the order tags were interned.
    pub fn fingerprint(&self) -> u64 {
        let mut h = FxHasher::default();
        self.width.hash(&mut h);
        self.height.hash(&mut h);
        for kind in &self.cells {
            self.palette[kind.index()].hash(&mut h);
        }
        h.finish()
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }
}
