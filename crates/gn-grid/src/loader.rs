//! CSV grid loader.
//!
//! # CSV format
//!
//! No header row.  One record per grid row, one tile-kind tag per field;
//! fields are trimmed.
//!
//! ```csv
//! hull,hull,hull,hull
//! hull,interior,interior,hull
//! hull,floor,floor,hull
//! ```
//!
//! Records of different lengths are reported as [`GridError::Ragged`] with
//! the offending row index rather than as a CSV error.

use std::io::Read;
use std::path::Path;

use crate::{GridError, GridResult, TileGrid};

/// Load a [`TileGrid`] from a CSV file.
pub fn load_grid_csv(path: &Path) -> GridResult<TileGrid> {
    let file = std::fs::File::open(path)?;
    load_grid_reader(file)
}

/// Like [`load_grid_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` or a byte slice) or for
/// grids embedded in a larger document.
pub fn load_grid_reader<R: Read>(reader: R) -> GridResult<TileGrid> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| GridError::Parse(e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    TileGrid::from_rows(&rows)
}
