// src/document/document.rs

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::grid::{Grid, MAX_GRID_SIZE};
use crate::map::Cell;
use crate::utils::util::file_stem_for;

pub const DEFAULT_MAP_NAME: &str = "My Game Map";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed map document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot encode map: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("map size {0} is outside 1..={max}", max = MAX_GRID_SIZE)]
    SizeOutOfRange(usize),
    #[error("map declares size {declared} but has {rows} rows")]
    SizeMismatch { declared: usize, rows: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength { row: usize, expected: usize, found: usize },
}

/// The externally visible unit: a named grid with its creation instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub name: String,
    pub grid: Grid,
    pub timestamp: DateTime<Utc>,
}

impl Map {
    /// Creates a blank map stamped with the current instant.
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self::from_grid(name, Grid::new(size))
    }

    pub fn from_grid(name: impl Into<String>, grid: Grid) -> Self {
        Self {
            name: name.into(),
            grid,
            timestamp: Utc::now(),
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Export file name: whitespace runs in the name become `_`.
    pub fn file_name(&self) -> String {
        format!("{}.json", file_stem_for(&self.name))
    }

    /// Sets the timestamp to now. Called right before exporting.
    pub fn touch(&mut self) {
        self.timestamp = Utc::now();
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_NAME, 20)
    }
}

// --- File format ---

#[derive(Serialize)]
struct MapFileOut<'a> {
    name: &'a str,
    size: usize,
    grid: Vec<&'a [Cell]>,
    timestamp: &'a DateTime<Utc>,
}

// Unknown fields are ignored so newer files still load.
#[derive(Deserialize)]
struct MapFileIn {
    name: String,
    size: usize,
    grid: Vec<Vec<Cell>>,
    timestamp: DateTime<Utc>,
}

/// Encodes `map` as a pretty-printed JSON document.
pub fn export_map(map: &Map) -> Result<Vec<u8>, ParseError> {
    let file = MapFileOut {
        name: &map.name,
        size: map.size(),
        grid: map.grid.rows().collect(),
        timestamp: &map.timestamp,
    };
    let bytes = serde_json::to_vec_pretty(&file).map_err(ParseError::Encode)?;
    debug!("Encoded map '{}' ({} bytes)", map.name, bytes.len());
    Ok(bytes)
}

/// Decodes a document written by [`export_map`].
///
/// The returned map is built from scratch, so a failure never leaves a
/// half-imported grid behind.
pub fn import_map(bytes: &[u8]) -> Result<Map, ParseError> {
    let file: MapFileIn = serde_json::from_slice(bytes)?;
    if file.size == 0 || file.size > MAX_GRID_SIZE {
        return Err(ParseError::SizeOutOfRange(file.size));
    }
    if file.grid.len() != file.size {
        return Err(ParseError::SizeMismatch {
            declared: file.size,
            rows: file.grid.len(),
        });
    }
    if let Some((row, cells)) = file
        .grid
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != file.size)
    {
        return Err(ParseError::RowLength {
            row,
            expected: file.size,
            found: cells.len(),
        });
    }
    debug!("Decoded map '{}' ({}x{})", file.name, file.size, file.size);
    Ok(Map {
        name: file.name,
        grid: Grid::from_rows(file.grid),
        timestamp: file.timestamp,
    })
}
