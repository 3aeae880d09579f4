// src/document/mod.rs
mod document;
mod grid;

pub use self::document::{export_map, import_map, Map, ParseError, DEFAULT_MAP_NAME};
pub use self::grid::{Grid, GridError, MAX_GRID_SIZE};
