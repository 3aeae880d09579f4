// src/map/mod.rs
pub mod cell;
pub mod object;
pub mod terrain;

pub use cell::{Cell, CellPatch};
pub use object::ObjectTag;
pub use terrain::TerrainTag;
