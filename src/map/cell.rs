// src/map/cell.rs
use serde::{Deserialize, Serialize};

use super::{ObjectTag, TerrainTag};

/// A single grid cell: one terrain tag and at most one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub terrain: TerrainTag,
    // Absent objects are written as `null`; a missing key reads as absent.
    #[serde(default)]
    pub object: Option<ObjectTag>,
}

impl Cell {
    pub fn new(terrain: TerrainTag, object: Option<ObjectTag>) -> Self {
        Self { terrain, object }
    }

    /// True for the `{grass, no object}` state a fresh or erased cell has.
    pub fn is_blank(&self) -> bool {
        self.terrain == TerrainTag::Grass && self.object.is_none()
    }

    /// Applies `patch` in place. Returns true if anything changed.
    pub fn apply(&mut self, patch: CellPatch) -> bool {
        let before = *self;
        if let Some(terrain) = patch.terrain {
            self.terrain = terrain;
        }
        if let Some(object) = patch.object {
            self.object = object;
        }
        *self != before
    }
}

/// A partial update of a [`Cell`]. `None` fields are left untouched.
///
/// `object: Some(None)` clears the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellPatch {
    pub terrain: Option<TerrainTag>,
    pub object: Option<Option<ObjectTag>>,
}

impl CellPatch {
    pub fn terrain(terrain: TerrainTag) -> Self {
        Self { terrain: Some(terrain), object: None }
    }

    pub fn object(object: ObjectTag) -> Self {
        Self { terrain: None, object: Some(Some(object)) }
    }

    /// Resets a cell to `{grass, no object}`.
    pub fn erase() -> Self {
        Self { terrain: Some(TerrainTag::Grass), object: Some(None) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_is_blank() {
        assert!(Cell::default().is_blank());
    }

    #[test]
    fn test_terrain_patch_keeps_object() {
        let mut cell = Cell::new(TerrainTag::Sand, Some(ObjectTag::Chest));
        assert!(cell.apply(CellPatch::terrain(TerrainTag::Water)));
        assert_eq!(cell, Cell::new(TerrainTag::Water, Some(ObjectTag::Chest)));
    }

    #[test]
    fn test_object_patch_keeps_terrain() {
        let mut cell = Cell::new(TerrainTag::Forest, None);
        assert!(cell.apply(CellPatch::object(ObjectTag::Tree)));
        assert_eq!(cell, Cell::new(TerrainTag::Forest, Some(ObjectTag::Tree)));
    }

    #[test]
    fn test_patch_is_idempotent() {
        let mut cell = Cell::default();
        assert!(cell.apply(CellPatch::object(ObjectTag::Flag)));
        assert!(!cell.apply(CellPatch::object(ObjectTag::Flag)));
    }

    #[test]
    fn test_missing_object_key_reads_as_absent() {
        let cell: Cell = serde_json::from_str(r#"{"terrain":"stone"}"#).unwrap();
        assert_eq!(cell, Cell::new(TerrainTag::Stone, None));
    }

    #[test]
    fn test_absent_object_written_as_null() {
        let json = serde_json::to_string(&Cell::default()).unwrap();
        assert_eq!(json, r#"{"terrain":"grass","object":null}"#);
    }
}
