// src/editor/mod.rs

mod generator;
pub mod tools;

pub use generator::{
    generate, Axis, CountRange, Forest, GenerationReport, GeneratorConfig, InvalidConfig,
    MapGenerator, MountainRange, WaterBody, MAX_EXTENT,
};
pub use tools::{PaintEngine, StrokeState, Tool, ToolSelection};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use thiserror::Error;

use crate::config::{ConfigError, EditorConfig};
use crate::document::{export_map, import_map, Grid, GridError, Map, ParseError};
use crate::map::{ObjectTag, TerrainTag};

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Answer to the "clear the entire map?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    /// The user said no; nothing changed.
    Declined,
}

// --- Main Editor Struct ---

/// One editing session: the map being edited plus the tool state that drives
/// painting. Every session owns its own state; nothing is global.
pub struct Editor {
    map: Map,
    paint: PaintEngine,
    generator: MapGenerator,
    config: EditorConfig,

    /// Last user-facing message, shown in the status bar.
    pub status_message: String,

    /// Flag indicating if the map has changes not yet exported.
    is_dirty: bool,
}

impl Editor {
    /// Creates an editor with a blank map of the configured size.
    pub fn new(config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;
        let generator = MapGenerator::new(config.generator.clone()).map_err(ConfigError::from)?;
        Ok(Self {
            map: Map::new(config.default_map_name.clone(), config.grid_size),
            paint: PaintEngine::default(),
            generator,
            config,
            status_message: "Ready".to_owned(),
            is_dirty: false,
        })
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn grid(&self) -> &Grid {
        &self.map.grid
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn map_name(&self) -> &str {
        &self.map.name
    }

    pub fn set_map_name(&mut self, name: impl Into<String>) {
        self.map.name = name.into();
    }

    // --- Tool selection ---

    pub fn selection(&self) -> ToolSelection {
        self.paint.selection
    }

    pub fn current_tool(&self) -> Tool {
        self.paint.selection.tool
    }

    pub fn set_current_tool(&mut self, tool: Tool) {
        self.paint.selection.tool = tool;
    }

    pub fn set_terrain(&mut self, terrain: TerrainTag) {
        self.paint.selection.terrain = terrain;
    }

    pub fn set_object(&mut self, object: ObjectTag) {
        self.paint.selection.object = object;
    }

    /// Returns a slice of all available tools.
    pub fn available_tools(&self) -> &'static [Tool] {
        Tool::all()
    }

    // --- Painting ---

    pub fn is_drawing(&self) -> bool {
        self.paint.is_drawing()
    }

    pub fn pointer_down(&mut self, row: usize, col: usize) -> Result<(), EditorError> {
        let changed = self.paint.pointer_down(&mut self.map.grid, row, col)?;
        self.is_dirty |= changed;
        Ok(())
    }

    pub fn pointer_enter(&mut self, row: usize, col: usize) -> Result<(), EditorError> {
        let changed = self.paint.pointer_enter(&mut self.map.grid, row, col)?;
        self.is_dirty |= changed;
        Ok(())
    }

    pub fn pointer_up(&mut self) {
        self.paint.pointer_up();
    }

    // --- Whole-map actions ---

    /// Replaces the grid with a generated one. Uses the configured seed, or a
    /// fresh one that is logged so the map can be reproduced.
    pub fn generate(&mut self) -> GenerationReport {
        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        self.generate_with_seed(seed)
    }

    pub fn generate_with_seed(&mut self, seed: u64) -> GenerationReport {
        info!("Generating {0}x{0} map with seed {1}", self.map.size(), seed);
        let report = self.generate_with(&mut Pcg64Mcg::seed_from_u64(seed));
        self.status_message = format!("Generated map (seed {seed})");
        report
    }

    /// Replaces the grid with one generated from `rng`, keeping the map name.
    pub fn generate_with<R: Rng>(&mut self, rng: &mut R) -> GenerationReport {
        let (grid, report) = self.generator.generate_with_report(self.map.size(), rng);
        info!(
            "Generated {} lakes, {} ridges, {} forests, {} objects, spawn {:?}",
            report.water_bodies.len(),
            report.mountain_ranges.len(),
            report.forests.len(),
            report.objects_placed,
            report.spawn
        );
        if report.spawn.is_none() {
            warn!("No free grass cell left; map has no player spawn");
        }
        self.map.grid = grid;
        self.is_dirty = true;
        report
    }

    /// Resets every cell to grass when `confirmation` is accepted.
    pub fn clear(&mut self, confirmation: Confirmation) -> ClearOutcome {
        match confirmation {
            Confirmation::Declined => {
                self.status_message = "Clear cancelled".to_owned();
                ClearOutcome::Declined
            }
            Confirmation::Accepted => {
                self.map.grid = Grid::new(self.map.size());
                self.is_dirty = true;
                self.status_message = "Map cleared".to_owned();
                info!("Cleared map '{}'", self.map.name);
                ClearOutcome::Cleared
            }
        }
    }

    /// Stamps the map with the current instant and encodes it.
    pub fn export_bytes(&mut self) -> Result<Vec<u8>, EditorError> {
        self.map.touch();
        Ok(export_map(&self.map)?)
    }

    /// Writes the map to `<dir>/<file name>` and returns the path.
    pub fn export_to_dir(&mut self, dir: &Path) -> Result<PathBuf, EditorError> {
        let bytes = self.export_bytes()?;
        let path = dir.join(self.map.file_name());
        fs::write(&path, bytes).map_err(|source| EditorError::Io {
            path: path.clone(),
            source,
        })?;
        self.is_dirty = false;
        self.status_message = format!("Exported to {}", path.display());
        info!("Exported map '{}' to {}", self.map.name, path.display());
        Ok(path)
    }

    /// Writes the map into the configured export directory.
    pub fn export(&mut self) -> Result<PathBuf, EditorError> {
        let dir = self.config.export_dir.clone();
        self.export_to_dir(&dir)
    }

    /// Replaces the current map with the decoded document. On error the
    /// current map is kept as it was.
    pub fn import_bytes(&mut self, bytes: &[u8]) -> Result<(), EditorError> {
        let map = import_map(bytes)?;
        info!("Imported map '{}' ({}x{})", map.name, map.size(), map.size());
        self.paint.pointer_up();
        self.map = map;
        self.is_dirty = false;
        self.status_message = format!("Loaded '{}'", self.map.name);
        Ok(())
    }

    pub fn import_from(&mut self, path: &Path) -> Result<(), EditorError> {
        let bytes = fs::read(path).map_err(|source| EditorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.import_bytes(&bytes).map_err(|err| {
            warn!("Rejected {}: {}", path.display(), err);
            err
        })
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.is_dirty
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            map: Map::default(),
            paint: PaintEngine::default(),
            generator: MapGenerator::default(),
            config: EditorConfig::default(),
            status_message: "Ready".to_owned(),
            is_dirty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Cell;

    fn painted_editor() -> Editor {
        let mut editor = Editor::default();
        editor.set_terrain(TerrainTag::Water);
        editor.pointer_down(0, 0).unwrap();
        editor.pointer_enter(0, 1).unwrap();
        editor.pointer_up();
        editor
    }

    #[test]
    fn test_new_editor_is_blank() {
        let editor = Editor::new(EditorConfig::default()).unwrap();
        assert_eq!(editor.map_name(), "My Game Map");
        assert_eq!(editor.grid().size(), 20);
        assert!(editor.grid().cells().all(|(_, _, c)| c.is_blank()));
        assert!(!editor.has_unsaved_changes());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = EditorConfig {
            grid_size: 0,
            ..EditorConfig::default()
        };
        assert!(matches!(Editor::new(config), Err(EditorError::Config(_))));
    }

    #[test]
    fn test_painting_marks_dirty() {
        let editor = painted_editor();
        assert!(editor.has_unsaved_changes());
        assert_eq!(editor.grid().count_terrain(TerrainTag::Water), 2);
        assert!(!editor.is_drawing());
    }

    #[test]
    fn test_new_rejects_oversized_map() {
        let config = EditorConfig {
            grid_size: 1 << 32,
            ..EditorConfig::default()
        };
        assert!(matches!(Editor::new(config), Err(EditorError::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_available_tools() {
        let editor = Editor::default();
        assert_eq!(editor.available_tools(), &[Tool::Terrain, Tool::Object, Tool::Eraser]);
    }

    #[test]
    fn test_pointer_out_of_range() {
        let mut editor = Editor::default();
        let err = editor.pointer_down(20, 3).unwrap_err();
        assert!(matches!(err, EditorError::Grid(GridError::OutOfBounds { .. })));
        assert!(!editor.has_unsaved_changes());
    }

    #[test]
    fn test_generate_with_seed_is_reproducible() {
        let mut a = Editor::default();
        let mut b = Editor::default();
        a.set_map_name("Keep me");
        a.generate_with_seed(11);
        b.generate_with_seed(11);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.map_name(), "Keep me");
        assert!(a.has_unsaved_changes());
    }

    #[test]
    fn test_configured_seed_is_used() {
        let config = EditorConfig {
            seed: Some(5),
            ..EditorConfig::default()
        };
        let mut a = Editor::new(config.clone()).unwrap();
        let mut b = Editor::new(config).unwrap();
        a.generate();
        b.generate();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_clear_declined_keeps_map() {
        let mut editor = painted_editor();
        let before = editor.grid().clone();
        assert_eq!(editor.clear(Confirmation::Declined), ClearOutcome::Declined);
        assert_eq!(editor.grid(), &before);
    }

    #[test]
    fn test_clear_accepted_blanks_map() {
        let mut editor = painted_editor();
        assert_eq!(editor.clear(Confirmation::Accepted), ClearOutcome::Cleared);
        assert_eq!(editor.grid(), &Grid::new(20));
    }

    #[test]
    fn test_import_failure_keeps_map() {
        let mut editor = painted_editor();
        let before = editor.map().clone();
        let err = editor
            .import_bytes(br#"{"name":"x","size":3,"grid":[],"timestamp":"2024-01-01T00:00:00Z"}"#)
            .unwrap_err();
        assert!(matches!(err, EditorError::Parse(ParseError::SizeMismatch { .. })));
        assert_eq!(editor.map(), &before);
        assert!(editor.has_unsaved_changes());
    }

    #[test]
    fn test_export_import_between_sessions() {
        let mut source = painted_editor();
        source.set_map_name("Round Trip");
        source.set_current_tool(Tool::Object);
        source.set_object(ObjectTag::Castle);
        source.pointer_down(5, 5).unwrap();
        source.pointer_up();

        let dir = tempfile::tempdir().unwrap();
        let path = source.export_to_dir(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("Round_Trip.json"));
        assert!(!source.has_unsaved_changes());

        let mut target = Editor::default();
        target.import_from(&path).unwrap();
        assert_eq!(target.map(), source.map());
        assert_eq!(
            *target.grid().get(5, 5).unwrap(),
            Cell::new(TerrainTag::Grass, Some(ObjectTag::Castle))
        );
    }

    #[test]
    fn test_import_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = Editor::default();
        let err = editor.import_from(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, EditorError::Io { .. }));
    }

    #[test]
    fn test_import_ends_stroke() {
        let mut source = Editor::default();
        let bytes = source.export_bytes().unwrap();

        let mut editor = Editor::default();
        editor.pointer_down(1, 1).unwrap();
        editor.import_bytes(&bytes).unwrap();
        assert!(!editor.is_drawing());
    }
}
