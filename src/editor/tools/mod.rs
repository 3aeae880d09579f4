// src/editor/tools/mod.rs
mod paint;

pub use paint::{PaintEngine, StrokeState};

use crate::map::{CellPatch, ObjectTag, TerrainTag};

/// The painting tools available in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Terrain,
    Object,
    Eraser,
}

impl Tool {
    /// Returns a user-friendly name for the tool.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Terrain => "Terrain",
            Tool::Object => "Objects",
            Tool::Eraser => "Eraser",
        }
    }

    /// Returns all available tools. Useful for UI elements like toolbars.
    pub fn all() -> &'static [Tool] {
        &[Tool::Terrain, Tool::Object, Tool::Eraser]
    }
}

/// The active tool together with the palette entries it paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSelection {
    pub tool: Tool,
    pub terrain: TerrainTag,
    pub object: ObjectTag,
}

impl Default for ToolSelection {
    fn default() -> Self {
        Self {
            tool: Tool::Terrain,
            terrain: TerrainTag::Grass,
            object: ObjectTag::House,
        }
    }
}

impl ToolSelection {
    /// The single-cell update the active tool performs.
    pub fn patch(&self) -> CellPatch {
        match self.tool {
            Tool::Terrain => CellPatch::terrain(self.terrain),
            Tool::Object => CellPatch::object(self.object),
            Tool::Eraser => CellPatch::erase(),
        }
    }
}
