// src/editor/tools/paint.rs

use log::trace;

use super::ToolSelection;
use crate::document::{Grid, GridError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    Drawing,
}

/// Turns pointer events into single-cell grid mutations.
///
/// A stroke starts on pointer-down, paints every cell the pointer enters while
/// the button is held, and ends on pointer-up wherever the pointer is.
#[derive(Debug, Clone, Default)]
pub struct PaintEngine {
    pub selection: ToolSelection,
    state: StrokeState,
}

impl PaintEngine {
    pub fn new(selection: ToolSelection) -> Self {
        Self {
            selection,
            state: StrokeState::Idle,
        }
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == StrokeState::Drawing
    }

    /// Starts a stroke and paints `(row, col)`. Returns whether the cell changed.
    ///
    /// An out-of-range cell leaves the engine idle.
    pub fn pointer_down(&mut self, grid: &mut Grid, row: usize, col: usize) -> Result<bool, GridError> {
        let changed = self.apply(grid, row, col)?;
        self.state = StrokeState::Drawing;
        Ok(changed)
    }

    /// Paints `(row, col)` if a stroke is in progress; no-op otherwise.
    pub fn pointer_enter(&mut self, grid: &mut Grid, row: usize, col: usize) -> Result<bool, GridError> {
        match self.state {
            StrokeState::Drawing => self.apply(grid, row, col),
            StrokeState::Idle => Ok(false),
        }
    }

    pub fn pointer_up(&mut self) {
        if self.state == StrokeState::Drawing {
            trace!("Stroke finished");
        }
        self.state = StrokeState::Idle;
    }

    fn apply(&self, grid: &mut Grid, row: usize, col: usize) -> Result<bool, GridError> {
        let changed = grid.set_cell(row, col, self.selection.patch())?;
        trace!("{} at ({}, {}), changed: {}", self.selection.tool.name(), row, col, changed);
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::tools::Tool;
    use crate::map::{Cell, ObjectTag, TerrainTag};

    fn engine(tool: Tool, terrain: TerrainTag, object: ObjectTag) -> PaintEngine {
        PaintEngine::new(ToolSelection { tool, terrain, object })
    }

    #[test]
    fn test_water_then_house() {
        let mut grid = Grid::new(20);
        let mut paint = engine(Tool::Terrain, TerrainTag::Water, ObjectTag::House);
        paint.pointer_down(&mut grid, 0, 0).unwrap();
        paint.pointer_up();
        paint.selection.tool = Tool::Object;
        paint.pointer_down(&mut grid, 0, 0).unwrap();
        paint.pointer_up();
        assert_eq!(
            *grid.get(0, 0).unwrap(),
            Cell::new(TerrainTag::Water, Some(ObjectTag::House))
        );
    }

    #[test]
    fn test_drag_paints_entered_cells() {
        let mut grid = Grid::new(5);
        let mut paint = engine(Tool::Terrain, TerrainTag::Forest, ObjectTag::House);
        paint.pointer_down(&mut grid, 1, 1).unwrap();
        assert!(paint.is_drawing());
        paint.pointer_enter(&mut grid, 1, 2).unwrap();
        paint.pointer_enter(&mut grid, 2, 2).unwrap();
        paint.pointer_up();
        paint.pointer_enter(&mut grid, 3, 3).unwrap();

        assert_eq!(grid.count_terrain(TerrainTag::Forest), 3);
        assert_eq!(grid.get(3, 3).unwrap().terrain, TerrainTag::Grass);
    }

    #[test]
    fn test_enter_while_idle_is_noop() {
        let mut grid = Grid::new(4);
        let mut paint = engine(Tool::Eraser, TerrainTag::Grass, ObjectTag::House);
        grid.set_cell(2, 2, crate::map::CellPatch::terrain(TerrainTag::Stone)).unwrap();
        let before = grid.clone();
        assert!(!paint.pointer_enter(&mut grid, 2, 2).unwrap());
        assert_eq!(grid, before);
        assert_eq!(paint.state(), StrokeState::Idle);
    }

    #[test]
    fn test_eraser_always_blanks() {
        let mut grid = Grid::new(3);
        let mut paint = engine(Tool::Terrain, TerrainTag::Mountain, ObjectTag::Castle);
        paint.pointer_down(&mut grid, 0, 0).unwrap();
        paint.selection.tool = Tool::Object;
        paint.pointer_enter(&mut grid, 0, 0).unwrap();
        paint.selection.tool = Tool::Eraser;
        paint.pointer_enter(&mut grid, 0, 0).unwrap();
        paint.pointer_enter(&mut grid, 1, 1).unwrap();
        assert!(grid.get(0, 0).unwrap().is_blank());
        assert!(grid.get(1, 1).unwrap().is_blank());
    }

    #[test]
    fn test_tools_keep_the_other_field() {
        for terrain in TerrainTag::all() {
            for object in ObjectTag::all() {
                let mut grid = Grid::new(1);
                grid.set_cell(0, 0, crate::map::CellPatch::object(ObjectTag::Flag)).unwrap();
                engine(Tool::Terrain, *terrain, *object).pointer_down(&mut grid, 0, 0).unwrap();
                assert_eq!(grid.get(0, 0).unwrap().object, Some(ObjectTag::Flag));

                grid.set_cell(0, 0, crate::map::CellPatch::terrain(TerrainTag::Sand)).unwrap();
                engine(Tool::Object, *terrain, *object).pointer_down(&mut grid, 0, 0).unwrap();
                assert_eq!(grid.get(0, 0).unwrap().terrain, TerrainTag::Sand);
            }
        }
    }

    #[test]
    fn test_repeat_application_is_idempotent() {
        let mut grid = Grid::new(2);
        let mut paint = engine(Tool::Terrain, TerrainTag::Stone, ObjectTag::House);
        assert!(paint.pointer_down(&mut grid, 1, 0).unwrap());
        let after_first = grid.clone();
        assert!(!paint.pointer_enter(&mut grid, 1, 0).unwrap());
        assert_eq!(grid, after_first);
    }

    #[test]
    fn test_out_of_range_does_not_start_stroke() {
        let mut grid = Grid::new(2);
        let mut paint = PaintEngine::default();
        assert!(paint.pointer_down(&mut grid, 2, 0).is_err());
        assert!(!paint.is_drawing());
    }
}
