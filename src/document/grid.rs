// src/document/grid.rs

use thiserror::Error;

use crate::map::{Cell, CellPatch, ObjectTag, TerrainTag};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

/// Largest side length accepted from config files and map documents.
pub const MAX_GRID_SIZE: usize = 1024;

/// Square, row-major grid of cells. The side length is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an `size` x `size` grid of blank (grass, no object) cells.
    ///
    /// `size` is expected to be at most [`MAX_GRID_SIZE`]; config and import
    /// validation enforce that for every size that comes from outside.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size * size],
        }
    }

    /// Builds a grid from rows. Callers must have checked that every row has
    /// `rows.len()` cells.
    pub(crate) fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let size = rows.len();
        let cells = rows.into_iter().flatten().collect::<Vec<_>>();
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Signed variant used by the generator, whose offsets may go negative.
    #[inline]
    pub fn in_bounds_signed(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if self.in_bounds(row, col) {
            Some(&self.cells[self.idx(row, col)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if self.in_bounds(row, col) {
            let i = self.idx(row, col);
            Some(&mut self.cells[i])
        } else {
            None
        }
    }

    /// Applies `patch` to exactly one cell. Returns whether the cell changed.
    pub fn set_cell(&mut self, row: usize, col: usize, patch: CellPatch) -> Result<bool, GridError> {
        let size = self.size;
        let cell = self
            .get_mut(row, col)
            .ok_or(GridError::OutOfBounds { row, col, size })?;
        Ok(cell.apply(patch))
    }

    /// Resets every cell to blank.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = Cell::default());
    }

    /// Iterates `(row, col, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (i / size, i % size, c))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks() panics on a zero chunk size
        self.cells.chunks(self.size.max(1))
    }

    /// Coordinates of the 3x3 block around `(row, col)`, minus the cell itself,
    /// clipped to the grid.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col) = (row as i64, col as i64);
        (-1i64..=1)
            .flat_map(move |dr| (-1i64..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(move |(dr, dc)| (row + dr, col + dc))
            .filter(move |&(r, c)| self.in_bounds_signed(r, c))
            .map(|(r, c)| (r as usize, c as usize))
    }

    pub fn count_terrain(&self, terrain: TerrainTag) -> usize {
        self.cells.iter().filter(|c| c.terrain == terrain).count()
    }

    pub fn count_object(&self, object: ObjectTag) -> usize {
        self.cells.iter().filter(|c| c.object == Some(object)).count()
    }

    pub fn object_count(&self) -> usize {
        self.cells.iter().filter(|c| c.object.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_blank() {
        for n in [0, 1, 7, 20] {
            let grid = Grid::new(n);
            assert_eq!(grid.size(), n);
            assert_eq!(grid.cells().count(), n * n);
            assert!(grid.cells().all(|(_, _, c)| c.is_blank()));
        }
    }

    #[test]
    fn test_set_cell_touches_one_cell() {
        let mut grid = Grid::new(5);
        grid.set_cell(2, 3, CellPatch::terrain(TerrainTag::Water)).unwrap();
        for (row, col, cell) in grid.cells() {
            if (row, col) == (2, 3) {
                assert_eq!(cell.terrain, TerrainTag::Water);
            } else {
                assert!(cell.is_blank());
            }
        }
    }

    #[test]
    fn test_set_cell_out_of_bounds() {
        let mut grid = Grid::new(4);
        let err = grid.set_cell(4, 0, CellPatch::erase()).unwrap_err();
        assert_eq!(err, GridError::OutOfBounds { row: 4, col: 0, size: 4 });
        assert_eq!(grid, Grid::new(4));
    }

    #[test]
    fn test_neighbors_clipped_at_corner() {
        let grid = Grid::new(3);
        let mut corner: Vec<_> = grid.neighbors(0, 0).collect();
        corner.sort();
        assert_eq!(corner, vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(grid.neighbors(1, 1).count(), 8);
    }

    #[test]
    fn test_rows_are_row_major() {
        let mut grid = Grid::new(3);
        grid.set_cell(1, 2, CellPatch::object(ObjectTag::Rock)).unwrap();
        let rows: Vec<&[Cell]> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][2].object, Some(ObjectTag::Rock));
    }

    #[test]
    fn test_reset() {
        let mut grid = Grid::new(2);
        grid.set_cell(0, 0, CellPatch::terrain(TerrainTag::Stone)).unwrap();
        grid.reset();
        assert_eq!(grid, Grid::new(2));
    }
}
