//! # Utility Module
//!
//! Miscellaneous helpers shared by the editor, the CLI and the GUI.

use crate::document::Grid;

/// Turns a map name into a file stem by collapsing every whitespace run into
/// a single `_`.
///
/// # Examples
///
/// ```
/// use tile_ed::utils::util::file_stem_for;
///
/// assert_eq!(file_stem_for("My Game Map"), "My_Game_Map");
/// assert_eq!(file_stem_for("a \t b"), "a_b");
/// ```
pub fn file_stem_for(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else {
            stem.push(ch);
            in_space = false;
        }
    }
    stem
}

/// Renders a grid as text, one line per row. A cell shows its object glyph
/// if it has one, its terrain symbol otherwise.
pub fn render_ascii(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.size() * (grid.size() + 1));
    for row in grid.rows() {
        for cell in row {
            out.push(cell.object.map_or(cell.terrain.symbol(), |o| o.glyph()));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{CellPatch, ObjectTag, TerrainTag};

    #[test]
    fn test_file_stem_leading_and_trailing_space() {
        assert_eq!(file_stem_for(" map "), "_map_");
    }

    #[test]
    fn test_file_stem_without_space() {
        assert_eq!(file_stem_for("island"), "island");
    }

    #[test]
    fn test_render_ascii() {
        let mut grid = Grid::new(2);
        grid.set_cell(0, 1, CellPatch::terrain(TerrainTag::Water)).unwrap();
        grid.set_cell(1, 0, CellPatch::object(ObjectTag::Player)).unwrap();
        assert_eq!(render_ascii(&grid), ".~\n@.\n");
    }
}
