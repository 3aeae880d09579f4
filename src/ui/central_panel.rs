//! Central panel UI module: draws the grid and turns raw pointer input into
//! pointer-down / pointer-enter-cell / pointer-up events for the editor.

use std::sync::Arc;

use eframe::egui::{self, Align2, Color32, Context, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};
use log::error;
use parking_lot::RwLock;

use super::terrain_color;
use crate::document::Grid;
use crate::editor::Editor;

/// The main viewport. Remembers which cell the pointer was over last frame so
/// that entering a new cell can be detected.
pub struct CentralPanel {
    editor: Arc<RwLock<Editor>>,
    cell_size: f32,
    hovered_cell: Option<(usize, usize)>,
}

impl CentralPanel {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        let cell_size = editor.read().config().cell_size;
        Self {
            editor,
            cell_size,
            hovered_cell: None,
        }
    }

    pub fn hovered_cell(&self) -> Option<(usize, usize)> {
        self.hovered_cell
    }

    /// Called each frame to update the central panel.
    pub fn update(&mut self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::from_rgb(0x0f, 0x17, 0x2a)))
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    let n = self.editor.read().grid().size();
                    let side = n as f32 * self.cell_size;
                    let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click_and_drag());
                    let rect = response.rect;

                    self.draw_grid(&painter, rect, self.editor.read().grid());

                    let (pressed, released, pointer) = {
                        let input = ui.input();
                        (
                            input.events.iter().any(|e| {
                                matches!(
                                    e,
                                    egui::Event::PointerButton { button: egui::PointerButton::Primary, pressed: true, .. }
                                )
                            }),
                            input.pointer.primary_released(),
                            input.pointer.hover_pos(),
                        )
                    };
                    let cell = pointer.and_then(|pos| cell_at(rect, pos, n, self.cell_size));

                    let mut editor = self.editor.write();
                    let result = if pressed && response.hovered() {
                        cell.map(|(row, col)| editor.pointer_down(row, col))
                    } else if cell != self.hovered_cell {
                        cell.map(|(row, col)| editor.pointer_enter(row, col))
                    } else {
                        None
                    };
                    if let Some(Err(e)) = result {
                        error!("Paint event rejected: {}", e);
                    }
                    // Release ends the stroke wherever the pointer is.
                    if released {
                        editor.pointer_up();
                    }
                    self.hovered_cell = cell;
                });
            });
    }

    fn draw_grid(&self, painter: &Painter, rect: Rect, grid: &Grid) {
        let gap = Stroke::new(1.0, Color32::from_rgb(0x33, 0x41, 0x55));
        let glyph_font = FontId::monospace(self.cell_size * 0.6);
        for (row, col, cell) in grid.cells() {
            let min = rect.min + Vec2::new(col as f32 * self.cell_size, row as f32 * self.cell_size);
            let tile = Rect::from_min_size(min, Vec2::splat(self.cell_size));
            painter.rect_filled(tile, 0.0, terrain_color(cell.terrain));
            painter.rect_stroke(tile, 0.0, gap);
            if let Some(object) = cell.object {
                painter.text(tile.center(), Align2::CENTER_CENTER, object.glyph(), glyph_font.clone(), Color32::BLACK);
            }
        }
        if let Some((row, col)) = self.hovered_cell {
            let min = rect.min + Vec2::new(col as f32 * self.cell_size, row as f32 * self.cell_size);
            let tile = Rect::from_min_size(min, Vec2::splat(self.cell_size));
            painter.rect_stroke(tile, 0.0, Stroke::new(2.0, Color32::WHITE));
        }
    }
}

/// Maps a screen position to the `(row, col)` under it, if any.
fn cell_at(rect: Rect, pos: Pos2, n: usize, cell_size: f32) -> Option<(usize, usize)> {
    if !rect.contains(pos) {
        return None;
    }
    let offset = pos - rect.min;
    let col = (offset.x / cell_size).floor() as usize;
    let row = (offset.y / cell_size).floor() as usize;
    (row < n && col < n).then_some((row, col))
}
