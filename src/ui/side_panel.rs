// src/ui/side_panel.rs

use std::sync::Arc;

use eframe::egui::{self, Context, Sense, Ui};
use parking_lot::RwLock;

use super::terrain_color;
use crate::editor::{Editor, Tool};
use crate::map::{ObjectTag, TerrainTag};

/// Manages the left-side panel with the tool buttons and the palette of the
/// active tool.
pub struct SidePanel {
    editor: Arc<RwLock<Editor>>,
}

impl SidePanel {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor }
    }

    /// Called each frame.
    pub fn update(&mut self, ctx: &Context) {
        egui::SidePanel::left("tools_panel")
            .default_width(200.0)
            .resizable(false)
            .show(ctx, |ui| {
                self.show_tools(ui);
                ui.separator();
                let tool = self.editor.read().current_tool();
                match tool {
                    Tool::Terrain => self.show_terrain_palette(ui),
                    Tool::Object => self.show_object_palette(ui),
                    Tool::Eraser => {
                        ui.label("Resets cells to grass.");
                    }
                }
            });
    }

    fn show_tools(&self, ui: &mut Ui) {
        ui.heading("Tools");
        let (current, tools) = {
            let editor = self.editor.read();
            (editor.current_tool(), editor.available_tools())
        };
        for tool in tools {
            if ui.selectable_label(current == *tool, tool.name()).clicked() {
                self.editor.write().set_current_tool(*tool);
            }
        }
    }

    fn show_terrain_palette(&self, ui: &mut Ui) {
        ui.label("Terrain Types");
        let selected = self.editor.read().selection().terrain;
        egui::Grid::new("terrain_palette").num_columns(2).show(ui, |ui| {
            for (i, terrain) in TerrainTag::all().iter().enumerate() {
                ui.horizontal(|ui| {
                    let (swatch, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, terrain_color(*terrain));
                    if ui.selectable_label(selected == *terrain, terrain.display_name()).clicked() {
                        self.editor.write().set_terrain(*terrain);
                    }
                });
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
    }

    fn show_object_palette(&self, ui: &mut Ui) {
        ui.label("Objects");
        let selected = self.editor.read().selection().object;
        egui::Grid::new("object_palette").num_columns(2).show(ui, |ui| {
            for (i, object) in ObjectTag::all().iter().enumerate() {
                let label = format!("{} {}", object.glyph(), object.display_name());
                if ui.selectable_label(selected == *object, label).clicked() {
                    self.editor.write().set_object(*object);
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
    }
}
