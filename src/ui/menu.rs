// src/ui/menu.rs

use std::sync::Arc;

use eframe::egui::{self, Context};
use parking_lot::RwLock;

use super::dialog::Dialog;
use super::file;
use crate::editor::Editor;

/// Top bar: map name plus the whole-map actions.
pub struct MenuBar {
    editor: Arc<RwLock<Editor>>,
}

impl MenuBar {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor }
    }

    /// Returns a dialog to open when an action needs user input first.
    pub fn update(&mut self, ctx: &Context) -> Option<Dialog> {
        let mut dialog = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut name = self.editor.read().map_name().to_owned();
                if ui.text_edit_singleline(&mut name).changed() {
                    self.editor.write().set_map_name(name);
                }

                ui.separator();
                if ui.button("Generate").clicked() {
                    self.editor.write().generate();
                }
                if ui.button("Clear").clicked() {
                    dialog = Some(Dialog::ConfirmClear);
                }
                if ui.button("Export").clicked() {
                    file::export_map(&self.editor);
                }
                if ui.button("Import").clicked() {
                    dialog = Some(Dialog::ImportPath {
                        path: String::new(),
                    });
                }
            });
        });
        dialog
    }
}
