// src/ui/dialog.rs

use std::path::PathBuf;

use eframe::egui::{self, Context};

use crate::editor::Confirmation;

/// The types of dialogs you may show.
#[derive(Debug, PartialEq, Eq)]
pub enum Dialog {
    ConfirmClear,
    ImportPath { path: String },
}

/// The possible outcomes when a dialog is closed.
#[derive(Debug, PartialEq, Eq)]
pub enum DialogResult {
    Clear(Confirmation),
    Import(PathBuf),
    Cancel,
}

/// Manages the currently active dialog (if any).
#[derive(Default)]
pub struct DialogManager {
    active_dialog: Option<Dialog>,
}

impl DialogManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a dialog by setting it as active.
    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.active_dialog = Some(dialog);
    }

    /// Call this method on every UI frame to render the active dialog (if any).
    /// When the user responds, the method returns `Some(DialogResult)` and clears the active dialog.
    pub fn update(&mut self, ctx: &Context) -> Option<DialogResult> {
        let mut result = None;
        match &mut self.active_dialog {
            None => return None,
            Some(Dialog::ConfirmClear) => {
                modal("Clear Map").show(ctx, |ui| {
                    ui.label("Clear entire map?");
                    ui.horizontal(|ui| {
                        if ui.button("Clear").clicked() {
                            result = Some(DialogResult::Clear(Confirmation::Accepted));
                        }
                        if ui.button("Cancel").clicked() {
                            result = Some(DialogResult::Clear(Confirmation::Declined));
                        }
                    });
                });
            }
            Some(Dialog::ImportPath { path }) => {
                modal("Import Map").show(ctx, |ui| {
                    ui.label("Map file (.json):");
                    ui.text_edit_singleline(&mut *path);
                    ui.horizontal(|ui| {
                        let has_path = !path.trim().is_empty();
                        if ui.add_enabled(has_path, egui::Button::new("Import")).clicked() {
                            result = Some(DialogResult::Import(PathBuf::from(path.trim())));
                        }
                        if ui.button("Cancel").clicked() {
                            result = Some(DialogResult::Cancel);
                        }
                    });
                });
            }
        }
        if result.is_some() {
            self.active_dialog = None;
        }
        result
    }
}

fn modal(title: &str) -> egui::Window<'static> {
    egui::Window::new(title.to_owned())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}
