//! # Main Window Module
//!
//! Wires the panels together into an eframe application:
//! - A top bar with the map name and the Generate / Clear / Export / Import actions.
//! - A left side panel with the tools and palettes.
//! - A central canvas with the grid.
//! - A bottom status bar for messages.

use std::sync::Arc;

use eframe::egui;
use log::info;
use parking_lot::RwLock;

use super::central_panel::CentralPanel;
use super::dialog::{DialogManager, DialogResult};
use super::file;
use super::menu::MenuBar;
use super::side_panel::SidePanel;
use super::status_bar::StatusBar;
use crate::editor::Editor;

pub struct MainWindow {
    editor: Arc<RwLock<Editor>>,
    menu: MenuBar,
    side_panel: SidePanel,
    central_panel: CentralPanel,
    status_bar: StatusBar,
    dialogs: DialogManager,
}

impl MainWindow {
    pub fn new(editor: Editor) -> Self {
        let editor = Arc::new(RwLock::new(editor));
        Self {
            menu: MenuBar::new(Arc::clone(&editor)),
            side_panel: SidePanel::new(Arc::clone(&editor)),
            central_panel: CentralPanel::new(Arc::clone(&editor)),
            status_bar: StatusBar::new(Arc::clone(&editor)),
            dialogs: DialogManager::new(),
            editor,
        }
    }

    fn handle_dialog_result(&mut self, result: DialogResult) {
        match result {
            DialogResult::Clear(confirmation) => {
                self.editor.write().clear(confirmation);
            }
            DialogResult::Import(path) => file::import_map(&self.editor, &path),
            DialogResult::Cancel => {}
        }
    }
}

impl eframe::App for MainWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(dialog) = self.menu.update(ctx) {
            self.dialogs.show_dialog(dialog);
        }
        self.status_bar.update(ctx, self.central_panel.hovered_cell());
        self.side_panel.update(ctx);
        self.central_panel.update(ctx);

        if let Some(result) = self.dialogs.update(ctx) {
            self.handle_dialog_result(result);
        }
    }
}

/// Runs the editor as a native egui application.
pub fn run_main_window(editor: Editor) {
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1120.0, 900.0)),
        ..Default::default()
    };
    info!("Opening editor window");
    eframe::run_native(
        "Tile Map Editor",
        native_options,
        Box::new(move |_cc| Box::new(MainWindow::new(editor))),
    );
}
