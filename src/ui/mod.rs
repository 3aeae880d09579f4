// src/ui/mod.rs
//! Desktop presentation. Everything here reads the [`Editor`](crate::editor::Editor)
//! and forwards user intent to it; no map logic lives in this module.
pub mod central_panel;
pub mod dialog;
pub mod file;
pub mod main_window;
pub mod menu;
pub mod side_panel;
pub mod status_bar;

pub use dialog::DialogManager;
pub use main_window::run_main_window;

use eframe::egui::Color32;

use crate::map::TerrainTag;

/// Fill colour of a terrain tile.
pub fn terrain_color(terrain: TerrainTag) -> Color32 {
    let (r, g, b) = terrain.rgb();
    Color32::from_rgb(r, g, b)
}
