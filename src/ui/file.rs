// src/ui/file.rs

use std::path::Path;
use std::sync::Arc;

use log::{error, info};
use parking_lot::RwLock;

use crate::editor::Editor;

/// Exports the current map into the configured export directory and reports
/// the outcome in the status bar.
pub fn export_map(editor: &Arc<RwLock<Editor>>) {
    let mut editor = editor.write();
    match editor.export() {
        Ok(path) => info!("Map saved to {}", path.display()),
        Err(e) => {
            error!("Export failed: {}", e);
            editor.status_message = format!("Export failed: {e}");
        }
    }
}

/// Loads the map at `path`. A rejected file leaves the current map in place.
pub fn import_map(editor: &Arc<RwLock<Editor>>, path: &Path) {
    info!("Selected file: {:?}", path);
    let mut editor = editor.write();
    if let Err(e) = editor.import_from(path) {
        error!("Error loading map file: {}", e);
        editor.status_message = format!("Error loading map file: {e}");
    }
}
