// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, file};

/// Current tab → clipboard, in the export format.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let kind = app.current_table();

    let result = match app.current_data() {
        Some(ds) if !ds.is_empty() => {
            logf!("Copy: table={:?}, rows={}", kind, ds.rows.len());
            file::to_export_string(ds, &app.state.options.export)
        }
        _ => {
            logd!("Copy: Clicked, but there's nothing to copy");
            return app.status("Nothing to copy");
        }
    };

    match result {
        Ok(txt) => {
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
