// src/gui/components/export_bar.rs

use eframe::egui::{self, widgets::Spinner};
use crate::{
    gui::{actions, app::App},
    config::options::ExportFormat,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, ExportFormat::Tsv, "TSV");

            ui.separator();

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if fmt != prev_fmt {
            export.format = fmt;
            logf!("UI: Export format → {:?}", export.format);
        }
    }

    // --- Scrape options ---
    ui.horizontal(|ui| {
        let scrape = &mut app.state.options.scrape;
        ui.label("Workers:");
        ui.add_enabled(
            !app.running,
            egui::DragValue::new(&mut scrape.workers).range(1..=crate::config::consts::MAX_WORKERS),
        );
        ui.add_enabled(
            !app.running,
            egui::Checkbox::new(&mut scrape.exclude_incomplete_rosters, "Standings: skip incomplete rosters"),
        );
    });

    // --- Output dir ---
    ui.horizontal(|ui| {
        ui.label("Output dir:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export / SCRAPE) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").on_hover_text("Write all tables").clicked() {
            actions::export(app);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        let can_scrape = !app.running && !app.state.gui.enabled_regions.is_empty();

        let button_scrape = ui.add_enabled(
            can_scrape,
            egui::Button::new(
                egui::RichText::new("SCRAPE")
                .color(black)
                .strong())
            .fill(red));

        if button_scrape.clicked() {
            actions::scrape(app);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        if !app.warnings.is_empty() {
            let label = format!("⚠ {} warnings", app.warnings.len());
            ui.toggle_value(&mut app.state.gui.show_warnings, label);
        }

        ui.label(app.status_text());
    });
}
