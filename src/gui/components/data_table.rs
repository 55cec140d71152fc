// src/gui/components/data_table.rs
//
// Draws the live table for the current tab. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::options::TableKind;
use crate::gui::app::App;
use crate::records::{GameRecord, PlayerRosterEntry, TeamStanding};
use crate::table::TableRow;

/// Columns drawn centered.
fn numeric_columns(kind: TableKind) -> &'static [usize] {
    match kind {
        TableKind::Rosters => &[2],
        TableKind::Games   => &[2, 3, 4, 8, 9, 14, 15, 16],
        TableKind::Teams   => &[1, 3, 4, 5, 6, 7, 8],
    }
}

fn default_headers(kind: TableKind) -> &'static [&'static str] {
    match kind {
        TableKind::Rosters => PlayerRosterEntry::HEADERS,
        TableKind::Games   => GameRecord::HEADERS,
        TableKind::Teams   => TeamStanding::HEADERS,
    }
}

fn initial_width(kind: TableKind, col: usize) -> f32 {
    match (kind, col) {
        (TableKind::Rosters, 4) | (TableKind::Games, 6 | 7 | 10) => 220.0,
        (_, 0) | (TableKind::Games, 1) => 160.0,
        _ => 90.0,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.state.gui.show_warnings && !app.warnings.is_empty() {
        egui::ScrollArea::vertical()
            .id_salt("warnings_scroll")
            .max_height(120.0)
            .show(ui, |ui| {
                for w in &app.warnings {
                    ui.label(RichText::new(w).color(egui::Color32::from_rgb(0xF0, 0xD2, 0x3C)));
                }
            });
        ui.separator();
    }

    let kind = app.current_table();
    let headers: Vec<String> = match app.current_data() {
        Some(ds) if !ds.headers.is_empty() => ds.headers.clone(),
        _ => default_headers(kind).iter().map(|h| s!(*h)).collect(),
    };
    let cols = headers.len();
    let numeric = numeric_columns(kind);
    let rows: &[Vec<String>] = app.current_data().map(|ds| ds.rows.as_slice()).unwrap_or(&[]);

    // Reserve space for the scroll bars instead of overlaying content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("inner_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", kind));
            for ci in 0..cols {
                table = table.column(Column::initial(initial_width(kind, ci)).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for (ci, h) in headers.iter().enumerate() {
                        header.col(|ui| {
                            let text = RichText::new(h).strong();
                            if numeric.contains(&ci) {
                                ui.centered_and_justified(|ui| { ui.label(text); });
                            } else {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let Some(data) = rows.get(row.index()) else { return };
                        for ci in 0..cols {
                            let cell = data.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let mut rt = RichText::new(cell);
                                if kind == TableKind::Games && cell == "true" {
                                    rt = rt.color(egui::Color32::from_rgb(0x64, 0xB4, 0xFF));
                                }
                                if numeric.contains(&ci) {
                                    ui.centered_and_justified(|ui| { ui.label(rt); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                                }
                            });
                        }
                    });
                });
        });
}
