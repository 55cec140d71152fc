// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.

use eframe::egui;
use crate::gui::app::App;
use crate::config::options::TableKind;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_table();

        for kind in TableKind::ALL {
            let selected = kind == cur;
            let rows = app.tables.get(&kind).map(|ds| ds.rows.len()).unwrap_or(0);
            let label = format!("{} ({})", kind.title(), rows);

            if ui.selectable_label(selected, label).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, kind);
                app.state.gui.current_table = kind;
            }
        }
    });
}
