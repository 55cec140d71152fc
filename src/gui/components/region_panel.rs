// src/gui/components/region_panel.rs
//
// Left panel: configured regions, which of them the next scrape covers,
// and adding/removing regions.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Regions");

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.gui.enabled_regions = app.state.options.scrape.regions.clone();
        }
        if ui.button("None").clicked() {
            app.state.gui.enabled_regions.clear();
        }
    });

    ui.separator();

    let mut remove: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("regions_panel_scroll")
        .max_height(ui.available_height() - 60.0)
        .show(ui, |ui| {
            for region in &app.state.options.scrape.regions {
                ui.horizontal(|ui| {
                    let mut on = app.state.gui.enabled_regions.contains(region);
                    if ui.add_enabled(!app.running, egui::Checkbox::new(&mut on, region.as_str())).changed() {
                        let enabled = &mut app.state.gui.enabled_regions;
                        if on { enabled.push(region.clone()); } else { enabled.retain(|r| r != region); }
                        logf!("UI: Region {} → {}", region, if on { "on" } else { "off" });
                    }
                    if ui.add_enabled(!app.running, egui::Button::new("✖").small())
                        .on_hover_text("Remove region")
                        .clicked()
                    {
                        remove = Some(region.clone());
                    }
                });
            }
        });

    if let Some(r) = remove {
        app.state.options.scrape.regions.retain(|x| *x != r);
        app.state.gui.enabled_regions.retain(|x| *x != r);
        logf!("UI: Region removed {}", r);
    }

    ui.separator();

    ui.horizontal(|ui| {
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.new_region)
                .hint_text("e.g. Oceania")
                .desired_width(110.0),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (ui.button("Add").clicked() || submitted) && !app.running {
            add_region(app);
        }
    });
}

fn add_region(app: &mut App) {
    let name = app.state.gui.new_region.trim().replace(' ', "_");
    if name.is_empty() || app.state.options.scrape.regions.contains(&name) {
        return;
    }
    logf!("UI: Region added {}", name);
    app.state.options.scrape.regions.push(name.clone());
    app.state.gui.enabled_regions.push(name);
    app.state.gui.new_region.clear();
}
