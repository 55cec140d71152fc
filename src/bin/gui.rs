#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::ViewportBuilder;
use fusion_scrape::{config::{consts::STORE_DIR, state::GuiState}, gui, log};

fn main() {
    log::init(Path::new(STORE_DIR), false);

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([size.window_w as f32, size.window_h as f32])
            .with_title("Fusion Scraper"),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        fusion_scrape::loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
