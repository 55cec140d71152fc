// src/config/state.rs
use super::options::{AppOptions, TableKind};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Regions ticked in the left panel (subset of `AppOptions::scrape.regions`)
    pub enabled_regions: Vec<String>,

    /// Text box for adding a region
    pub new_region: String,

    pub window_w: u32,
    pub window_h: u32,

    /// Active tab
    pub current_table: TableKind,

    /// Show the warnings list under the table
    pub show_warnings: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            enabled_regions: Vec::new(),
            new_region: s!(),
            window_w: 1200,
            window_h: 720,
            current_table: TableKind::Teams,
            show_warnings: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState {
            enabled_regions: options.scrape.regions.clone(),
            ..GuiState::default()
        };
        Self { options, gui }
    }

    /// Scrape options restricted to the regions ticked in the GUI, in configured order.
    pub fn scrape_options_for_run(&self) -> crate::config::options::ScrapeOptions {
        let mut scrape = self.options.scrape.clone();
        scrape.regions.retain(|r| self.gui.enabled_regions.contains(r));
        scrape
    }
}
