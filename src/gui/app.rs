// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    path::PathBuf,
    sync::{mpsc, Arc, Mutex},
};

use eframe::egui;

use crate::{
    store::{self, DataSet},
    config::{
        state::AppState,
        options::{AppOptions, TableKind},
    },
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Fusion Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new(AppOptions::default()))))),
    )?;
    Ok(())
}

/// What the scrape thread hands back: the three tables plus warning lines.
pub struct ScrapeOutcome {
    pub tables: Vec<(TableKind, DataSet)>,
    pub warnings: Vec<String>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // one dataset per tab; missing = never scraped/cached
    pub tables: HashMap<TableKind, DataSet>,
    pub warnings: Vec<String>,

    // status/progress (scrape thread writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub job: Option<mpsc::Receiver<Result<ScrapeOutcome, String>>>,

    pub store_root: PathBuf,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let store_root = store::default_root();
        let mut status = s!("Idle");

        let mut tables = HashMap::new();
        for kind in TableKind::ALL {
            match store::load_dataset(&store_root, kind) {
                Ok(Some(ds)) => {
                    logf!("Cache: Loaded {:?} (rows={}, headers={})", kind, ds.rows.len(), ds.headers.len());
                    tables.insert(kind, ds);
                    status = s!("Loaded local data");
                }
                Ok(None) => logd!("Cache: Missing {:?}", kind),
                Err(e) => loge!("Cache: Unreadable {:?}: {}", kind, e),
            }
        }

        let out_path_text = state.options.export.out_dir().to_string_lossy().into_owned();
        logf!("Init: regions={:?}, tables cached={}", state.options.scrape.regions, tables.len());

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            tables,
            warnings: Vec::new(),
            status: Arc::new(Mutex::new(status)),
            running: false,
            job: None,
            store_root,
        }
    }

    #[inline]
    pub fn current_table(&self) -> TableKind { self.state.gui.current_table }

    #[inline]
    pub fn current_data(&self) -> Option<&DataSet> { self.tables.get(&self.current_table()) }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Apply the output text field to the export options if the user edited it.
    pub fn commit_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_out_dir(&self.out_path_text);
            logf!("Export: Out dir set → {}", self.state.options.export.out_dir().display());
            self.out_path_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_scrape(self);
        if self.running {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::SidePanel::left("regions")
            .resizable(false)
            .show(ctx, |ui| {
                components::region_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
