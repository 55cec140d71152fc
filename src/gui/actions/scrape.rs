// src/gui/actions/scrape.rs
use std::{sync::mpsc, thread};

use crate::{
    core::net::provider_for,
    error::ScrapeError,
    gui::app::{App, ScrapeOutcome},
    gui::progress::GuiProgress,
    scrape, store,
};

/// Start the pipeline on a background thread; `poll_scrape` picks up the result.
pub fn scrape(app: &mut App) {
    if app.running {
        return;
    }

    let opts = app.state.scrape_options_for_run();
    logf!("Scrape: Begin regions={:?} workers={}", opts.regions, opts.workers);

    let (tx, rx) = mpsc::channel();
    let mut prog = GuiProgress::new(app.status.clone());

    thread::spawn(move || {
        let result = provider_for(&opts)
            .map_err(ScrapeError::Provider)
            .and_then(|provider| scrape::collect(provider.as_ref(), &opts, Some(&mut prog)))
            .map(|t| ScrapeOutcome {
                tables: t.to_datasets(),
                warnings: t.warnings.iter().map(|w| w.to_string()).collect(),
            })
            .map_err(|e| e.to_string());
        let _ = tx.send(result); // receiver gone = window closed
    });

    app.job = Some(rx);
    app.running = true;
    app.status("Scraping…");
}

/// Called every frame; applies a finished scrape to the app and the cache.
pub fn poll_scrape(app: &mut App) {
    let Some(rx) = &app.job else { return };

    let result = match rx.try_recv() {
        Ok(r) => r,
        Err(mpsc::TryRecvError::Empty) => return,
        Err(mpsc::TryRecvError::Disconnected) => Err(s!("scrape thread stopped unexpectedly")),
    };
    app.job = None;
    app.running = false;

    match result {
        Ok(outcome) => {
            for (kind, ds) in &outcome.tables {
                match store::save_dataset(&app.store_root, *kind, ds) {
                    Ok(()) => logd!("Cache: Saved {:?}", kind),
                    Err(e) => loge!("Cache: Save failed {:?}: {}", kind, e),
                }
            }
            let n_warn = outcome.warnings.len();
            app.tables = outcome.tables.into_iter().collect();
            app.warnings = outcome.warnings;

            logf!("Scrape: OK, {} warnings", n_warn);
            app.status(if n_warn == 0 { s!("Ready") } else { format!("Ready ({} warnings)", n_warn) });
        }
        Err(e) => {
            // Previous tables stay as they were.
            loge!("Scrape: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
