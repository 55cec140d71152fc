// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::net::provider_for,
    error::{Result, ScrapeError},
    file::{DirSink, Sink},
    progress::Progress,
    records::DataQualityWarning,
    scrape::{self, Tournament},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub warnings: Vec<DataQualityWarning>,
}

/// Top-level run: collect every region, then write all three tables.
/// Nothing is written unless collection succeeded for every region.
pub fn run(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let provider = provider_for(&opts.scrape).map_err(ScrapeError::Provider)?;
    let tournament = scrape::collect(provider.as_ref(), &opts.scrape, progress)?;

    let mut sink = DirSink::new(opts.export.clone());
    let files_written = write_all(&mut sink, &tournament)?;

    Ok(RunSummary { files_written, warnings: tournament.warnings })
}

/// Hand every table to `sink`, in write order.
pub fn write_all(sink: &mut dyn Sink, tournament: &Tournament) -> Result<Vec<PathBuf>> {
    tournament
        .to_datasets()
        .into_iter()
        .map(|(kind, data)| sink.write_table(kind, &data))
        .collect()
}
