// src/config/options.rs
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// The three output tables, in the order they are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKind {
    Rosters,
    Games,
    Teams,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [TableKind::Rosters, TableKind::Games, TableKind::Teams];

    /// Table name as seen by the sink (file stem on disk).
    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Rosters => "rosters",
            TableKind::Games   => "game_list",
            TableKind::Teams   => "teams",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TableKind::Rosters => "Rosters",
            TableKind::Games   => "Game List",
            TableKind::Teams   => "Teams",
        }
    }
}

/// Where bracket documents come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Live fetch via `ScrapeOptions::url_template`.
    Http,
    /// Saved pages: `<dir>/<region>.html`.
    Dir(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub regions: Vec<String>,
    pub url_template: String,
    pub source: Source,
    /// 1 = sequential.
    pub workers: usize,
    /// Leave games with short/long player lists out of the standings.
    pub exclude_incomplete_rosters: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            regions: DEFAULT_REGIONS.iter().map(|r| s!(*r)).collect(),
            url_template: s!(URL_TEMPLATE),
            source: Source::Http,
            workers: 1,
            exclude_incomplete_rosters: false,
        }
    }
}

impl ScrapeOptions {
    /// Worker count actually used for `n` regions.
    pub fn effective_workers(&self, n: usize) -> usize {
        self.workers.clamp(1, MAX_WORKERS).min(n.max(1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_dir: PathBuf,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into the output directory. Empty text resets to the default.
    pub fn set_out_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(crate::file::normalize_separators(s))
        };
    }

    /// `<out_dir>/<table name>.<ext>`
    pub fn path_for(&self, table: TableKind) -> PathBuf {
        self.out_dir.join(join!(table.name(), ".", self.format.ext()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_follows_format() {
        let mut export = ExportOptions::default();
        assert!(export.path_for(TableKind::Games).ends_with("game_list.csv"));
        export.format = ExportFormat::Tsv;
        assert!(export.path_for(TableKind::Teams).ends_with("teams.tsv"));
    }

    #[test]
    fn workers_are_capped_by_region_count() {
        let mut opts = ScrapeOptions::default();
        opts.workers = 16;
        assert_eq!(opts.effective_workers(2), 2);
        opts.workers = 0;
        assert_eq!(opts.effective_workers(2), 1);
    }
}
