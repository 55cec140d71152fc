// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::consts::{DEFAULT_REGIONS, MAX_WORKERS, STORE_DIR};
use crate::config::options::{AppOptions, ExportFormat, ExportOptions, ScrapeOptions, Source};
use crate::progress::Progress;

#[derive(Parser, Debug)]
#[command(name = "cli", version)]
#[command(about = "Scrape Fusion qualifier brackets into rosters, game list and team standings", long_about = None)]
pub struct Args {
    /// Region to scrape (repeatable; default: North_America, Europe)
    #[arg(short, long = "region", value_name = "REGION")]
    pub regions: Vec<String>,

    /// Read saved pages `<DIR>/<region>.html` instead of fetching
    #[arg(long, value_name = "DIR")]
    pub from_dir: Option<PathBuf>,

    /// Page URL with `{region}` placeholder
    #[arg(long, value_name = "URL")]
    pub url_template: Option<String>,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Omit the header row
    #[arg(long)]
    pub no_headers: bool,

    /// Regions processed in parallel
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=MAX_WORKERS as i64))]
    pub workers: u16,

    /// Leave games with incomplete player lists out of the standings
    #[arg(long)]
    pub exclude_incomplete: bool,

    /// Print the default regions and exit
    #[arg(long)]
    pub list_regions: bool,

    /// Also log to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut scrape = ScrapeOptions::default();
        if !self.regions.is_empty() {
            scrape.regions = self.regions.clone();
        }
        if let Some(t) = &self.url_template {
            scrape.url_template = t.clone();
        }
        if let Some(dir) = &self.from_dir {
            scrape.source = Source::Dir(dir.clone());
        }
        scrape.workers = usize::from(self.workers);
        scrape.exclude_incomplete_rosters = self.exclude_incomplete;

        let mut export = ExportOptions::default();
        export.format = self.format.into();
        export.include_headers = !self.no_headers;
        if let Some(o) = &self.out {
            export.set_out_dir(o);
        }

        AppOptions { scrape, export }
    }
}

/// Region progress as plain lines on stderr.
struct LineProgress;

impl Progress for LineProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, region: &str) {
        eprintln!("  {region}: ok");
    }
    fn item_failed(&mut self, region: &str, err: &str) {
        eprintln!("  {region}: {err}");
    }
}

pub fn run(args: Args) -> crate::error::Result<()> {
    crate::log::init(Path::new(STORE_DIR), args.verbose);

    if args.list_regions {
        for r in DEFAULT_REGIONS {
            println!("{r}");
        }
        return Ok(());
    }

    let opts = args.to_options();
    let summary = crate::runner::run(&opts, Some(&mut LineProgress))?;

    for w in &summary.warnings {
        eprintln!("warning: {w}");
    }
    for p in &summary.files_written {
        println!("{}", p.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_options() {
        let args = Args::parse_from([
            "cli", "-r", "Oceania", "--region", "Europe", "--from-dir", "pages",
            "--format", "tsv", "--no-headers", "--workers", "2", "--exclude-incomplete",
        ]);
        let opts = args.to_options();
        assert_eq!(opts.scrape.regions, vec![s!("Oceania"), s!("Europe")]);
        assert_eq!(opts.scrape.source, Source::Dir(PathBuf::from("pages")));
        assert_eq!(opts.scrape.workers, 2);
        assert!(opts.scrape.exclude_incomplete_rosters);
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(!opts.export.include_headers);
    }

    #[test]
    fn defaults() {
        let opts = Args::parse_from(["cli"]).to_options();
        assert_eq!(opts, AppOptions::default());
    }

    #[test]
    fn worker_cap_is_enforced() {
        assert!(Args::try_parse_from(["cli", "--workers", "99"]).is_err());
    }
}
