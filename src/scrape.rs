// src/scrape.rs
use std::{
    sync::{ mpsc, atomic::{ AtomicBool, AtomicUsize, Ordering }},
    thread,
};

use crate::{
    config::options::{ScrapeOptions, TableKind},
    core::DocumentProvider,
    error::{Result, ScrapeError},
    progress::Progress,
    records::{self, DataQualityWarning, GameRecord, PlayerRosterEntry, RawGame, TeamStanding},
    specs::{self, RegionExtract},
    standings,
    store::DataSet,
    table,
};

/// Everything one run produces, all regions combined.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tournament {
    pub rosters: Vec<PlayerRosterEntry>,
    pub games: Vec<GameRecord>,
    pub standings: Vec<TeamStanding>,
    pub warnings: Vec<DataQualityWarning>,
}

impl Tournament {
    /// Concatenate per-region extracts (in the given order), derive outcomes, aggregate.
    pub fn from_regions(extracts: Vec<RegionExtract>, exclude_incomplete_rosters: bool) -> Self {
        let mut rosters = Vec::new();
        let mut raw: Vec<RawGame> = Vec::new();
        let mut warnings = Vec::new();

        for ex in extracts {
            rosters.extend(ex.rosters);
            raw.extend(ex.games);
            warnings.extend(ex.warnings);
        }

        if !warnings.is_empty() {
            logf!("Scrape: {} data-quality warnings across all regions", warnings.len());
        }

        let games = records::derive_games(raw);
        let standings = if exclude_incomplete_rosters {
            let complete: Vec<GameRecord> =
                games.iter().filter(|g| g.has_full_rosters()).cloned().collect();
            logd!("Standings: {} of {} games have full rosters", complete.len(), games.len());
            standings::aggregate(&complete)
        } else {
            standings::aggregate(&games)
        };

        Self { rosters, games, standings, warnings }
    }

    /// The three output tables, in write order.
    pub fn to_datasets(&self) -> Vec<(TableKind, DataSet)> {
        vec![
            (TableKind::Rosters, table::to_dataset(&self.rosters)),
            (TableKind::Games,   table::to_dataset(&self.games)),
            (TableKind::Teams,   table::to_dataset(&self.standings)),
        ]
    }
}

/// Fetch + extract one region. Errors carry the configured region id.
pub fn extract_region(provider: &dyn DocumentProvider, region: &str) -> Result<RegionExtract> {
    let doc = provider
        .fetch_bracket_document(region)
        .map_err(|source| ScrapeError::Fetch { region: s!(region), source })?;
    specs::extract_document(&doc).map_err(|source| ScrapeError::Parse { region: s!(region), source })
}

/// Run the batch over every configured region. No partial result: the first
/// failing region (in configured order) fails the whole run.
pub fn collect(
    provider: &dyn DocumentProvider,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Tournament> {
    if opts.regions.is_empty() {
        return Err(ScrapeError::NoRegions);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.regions.len());
        p.log("Fetching brackets…");
    }

    let workers = opts.effective_workers(opts.regions.len());
    let t = std::time::Instant::now();
    let extracts = if workers <= 1 {
        collect_sequential(provider, &opts.regions, progress.as_deref_mut())
    } else {
        collect_parallel(provider, &opts.regions, workers, progress.as_deref_mut())
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    let extracts = extracts?;
    logf!("Scrape: {} regions with {} workers in {:?}", extracts.len(), workers, t.elapsed());

    Ok(Tournament::from_regions(extracts, opts.exclude_incomplete_rosters))
}

fn collect_sequential<'p>(
    provider: &dyn DocumentProvider,
    regions: &[String],
    mut progress: Option<&mut (dyn Progress + 'p)>,
) -> Result<Vec<RegionExtract>> {
    let mut out = Vec::with_capacity(regions.len());
    for region in regions {
        match extract_region(provider, region) {
            Ok(ex) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(region);
                }
                out.push(ex);
            }
            Err(e) => {
                loge!("{}", e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(region, &e.to_string());
                }
                return Err(e);
            }
        }
    }
    Ok(out)
}

/// Workers pull region indices from a shared counter and send results back;
/// the receiver slots them by index so output order is the configured order.
fn collect_parallel<'p>(
    provider: &dyn DocumentProvider,
    regions: &[String],
    workers: usize,
    mut progress: Option<&mut (dyn Progress + 'p)>,
) -> Result<Vec<RegionExtract>> {
    let next = AtomicUsize::new(0);
    let failed = AtomicBool::new(false);
    let mut slots: Vec<Option<Result<RegionExtract>>> = (0..regions.len()).map(|_| None).collect();

    thread::scope(|scope| {
        let (tx, rx) = mpsc::channel::<(usize, Result<RegionExtract>)>();

        for _ in 0..workers {
            let tx = tx.clone();
            let (next, failed) = (&next, &failed);
            scope.spawn(move || {
                loop {
                    if failed.load(Ordering::Relaxed) {
                        break;
                    }
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    if i >= regions.len() {
                        break;
                    }
                    let result = extract_region(provider, &regions[i]);
                    if result.is_err() {
                        failed.store(true, Ordering::Relaxed);
                    }
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx); // receiver loop ends once every worker is done

        for (i, result) in rx {
            let region = regions[i].as_str();
            match &result {
                Ok(_) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(region);
                    }
                }
                Err(e) => {
                    loge!("{}", e);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(region, &e.to_string());
                    }
                }
            }
            slots[i] = Some(result);
        }
    });

    // First error in configured order wins; a region nobody reached only
    // matters if there was no error at all.
    let mut out = Vec::with_capacity(regions.len());
    let mut lost = None;
    for (region, slot) in regions.iter().zip(slots) {
        match slot {
            Some(Ok(ex)) => out.push(ex),
            Some(Err(e)) => return Err(e),
            None => {
                lost.get_or_insert_with(|| region.clone());
            }
        }
    }
    match lost {
        Some(region) => Err(ScrapeError::WorkerLost(region)),
        None => Ok(out),
    }
}
