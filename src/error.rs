// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Document retrieval failed. Fatal for the region it belongs to.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A required node is missing or a required field does not coerce.
/// `unit` names the failing team ("Alpha") or match ("Alpha vs Bravo").
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{unit}: missing {what}")]
    MissingNode { unit: String, what: &'static str },

    #[error("no region in document title {title:?}")]
    MissingRegion { title: String },

    #[error("team {team}: malformed roster row {row}: {reason}")]
    MalformedRoster { team: String, row: usize, reason: &'static str },

    #[error("{unit}: {game_types} game-type blocks but {games} game score blocks")]
    GameListMismatch { unit: String, game_types: usize, games: usize },

    #[error("{unit}: game {index}: score {raw:?} is not a number")]
    BadScore { unit: String, index: usize, raw: String },

    #[error("{unit}: bad game label {label:?}")]
    BadGameLabel { unit: String, label: String },

    #[error("invalid selector {css:?}: {reason}")]
    Selector { css: &'static str, reason: String },
}

/// Top-level error for a run.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("region {region}: {source}")]
    Fetch {
        region: String,
        #[source]
        source: FetchError,
    },

    #[error("region {region}: {source}")]
    Parse {
        region: String,
        #[source]
        source: ParseError,
    },

    #[error("cannot set up document source: {0}")]
    Provider(#[source] FetchError),

    #[error("no regions selected")]
    NoRegions,

    #[error("worker for region {0} stopped without a result")]
    WorkerLost(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("table write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
