// src/config/consts.rs

// Net config
pub const URL_TEMPLATE: &str = "https://liquipedia.net/rocketleague/Johnnyboi_i/Fusion/{region}/Qualifier";
pub const REGION_PLACEHOLDER: &str = "{region}";
pub const USER_AGENT: &str = concat!("fusion_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Regions scraped when nothing else is configured
pub const DEFAULT_REGIONS: &[&str] = &["North_America", "Europe"];

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const PLAYER_LIST_SEP: &str = "; ";

// Concurrency
pub const MAX_WORKERS: usize = 4;
