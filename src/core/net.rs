// src/core/net.rs
//
// Document providers: turn a region identifier into a parsed bracket page.

use std::{fs, path::PathBuf, time::Duration};

use scraper::Html;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::config::options::{ScrapeOptions, Source};
use crate::error::FetchError;

pub trait DocumentProvider: Send + Sync {
    fn fetch_bracket_document(&self, region: &str) -> Result<Html, FetchError>;
}

/// Live pages over HTTPS.
pub struct HttpProvider {
    client: reqwest::blocking::Client,
    url_template: String,
}

impl HttpProvider {
    pub fn new(url_template: impl Into<String>) -> Result<Self, FetchError> {
        let url_template = url_template.into();
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|source| FetchError::Http { url: url_template.clone(), source })?;
        Ok(Self { client, url_template })
    }

    fn url_for(&self, region: &str) -> String {
        self.url_template.replace(crate::config::consts::REGION_PLACEHOLDER, region)
    }
}

impl DocumentProvider for HttpProvider {
    fn fetch_bracket_document(&self, region: &str) -> Result<Html, FetchError> {
        let url = self.url_for(region);
        let t = std::time::Instant::now();

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Http { url: url.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status: status.as_u16() });
        }
        let body = resp
            .text()
            .map_err(|source| FetchError::Http { url: url.clone(), source })?;

        logd!("Fetch: {} ({} bytes) in {:?}", url, body.len(), t.elapsed());
        Ok(Html::parse_document(&body))
    }
}

/// Saved pages: `<dir>/<region>.html`.
pub struct FileProvider {
    dir: PathBuf,
}

impl FileProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, region: &str) -> PathBuf {
        self.dir.join(join!(region, ".html"))
    }
}

impl DocumentProvider for FileProvider {
    fn fetch_bracket_document(&self, region: &str) -> Result<Html, FetchError> {
        let path = self.path_for(region);
        let text = fs::read_to_string(&path).map_err(|source| FetchError::Io { path: path.clone(), source })?;
        logd!("Fetch: {} ({} bytes) from disk", path.display(), text.len());
        Ok(Html::parse_document(&text))
    }
}

/// Provider matching the configured source.
pub fn provider_for(opts: &ScrapeOptions) -> Result<Box<dyn DocumentProvider>, FetchError> {
    Ok(match &opts.source {
        Source::Http => Box::new(HttpProvider::new(opts.url_template.clone())?),
        Source::Dir(dir) => Box::new(FileProvider::new(dir.clone())),
    })
}
