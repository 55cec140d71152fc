// src/specs/mod.rs
//! # Bracket page "specs"
//!
//! Page-specific extraction for the qualifier bracket page. Each spec knows
//! *where the ground truth lives in the document tree* and turns it into typed
//! records (`crate::records`), failing fast with a [`ParseError`] that names the
//! team or match it was reading.
//!
//! ## What lives here
//! - **Region detection** from the document title (once per document).
//! - [`rosters`]: team cards → one `PlayerRosterEntry` per player row.
//! - [`matches`]: bracket games → one `RawGame` per individual game, plus
//!   non-fatal `DataQualityWarning`s for player lists that don't fit the NvN label.
//!
//! ## What does **not** live here
//! - Fetching (`core::net` providers), outcome derivation (`records::derive_games`),
//!   standings (`standings`), writing tables (`file`).
//!
//! ## Conventions
//! - Nodes are located by class where the markup has one, by normalized inline
//!   style where it doesn't (`core::html::style_is`).
//! - Positional pairing of game-type blocks and game score blocks is checked,
//!   never assumed.
//! - Specs are pure: same document in, same records out. Tests run them on
//!   inline snippets and saved pages.
pub mod matches;
pub mod rosters;

use scraper::Html;

use crate::core::html::document_title;
use crate::error::ParseError;
use crate::records::{DataQualityWarning, PlayerRosterEntry, RawGame};

/// Everything one region's document yields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionExtract {
    pub region: String,
    pub rosters: Vec<PlayerRosterEntry>,
    pub games: Vec<RawGame>,
    pub warnings: Vec<DataQualityWarning>,
}

/// Run both extractors over one document. Region is read from the title once.
pub fn extract_document(doc: &Html) -> Result<RegionExtract, ParseError> {
    let region = detect_region(doc)?;
    let t = std::time::Instant::now();

    let rosters = rosters::extract(doc, &region)?;
    let matches::MatchExtract { games, warnings } = matches::extract(doc, &region)?;

    logd!(
        "Extract: {} → {} roster rows, {} games, {} warnings in {:?}",
        region, rosters.len(), games.len(), warnings.len(), t.elapsed()
    );
    Ok(RegionExtract { region, rosters, games, warnings })
}

pub fn detect_region(doc: &Html) -> Result<String, ParseError> {
    let title = document_title(doc).unwrap_or_default();
    region_from_title(&title).ok_or(ParseError::MissingRegion { title })
}

/// Region token from a page title.
/// - With a `:` → segment after the first `- ` in the part before the `:`
///   (`"Johnnyboi_i Fusion - North America: Qualifier - Liquipedia"` → `North America`).
/// - Without → leading segment before ` - ` (`"Europe - Qualifier"` → `Europe`).
pub fn region_from_title(title: &str) -> Option<String> {
    let region = match title.split_once(':') {
        Some((head, _)) => head.split("- ").nth(1)?,
        None => title.split_once(" - ")?.0,
    };
    let region = region.trim();
    (!region.is_empty()).then(|| s!(region))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_from_liquipedia_title() {
        assert_eq!(
            region_from_title("Johnnyboi_i Fusion - North America: Qualifier - Liquipedia Rocket League Wiki").as_deref(),
            Some("North America")
        );
    }

    #[test]
    fn region_from_leading_token() {
        assert_eq!(region_from_title("Europe - Fusion Qualifier").as_deref(), Some("Europe"));
    }

    #[test]
    fn region_missing() {
        assert_eq!(region_from_title("Qualifier"), None);
        assert_eq!(region_from_title(" - Qualifier"), None);

        let doc = Html::parse_document("<html><head></head><body></body></html>");
        assert!(matches!(detect_region(&doc), Err(ParseError::MissingRegion { .. })));
    }
}
