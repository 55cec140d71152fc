// src/specs/matches.rs
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::core::html::{attr, first_styled, selector, style_contains, style_is, text_of};
use crate::core::sanitize::trim_to_digits;
use crate::error::ParseError;
use crate::records::{DataQualityWarning, RawGame};

// Inline styles that identify nodes without a class
const STYLE_LABEL: &str = "font-weight:bold";
const STYLE_PLAYER: &str = "white-space: pre";
const STYLE_SCORE_LEFT: &str = "float:left;margin-left:5px;";
const STYLE_SCORE_RIGHT: &str = "float:right;margin-right:5px;";
const STYLE_VENUE: &str = "";
const STYLE_GAME_TYPE: &str = "border";

const NO_OVERTIME: &str = "0:00";

// Goals in a single game; anything above is a broken score node
const MAX_GAME_SCORE: u32 = 999;

static GAME_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d)v\d").expect("game type pattern"));

// "(+1:23)" style suffix, also counts as overtime when the "OT" marker is missing
static OT_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+\s*\d+:\d{2}").expect("overtime pattern"));

/// Games + non-fatal findings for one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchExtract {
    pub games: Vec<RawGame>,
    pub warnings: Vec<DataQualityWarning>,
}

struct Selectors {
    bracket: Selector,
    game: Selector,
    middle: Selector,
    header: Selector,
    titled_link: Selector,
    score: Selector,
    popup_body: Selector,
    timer: Selector,
    comment: Selector,
    body_match: Selector,
    div: Selector,
    span: Selector,
}

impl Selectors {
    fn new() -> Result<Self, ParseError> {
        Ok(Self {
            bracket: selector("div.bracket-wrapper.bracket-team")?,
            game: selector("div.bracket-game")?,
            middle: selector("div.bracket-team-middle")?,
            header: selector("div.bracket-popup-header")?,
            titled_link: selector("a[title]")?,
            score: selector("div.bracket-score")?,
            popup_body: selector("div.bracket-popup-body")?,
            timer: selector("span.timer-object")?,
            comment: selector("div.bracket-popup-body-comment")?,
            body_match: selector("div.bracket-popup-body-match")?,
            div: selector("div")?,
            span: selector("span")?,
        })
    }
}

/// Fields shared by every game of one match.
struct MatchHeader<'r> {
    unit: String,
    team0: String,
    team1: String,
    team0_match_score: String,
    team1_match_score: String,
    match_time: String,
    region: &'r str,
}

/// Bracket games → one `RawGame` per individual game.
///
/// Placeholder slots (a `bracket-team-middle` spacer) are skipped. For real
/// matches the game-type blocks and game score blocks must pair up 1:1.
pub fn extract(doc: &Html, region: &str) -> Result<MatchExtract, ParseError> {
    let sel = Selectors::new()?;

    let bracket = doc.select(&sel.bracket).next().ok_or_else(|| ParseError::MissingNode {
        unit: s!(region),
        what: "team bracket",
    })?;

    let mut out = MatchExtract::default();
    let mut skipped = 0usize;

    for node in bracket.select(&sel.game) {
        if node.select(&sel.middle).next().is_some() {
            skipped += 1;
            continue;
        }
        parse_match(&node, &sel, region, &mut out)?;
    }

    logd!("Matches: {} games, {} placeholder slots skipped ({})", out.games.len(), skipped, region);
    Ok(out)
}

fn parse_match(
    node: &ElementRef,
    sel: &Selectors,
    region: &str,
    out: &mut MatchExtract,
) -> Result<(), ParseError> {
    let header = read_header(node, sel, region)?;
    let unit = &header.unit;

    let comment = node.select(&sel.comment).next().ok_or_else(|| ParseError::MissingNode {
        unit: unit.clone(),
        what: "game type comment",
    })?;
    let game_types: Vec<ElementRef> = comment
        .select(&sel.div)
        .filter(|d| style_contains(d, STYLE_GAME_TYPE))
        .collect();
    let games: Vec<ElementRef> = node.select(&sel.body_match).collect();

    if game_types.len() != games.len() {
        return Err(ParseError::GameListMismatch {
            unit: unit.clone(),
            game_types: game_types.len(),
            games: games.len(),
        });
    }

    for (index, (game_type, game)) in game_types.iter().zip(&games).enumerate() {
        let raw = parse_game(game_type, game, index + 1, &header, sel)?;
        if let Some(w) = DataQualityWarning::check(&raw) {
            logw!("Data quality: {}", w);
            out.warnings.push(w);
        }
        out.games.push(raw);
    }
    Ok(())
}

fn read_header<'r>(node: &ElementRef, sel: &Selectors, region: &'r str) -> Result<MatchHeader<'r>, ParseError> {
    let missing = |unit: &str, what| ParseError::MissingNode { unit: s!(unit), what };

    let popup_header = node
        .select(&sel.header)
        .next()
        .ok_or_else(|| missing("bracket game", "popup header"))?;
    let titles: Vec<&str> = popup_header
        .select(&sel.titled_link)
        .filter_map(|a| attr(&a, "title"))
        .collect();
    let (team0, team1) = match titles.as_slice() {
        [first, .., last] => (s!(*first), s!(*last)),
        _ => return Err(missing("bracket game", "team links")),
    };
    let unit = format!("{} vs {}", team0, team1);

    let scores: Vec<String> = node.select(&sel.score).map(|s| text_of(&s)).collect();
    let [team0_match_score, team1_match_score] = <[String; 2]>::try_from(scores)
        .map_err(|_| missing(unit.as_str(), "two bracket scores"))?;

    let match_time = node
        .select(&sel.popup_body)
        .next()
        .and_then(|body| body.select(&sel.timer).next())
        .map(|t| text_of(&t))
        .ok_or_else(|| missing(unit.as_str(), "match timer"))?;

    Ok(MatchHeader { unit, team0, team1, team0_match_score, team1_match_score, match_time, region })
}

fn parse_game(
    game_type: &ElementRef,
    game: &ElementRef,
    index: usize,
    header: &MatchHeader,
    sel: &Selectors,
) -> Result<RawGame, ParseError> {
    let unit = &header.unit;

    let label = first_styled(game_type, &sel.div, STYLE_LABEL)
        .map(|l| text_of(&l))
        .ok_or_else(|| ParseError::MissingNode { unit: unit.clone(), what: "game label" })?;
    let (game_number, player_count_per_side) = parse_game_label(&label)
        .ok_or_else(|| ParseError::BadGameLabel { unit: unit.clone(), label: label.clone() })?;

    let team0_score = parse_score(game, sel, STYLE_SCORE_LEFT, unit, index)?;
    let team1_score = parse_score(game, sel, STYLE_SCORE_RIGHT, unit, index)?;

    let venue = first_styled(game, &sel.div, STYLE_VENUE)
        .map(|v| text_of(&v))
        .unwrap_or_default();
    let (overtime, overtime_duration) = overtime_of(&venue);

    let players: Vec<String> = game_type
        .select(&sel.span)
        .filter(|s| style_is(s, STYLE_PLAYER))
        .map(|s| text_of(&s))
        .collect();
    let (team0_players, team1_players) = split_sides(players, player_count_per_side);

    Ok(RawGame {
        team0: header.team0.clone(),
        team1: header.team1.clone(),
        team0_score,
        team1_score,
        overtime,
        overtime_duration,
        team0_players,
        team1_players,
        game_number,
        player_count_per_side,
        match_time: header.match_time.clone(),
        region: s!(header.region),
        team0_match_score: header.team0_match_score.clone(),
        team1_match_score: header.team1_match_score.clone(),
    })
}

fn parse_score(game: &ElementRef, sel: &Selectors, style: &str, unit: &str, index: usize) -> Result<u32, ParseError> {
    let raw = first_styled(game, &sel.div, style)
        .map(|d| text_of(&d))
        .ok_or_else(|| ParseError::MissingNode { unit: s!(unit), what: "game score" })?;
    match raw.parse::<u32>() {
        Ok(score) if score <= MAX_GAME_SCORE => Ok(score),
        _ => Err(ParseError::BadScore { unit: s!(unit), index, raw }),
    }
}

/// `"Game 2 - 3v3"` → `(2, 3)`: number after the first token, first digit of `NvN`.
pub fn parse_game_label(label: &str) -> Option<(u32, u32)> {
    let number = label
        .split_whitespace()
        .nth(1)
        .map(trim_to_digits)?
        .parse::<u32>()
        .ok()?;
    let per_side = GAME_TYPE_RE
        .captures(label)?
        .get(1)?
        .as_str()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)?;
    Some((number, per_side))
}

/// Overtime flag and duration from the venue line.
/// `"DFH Stadium (OT +1:23)"` → `(true, "1:23")`; duration is the text after the
/// last `+` minus its closing character.
pub fn overtime_of(venue: &str) -> (bool, String) {
    let overtime = venue.contains("OT") || OT_SUFFIX_RE.is_match(venue);
    if !overtime {
        return (false, s!(NO_OVERTIME));
    }
    let duration = match venue.rfind('+') {
        Some(i) => {
            let mut tail = venue[i + 1..].chars();
            tail.next_back();
            tail.as_str().trim().to_string()
        }
        None => s!(NO_OVERTIME),
    };
    (true, duration)
}

/// First `per_side` names → team0, the rest → team1; each side sorted.
fn split_sides(mut players: Vec<String>, per_side: u32) -> (Vec<String>, Vec<String>) {
    let cut = (per_side as usize).min(players.len());
    let mut team1 = players.split_off(cut);
    players.sort();
    team1.sort();
    (players, team1)
}
