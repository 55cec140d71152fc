// tests/pipeline.rs
//
// Saved bracket pages through the whole batch: provider → extract → derive → aggregate.

use std::path::PathBuf;

use fusion_scrape::config::options::{ScrapeOptions, Source};
use fusion_scrape::core::{DocumentProvider, FileProvider};
use fusion_scrape::error::{ParseError, ScrapeError};
use fusion_scrape::scrape::{self, Tournament};
use fusion_scrape::specs;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn opts(workers: usize) -> ScrapeOptions {
    ScrapeOptions {
        regions: vec!["North_America".into(), "Europe".into()],
        source: Source::Dir(fixtures()),
        workers,
        ..ScrapeOptions::default()
    }
}

fn run(workers: usize) -> Tournament {
    let provider = FileProvider::new(fixtures());
    scrape::collect(&provider, &opts(workers), None).unwrap()
}

#[test]
fn region_comes_from_either_title_form() {
    let provider = FileProvider::new(fixtures());
    let na = provider.fetch_bracket_document("North_America").unwrap();
    let eu = provider.fetch_bracket_document("Europe").unwrap();
    assert_eq!(specs::detect_region(&na).unwrap(), "North America");
    assert_eq!(specs::detect_region(&eu).unwrap(), "Europe");
}

#[test]
fn rosters_one_row_per_player_in_region_order() {
    let t = run(1);
    assert_eq!(t.rosters.len(), 12);
    assert_eq!(t.rosters[0].player, "Ace");
    assert_eq!(t.rosters[0].country, "United States");
    assert_eq!(t.rosters[0].team_url, "/rocketleague/Alpha_Esports");
    assert!(t.rosters[..8].iter().all(|r| r.region == "North America"));
    assert!(t.rosters[8..].iter().all(|r| r.region == "Europe"));
}

#[test]
fn games_carry_derived_outcomes() {
    let t = run(1);
    assert_eq!(t.games.len(), 5);

    for g in &t.games {
        assert_eq!(g.goals_scored, g.team0_score + g.team1_score);
        assert_eq!(g.team0_win, g.team0_score > g.team1_score);
        assert_eq!(g.team1_win, g.team1_score > g.team0_score);
        assert!(!(g.team0_win && g.team1_win));
        assert!(g.team0_players.windows(2).all(|w| w[0] <= w[1]));
        assert!(g.team1_players.windows(2).all(|w| w[0] <= w[1]));
    }

    let numbers: Vec<u32> = t.games[..3].iter().map(|g| g.game_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let ot = &t.games[1];
    assert!(ot.overtime);
    assert_eq!(ot.overtime_duration, "1:23");
    assert_eq!(ot.team0_players, vec!["Ace", "Bolt"]);
    assert_eq!(ot.match_time, "June 20, 2020 - 18:00 EDT");

    // suffix-only overtime marker
    let eu = &t.games[4];
    assert_eq!((eu.region.as_str(), eu.overtime, eu.overtime_duration.as_str()), ("Europe", true, "0:45"));

    assert!(t.games.iter().filter(|g| !g.overtime).all(|g| g.overtime_duration == "0:00"));
}

#[test]
fn short_player_list_is_reported_not_fatal() {
    let t = run(1);
    assert_eq!(t.warnings.len(), 1);
    let w = &t.warnings[0];
    assert_eq!((w.team0.as_str(), w.team1.as_str()), ("Charlie", "Delta"));
    assert_eq!((w.expected, w.team0_count, w.team1_count), (1, 1, 0));
    assert!(t.games.iter().any(|g| g.team0 == "Charlie"));
}

#[test]
fn standings_match_the_bracket() {
    let t = run(1);
    let keys: Vec<(&str, u32, &str)> = t
        .standings
        .iter()
        .map(|s| (s.team.as_str(), s.player_count_per_side, s.region.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("Alpha", 2, "Europe"),
            ("Alpha", 2, "North America"),
            ("Bravo", 2, "North America"),
            ("Foxtrot", 2, "Europe"),
            ("Charlie", 1, "North America"),
            ("Delta", 1, "North America"),
        ]
    );

    let alpha_na = &t.standings[1];
    assert_eq!(
        (alpha_na.wins, alpha_na.games_played, alpha_na.losses, alpha_na.win_percentage),
        (2, 3, 1, 67)
    );
    assert_eq!((alpha_na.goals_for, alpha_na.goals_against), (5, 3));

    for s in &t.standings {
        assert_eq!(s.wins + s.losses, s.games_played);
        assert!(s.wins <= s.games_played);
        assert!(s.win_percentage <= 100);
    }

    // every team side of every game is counted exactly once
    let gp: u32 = t.standings.iter().map(|s| s.games_played).sum();
    assert_eq!(gp as usize, 2 * t.games.len());
    let gf: u32 = t.standings.iter().map(|s| s.goals_for).sum();
    let ga: u32 = t.standings.iter().map(|s| s.goals_against).sum();
    let goals: u32 = t.games.iter().map(|g| g.goals_scored).sum();
    assert_eq!((gf, ga), (goals, goals));
}

#[test]
fn incomplete_rosters_can_be_left_out_of_standings() {
    let provider = FileProvider::new(fixtures());
    let mut o = opts(1);
    o.exclude_incomplete_rosters = true;
    let t = scrape::collect(&provider, &o, None).unwrap();

    assert_eq!(t.games.len(), 5);
    assert_eq!(t.warnings.len(), 1);
    assert_eq!(t.standings.len(), 4);
    assert!(t.standings.iter().all(|s| s.team != "Charlie" && s.team != "Delta"));
}

#[test]
fn same_input_same_output() {
    let a = run(1);
    let b = run(1);
    assert_eq!(a, b);
    assert_eq!(a.to_datasets(), b.to_datasets());
}

#[test]
fn parallel_matches_sequential() {
    assert_eq!(run(2), run(1));
}

#[test]
fn missing_page_fails_the_whole_run() {
    let provider = FileProvider::new(fixtures());
    let mut o = opts(1);
    o.regions.push("Oceania".into());
    match scrape::collect(&provider, &o, None) {
        Err(ScrapeError::Fetch { region, .. }) => assert_eq!(region, "Oceania"),
        other => panic!("expected fetch error, got {:?}", other.map(|t| t.games.len())),
    }
}

#[test]
fn broken_page_names_region_and_match() {
    let dir = tempfile::tempdir().unwrap();
    let page = std::fs::read_to_string(fixtures().join("Europe.html"))
        .unwrap()
        .replace(">4</div>", ">four</div>");
    std::fs::write(dir.path().join("Europe.html"), page).unwrap();

    let provider = FileProvider::new(dir.path());
    let o = ScrapeOptions { regions: vec!["Europe".into()], ..opts(1) };
    match scrape::collect(&provider, &o, None) {
        Err(ScrapeError::Parse { region, source: ParseError::BadScore { unit, raw, .. } }) => {
            assert_eq!(region, "Europe");
            assert_eq!(unit, "Alpha vs Foxtrot");
            assert_eq!(raw, "four");
        }
        other => panic!("expected parse error, got {:?}", other.map(|t| t.games.len())),
    }
}
