// src/records.rs
//
// Typed rows produced by the extractors and the aggregator.
// Everything here is immutable once built; the pipeline only moves them along.

use std::fmt;

/// One player on one team card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRosterEntry {
    pub player: String,
    pub country: String,
    pub jersey_number: String,
    pub team: String,
    pub team_url: String,
    pub region: String,
}

/// One individual game as read from the bracket, before outcomes are derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawGame {
    pub team0: String,
    pub team1: String,
    pub team0_score: u32,
    pub team1_score: u32,
    pub overtime: bool,
    /// "M:SS"; "0:00" without overtime
    pub overtime_duration: String,
    /// Sorted by name
    pub team0_players: Vec<String>,
    /// Sorted by name
    pub team1_players: Vec<String>,
    /// 1-based within the match
    pub game_number: u32,
    /// N of "NvN"
    pub player_count_per_side: u32,
    /// Raw timer text
    pub match_time: String,
    pub region: String,
    pub team0_match_score: String,
    pub team1_match_score: String,
}

impl RawGame {
    /// Both player lists hold exactly `player_count_per_side` names.
    pub fn has_full_rosters(&self) -> bool {
        let n = self.player_count_per_side as usize;
        self.team0_players.len() == n && self.team1_players.len() == n
    }
}

/// A game with its derived outcome fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub team0: String,
    pub team1: String,
    pub team0_score: u32,
    pub team1_score: u32,
    pub overtime: bool,
    pub overtime_duration: String,
    pub team0_players: Vec<String>,
    pub team1_players: Vec<String>,
    pub game_number: u32,
    pub player_count_per_side: u32,
    pub match_time: String,
    pub region: String,
    pub team0_match_score: String,
    pub team1_match_score: String,
    pub team0_win: bool,
    pub team1_win: bool,
    pub goals_scored: u32,
}

impl GameRecord {
    /// Equal scores are a tie: neither side wins.
    pub fn derive(raw: RawGame) -> Self {
        Self {
            team0_win: raw.team0_score > raw.team1_score,
            team1_win: raw.team1_score > raw.team0_score,
            goals_scored: raw.team0_score.saturating_add(raw.team1_score),
            team0: raw.team0,
            team1: raw.team1,
            team0_score: raw.team0_score,
            team1_score: raw.team1_score,
            overtime: raw.overtime,
            overtime_duration: raw.overtime_duration,
            team0_players: raw.team0_players,
            team1_players: raw.team1_players,
            game_number: raw.game_number,
            player_count_per_side: raw.player_count_per_side,
            match_time: raw.match_time,
            region: raw.region,
            team0_match_score: raw.team0_match_score,
            team1_match_score: raw.team1_match_score,
        }
    }

    pub fn has_full_rosters(&self) -> bool {
        let n = self.player_count_per_side as usize;
        self.team0_players.len() == n && self.team1_players.len() == n
    }
}

/// Derive outcome fields over the combined (all-region) game set, order preserved.
pub fn derive_games(raw: Vec<RawGame>) -> Vec<GameRecord> {
    raw.into_iter().map(GameRecord::derive).collect()
}

/// Player lists that don't match the bracket's NvN designation.
/// Reported, never fatal; the game is still emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataQualityWarning {
    pub region: String,
    pub team0: String,
    pub team1: String,
    pub game_number: u32,
    pub expected: u32,
    pub team0_count: usize,
    pub team1_count: usize,
}

impl DataQualityWarning {
    /// None when both sides have the expected number of players.
    pub fn check(game: &RawGame) -> Option<Self> {
        if game.has_full_rosters() {
            return None;
        }
        Some(Self {
            region: game.region.clone(),
            team0: game.team0.clone(),
            team1: game.team1.clone(),
            game_number: game.game_number,
            expected: game.player_count_per_side,
            team0_count: game.team0_players.len(),
            team1_count: game.team1_players.len(),
        })
    }
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} vs {} game {}: expected {} players per side, got {} and {}",
            self.region, self.team0, self.team1, self.game_number,
            self.expected, self.team0_count, self.team1_count
        )
    }
}

/// Aggregated record for one (team, game type, region).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamStanding {
    pub team: String,
    pub player_count_per_side: u32,
    pub region: String,
    pub wins: u32,
    pub games_played: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub losses: u32,
    pub win_percentage: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(team0_score: u32, team1_score: u32) -> RawGame {
        RawGame {
            team0: s!("Alpha"),
            team1: s!("Bravo"),
            team0_score,
            team1_score,
            overtime: false,
            overtime_duration: s!("0:00"),
            team0_players: vec![s!("a1"), s!("a2")],
            team1_players: vec![s!("b1"), s!("b2")],
            game_number: 1,
            player_count_per_side: 2,
            match_time: s!("June 20, 2020 - 18:00 EDT"),
            region: s!("North America"),
            team0_match_score: s!("2"),
            team1_match_score: s!("1"),
        }
    }

    #[test]
    fn outcome_follows_scores() {
        let g = GameRecord::derive(raw(3, 1));
        assert!(g.team0_win && !g.team1_win);
        assert_eq!(g.goals_scored, 4);

        let g = GameRecord::derive(raw(0, 2));
        assert!(!g.team0_win && g.team1_win);
    }

    #[test]
    fn tie_has_no_winner() {
        let g = GameRecord::derive(raw(2, 2));
        assert!(!g.team0_win && !g.team1_win);
        assert_eq!(g.goals_scored, 4);
    }

    #[test]
    fn goals_do_not_overflow() {
        let g = GameRecord::derive(raw(u32::MAX, 1));
        assert!(g.team0_win);
        assert_eq!(g.goals_scored, u32::MAX);
    }

    #[test]
    fn warning_only_for_short_lists() {
        let mut g = raw(1, 0);
        assert!(DataQualityWarning::check(&g).is_none());

        g.team1_players.pop();
        let w = DataQualityWarning::check(&g).unwrap();
        assert_eq!((w.expected, w.team0_count, w.team1_count), (2, 2, 1));
        assert!(w.to_string().contains("Alpha vs Bravo game 1"));
    }
}
