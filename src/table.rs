// src/table.rs
//
// Typed records → string rows with a fixed column order.

use crate::config::consts::PLAYER_LIST_SEP;
use crate::records::{GameRecord, PlayerRosterEntry, TeamStanding};
use crate::store::DataSet;

pub trait TableRow {
    const HEADERS: &'static [&'static str];
    fn to_row(&self) -> Vec<String>;
}

impl TableRow for PlayerRosterEntry {
    const HEADERS: &'static [&'static str] =
        &["player", "country", "jersey_number", "team", "team_url", "region"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.player.clone(),
            self.country.clone(),
            self.jersey_number.clone(),
            self.team.clone(),
            self.team_url.clone(),
            self.region.clone(),
        ]
    }
}

impl TableRow for GameRecord {
    const HEADERS: &'static [&'static str] = &[
        "team0", "team1", "team0_score", "team1_score", "overtime", "overtime_duration",
        "team0_players", "team1_players", "game_number", "player_count_per_side",
        "match_time", "region", "team0_match_score", "team1_match_score",
        "team0_win", "team1_win", "goals_scored",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.team0.clone(),
            self.team1.clone(),
            self.team0_score.to_string(),
            self.team1_score.to_string(),
            self.overtime.to_string(),
            self.overtime_duration.clone(),
            self.team0_players.join(PLAYER_LIST_SEP),
            self.team1_players.join(PLAYER_LIST_SEP),
            self.game_number.to_string(),
            self.player_count_per_side.to_string(),
            self.match_time.clone(),
            self.region.clone(),
            self.team0_match_score.clone(),
            self.team1_match_score.clone(),
            self.team0_win.to_string(),
            self.team1_win.to_string(),
            self.goals_scored.to_string(),
        ]
    }
}

impl TableRow for TeamStanding {
    const HEADERS: &'static [&'static str] = &[
        "Team", "Game Type", "Region", "Wins", "Games Played", "GF", "GA", "Win Percentage", "Losses",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.team.clone(),
            self.player_count_per_side.to_string(),
            self.region.clone(),
            self.wins.to_string(),
            self.games_played.to_string(),
            self.goals_for.to_string(),
            self.goals_against.to_string(),
            self.win_percentage.to_string(),
            self.losses.to_string(),
        ]
    }
}

pub fn to_dataset<R: TableRow>(records: &[R]) -> DataSet {
    DataSet {
        headers: R::HEADERS.iter().map(|h| s!(*h)).collect(),
        rows: records.iter().map(R::to_row).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_match_header_width() {
        let standing = TeamStanding {
            team: s!("Alpha"),
            player_count_per_side: 2,
            region: s!("Europe"),
            wins: 2,
            games_played: 3,
            goals_for: 5,
            goals_against: 3,
            losses: 1,
            win_percentage: 67,
        };
        let ds = to_dataset(&[standing]);
        assert_eq!(ds.headers.len(), ds.rows[0].len());
        assert_eq!(ds.rows[0], vec!["Alpha", "2", "Europe", "2", "3", "5", "3", "67", "1"]);
    }

    #[test]
    fn player_lists_are_joined() {
        let game = GameRecord {
            team0: s!("Alpha"),
            team1: s!("Bravo"),
            team0_score: 3,
            team1_score: 2,
            overtime: true,
            overtime_duration: s!("1:23"),
            team0_players: vec![s!("Ace"), s!("Bolt")],
            team1_players: vec![s!("Cog"), s!("Dart")],
            game_number: 2,
            player_count_per_side: 2,
            match_time: s!("June 20, 2020 - 18:00 EDT"),
            region: s!("North America"),
            team0_match_score: s!("2"),
            team1_match_score: s!("1"),
            team0_win: true,
            team1_win: false,
            goals_scored: 5,
        };
        let row = game.to_row();
        assert_eq!(row.len(), GameRecord::HEADERS.len());
        assert_eq!(row[4], "true");
        assert_eq!(row[6], "Ace; Bolt");
        assert_eq!(row[7], "Cog; Dart");
        assert_eq!(row[16], "5");
    }
}
