// src/standings.rs
//
// Team standings from the combined game list.
//
// Two grouping passes over the same immutable slice (team0 as subject, then
// team1 as subject) produce two independent maps; a merge-by-key sums them.
// Nothing is accumulated in place across passes.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::records::{GameRecord, TeamStanding};

/// (team, player_count_per_side, region)
type Key = (String, u32, String);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Tally {
    wins: u32,
    games: u32,
    goals_for: u32,
    goals_against: u32,
}

impl Tally {
    fn add(self, other: Tally) -> Tally {
        Tally {
            wins: self.wins.saturating_add(other.wins),
            games: self.games.saturating_add(other.games),
            goals_for: self.goals_for.saturating_add(other.goals_for),
            goals_against: self.goals_against.saturating_add(other.goals_against),
        }
    }
}

#[derive(Clone, Copy)]
enum Side {
    Team0,
    Team1,
}

/// One grouping pass with `side` as the subject team.
fn group_by_side(games: &[GameRecord], side: Side) -> BTreeMap<Key, Tally> {
    let mut groups: BTreeMap<Key, Tally> = BTreeMap::new();
    for g in games {
        let (team, won, own, opp) = match side {
            Side::Team0 => (&g.team0, g.team0_win, g.team0_score, g.team1_score),
            Side::Team1 => (&g.team1, g.team1_win, g.team1_score, g.team0_score),
        };
        let key = (team.clone(), g.player_count_per_side, g.region.clone());
        let entry = groups.entry(key).or_default();
        *entry = entry.add(Tally {
            wins: u32::from(won),
            games: 1,
            goals_for: own,
            goals_against: opp,
        });
    }
    groups
}

/// Sum two groupings; a key missing on one side counts as zero there.
fn merge(home: BTreeMap<Key, Tally>, away: BTreeMap<Key, Tally>) -> BTreeMap<Key, Tally> {
    let mut merged = home;
    for (key, tally) in away {
        let sum = merged.get(&key).copied().unwrap_or_default().add(tally);
        merged.insert(key, sum);
    }
    merged
}

/// `round(100 * wins / games)`, halves to even; 0 when no games were played.
pub fn win_percentage(wins: u32, games: u32) -> u32 {
    if games == 0 {
        return 0;
    }
    (100.0 * f64::from(wins) / f64::from(games)).round_ties_even() as u32
}

/// Output order: game type desc, win % desc, wins desc, games played desc, team asc, region asc.
pub fn standing_order(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.player_count_per_side.cmp(&a.player_count_per_side)
        .then_with(|| b.win_percentage.cmp(&a.win_percentage))
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| b.games_played.cmp(&a.games_played))
        .then_with(|| a.team.cmp(&b.team))
        .then_with(|| a.region.cmp(&b.region))
}

/// Standings for every (team, game type, region) seen in `games`, sorted.
pub fn aggregate(games: &[GameRecord]) -> Vec<TeamStanding> {
    let home = group_by_side(games, Side::Team0);
    let away = group_by_side(games, Side::Team1);

    let mut out: Vec<TeamStanding> = merge(home, away)
        .into_iter()
        .map(|((team, player_count_per_side, region), t)| TeamStanding {
            team,
            player_count_per_side,
            region,
            wins: t.wins,
            games_played: t.games,
            goals_for: t.goals_for,
            goals_against: t.goals_against,
            losses: t.games - t.wins,
            win_percentage: win_percentage(t.wins, t.games),
        })
        .collect();

    out.sort_by(standing_order);
    out
}
