use chrono::NaiveDate;
use serde::Serialize;

use super::{DateRange, TournamentFilter};
use crate::model::Match;

/// Result of a fixture seen from the two teams that were asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeResult {
    Team1Win,
    Team2Win,
    Draw,
}

impl RelativeResult {
    pub fn label(self, team1: &str, team2: &str) -> String {
        match self {
            RelativeResult::Team1Win => format!("{team1} Win"),
            RelativeResult::Team2Win => format!("{team2} Win"),
            RelativeResult::Draw => "Draw".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadToHeadRow<'a> {
    pub fixture: &'a Match,
    pub result: RelativeResult,
    pub label: String,
}

/// Matches between `team1` and `team2` in either orientation, in corpus order.
pub fn head_to_head<'a>(
    matches: &'a [Match],
    team1: &str,
    team2: &str,
    tournament: &TournamentFilter,
    dates: DateRange,
) -> Vec<HeadToHeadRow<'a>> {
    if team1 == team2 || dates.is_empty() {
        return Vec::new();
    }
    matches
        .iter()
        .filter(|m| is_pairing(m, team1, team2))
        .filter(|m| tournament.matches(&m.tournament))
        .filter(|m| dates.contains(m.date))
        .map(|m| {
            let result = relative_result(m, team1, team2);
            HeadToHeadRow {
                fixture: m,
                result,
                label: result.label(team1, team2),
            }
        })
        .collect()
}

fn is_pairing(m: &Match, team1: &str, team2: &str) -> bool {
    (m.home_team == team1 && m.away_team == team2)
        || (m.home_team == team2 && m.away_team == team1)
}

pub fn relative_result(m: &Match, team1: &str, team2: &str) -> RelativeResult {
    match m.winner() {
        Some(w) if w == team1 => RelativeResult::Team1Win,
        Some(w) if w == team2 => RelativeResult::Team2Win,
        _ => RelativeResult::Draw,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShootoutLine {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub winner: Option<String>,
}

/// Win/draw counts and the shootout sub-table for a head-to-head selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadToHeadSummary {
    pub team1: String,
    pub team2: String,
    pub total: usize,
    pub team1_wins: usize,
    pub team2_wins: usize,
    pub draws: usize,
    pub shootouts: Vec<ShootoutLine>,
}

impl HeadToHeadSummary {
    pub fn from_rows(team1: &str, team2: &str, rows: &[HeadToHeadRow<'_>]) -> Self {
        let mut out = Self {
            team1: team1.to_string(),
            team2: team2.to_string(),
            total: rows.len(),
            team1_wins: 0,
            team2_wins: 0,
            draws: 0,
            shootouts: Vec::new(),
        };
        for row in rows {
            match row.result {
                RelativeResult::Team1Win => out.team1_wins += 1,
                RelativeResult::Team2Win => out.team2_wins += 1,
                RelativeResult::Draw => out.draws += 1,
            }
            if row.fixture.had_shootout {
                out.shootouts.push(ShootoutLine {
                    date: row.fixture.date,
                    home_team: row.fixture.home_team.clone(),
                    away_team: row.fixture.away_team.clone(),
                    winner: row.fixture.shootout_winner.clone(),
                });
            }
        }
        out
    }

    /// `(label, count)` pairs in team1, team2, draw order, skipping zeros.
    pub fn label_counts(&self) -> Vec<(String, usize)> {
        [
            (RelativeResult::Team1Win, self.team1_wins),
            (RelativeResult::Team2Win, self.team2_wins),
            (RelativeResult::Draw, self.draws),
        ]
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(r, n)| (r.label(&self.team1, &self.team2), n))
        .collect()
    }
}
