use std::collections::{BTreeSet, HashSet};

use chrono::Datelike;
use rayon::prelude::*;
use serde::Serialize;

use crate::model::{Match, Outcome};

/// Picks the deciding fixture of a tournament edition from its matches.
///
/// `selection` is in corpus order and never empty.
pub trait FinalSelector {
    fn select_final<'a>(&self, selection: &[&'a Match]) -> Option<&'a Match>;
}

/// The last fixture in corpus order. Relies on the source listing each
/// edition chronologically with the final last.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastInInputOrder;

impl FinalSelector for LastInInputOrder {
    fn select_final<'a>(&self, selection: &[&'a Match]) -> Option<&'a Match> {
        selection.last().copied()
    }
}

/// The fixture with the latest date; same-day ties go to the later row.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatestDate;

impl FinalSelector for LatestDate {
    fn select_final<'a>(&self, selection: &[&'a Match]) -> Option<&'a Match> {
        // max_by_key returns the last maximum, which is the tie rule we want.
        selection.iter().copied().max_by_key(|m| m.date)
    }
}

impl<F> FinalSelector for F
where
    F: for<'a> Fn(&[&'a Match]) -> Option<&'a Match>,
{
    fn select_final<'a>(&self, selection: &[&'a Match]) -> Option<&'a Match> {
        self(selection)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "team", rename_all = "snake_case")]
pub enum FinalWinner {
    Team(String),
    Draw,
}

impl FinalWinner {
    pub fn team(&self) -> Option<&str> {
        match self {
            FinalWinner::Team(t) => Some(t.as_str()),
            FinalWinner::Draw => None,
        }
    }
}

impl std::fmt::Display for FinalWinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinalWinner::Team(t) => f.write_str(t),
            FinalWinner::Draw => f.write_str("Draw"),
        }
    }
}

/// Winner of a deciding fixture, with drawn games settled by shootout.
///
/// A drawn game marked as a shootout but without a recorded winner falls
/// back to a score comparison, which for level scores names the away side.
pub fn resolve_final_winner(m: &Match) -> FinalWinner {
    match m.outcome {
        Outcome::Draw if m.had_shootout => match &m.shootout_winner {
            Some(winner) => FinalWinner::Team(winner.clone()),
            None if m.home_score > m.away_score => FinalWinner::Team(m.home_team.clone()),
            None => FinalWinner::Team(m.away_team.clone()),
        },
        Outcome::Draw => FinalWinner::Draw,
        Outcome::HomeWin => FinalWinner::Team(m.home_team.clone()),
        Outcome::AwayWin => FinalWinner::Team(m.away_team.clone()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalResult {
    pub fixture: Match,
    pub winner: FinalWinner,
    pub decided_by_shootout: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentSummary {
    pub tournament: String,
    pub year: i32,
    pub match_count: usize,
    pub goal_count: u32,
    pub team_count: usize,
    pub avg_goals: f64,
    /// `None` only when a custom selector declines to pick a fixture.
    pub final_match: Option<FinalResult>,
}

/// Aggregates for one edition; `None` when the tournament has no matches
/// that year.
pub fn tournament_summary(
    matches: &[Match],
    tournament: &str,
    year: i32,
    selector: &impl FinalSelector,
) -> Option<TournamentSummary> {
    let selection: Vec<&Match> = matches
        .iter()
        .filter(|m| m.tournament == tournament && m.date.year() == year)
        .collect();
    if selection.is_empty() {
        return None;
    }

    let match_count = selection.len();
    let goal_count: u32 = selection.iter().map(|m| m.total_goals()).sum();
    let team_count = selection
        .iter()
        .flat_map(|m| [m.home_team.as_str(), m.away_team.as_str()])
        .collect::<HashSet<_>>()
        .len();
    let avg_goals = if match_count > 0 {
        f64::from(goal_count) / match_count as f64
    } else {
        0.0
    };

    let final_match = selector.select_final(&selection).map(|m| FinalResult {
        fixture: m.clone(),
        winner: resolve_final_winner(m),
        decided_by_shootout: m.outcome == Outcome::Draw && m.had_shootout,
    });

    Some(TournamentSummary {
        tournament: tournament.to_string(),
        year,
        match_count,
        goal_count,
        team_count,
        avg_goals,
        final_match,
    })
}

/// One summary per year the tournament was played, oldest first.
pub fn tournament_history<S>(matches: &[Match], tournament: &str, selector: &S) -> Vec<TournamentSummary>
where
    S: FinalSelector + Sync,
{
    let years: BTreeSet<i32> = matches
        .iter()
        .filter(|m| m.tournament == tournament)
        .map(|m| m.date.year())
        .collect();
    let years: Vec<i32> = years.into_iter().collect();
    years
        .par_iter()
        .filter_map(|year| tournament_summary(matches, tournament, *year, selector))
        .collect()
}
