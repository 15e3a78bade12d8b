use std::collections::BTreeMap;

use serde::Serialize;

use super::{DateRange, TournamentFilter};
use crate::model::GoalEvent;

/// Goals scored by either player, in corpus order.
pub fn player_goals<'a>(
    goals: &'a [GoalEvent],
    player1: &str,
    player2: &str,
    tournament: &TournamentFilter,
    dates: DateRange,
) -> Vec<&'a GoalEvent> {
    if dates.is_empty() {
        return Vec::new();
    }
    goals
        .iter()
        .filter(|g| g.scorer == player1 || g.scorer == player2)
        .filter(|g| dates.contains(g.date))
        .filter(|g| tournament.matches_opt(g.tournament.as_deref()))
        .collect()
}

pub fn goals_by_scorer<'a, I>(goals: I) -> BTreeMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a GoalEvent>,
{
    let mut out = BTreeMap::new();
    for g in goals {
        *out.entry(g.scorer.as_str()).or_insert(0) += 1;
    }
    out
}

pub fn penalties_by_scorer<'a, I>(goals: I) -> BTreeMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a GoalEvent>,
{
    goals_by_scorer(goals.into_iter().filter(|g| g.penalty))
}

/// Minute of play → number of goals.
pub fn minute_distribution<'a, I>(goals: I) -> BTreeMap<u16, usize>
where
    I: IntoIterator<Item = &'a GoalEvent>,
{
    let mut out = BTreeMap::new();
    for g in goals {
        *out.entry(g.minute).or_insert(0) += 1;
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerTally {
    pub player: String,
    pub goals: usize,
    pub penalties: usize,
    pub minutes: BTreeMap<u16, usize>,
}

/// Per-player tallies for a comparison; both players are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerComparison {
    pub players: Vec<PlayerTally>,
}

impl PlayerComparison {
    pub fn from_goals(player1: &str, player2: &str, goals: &[&GoalEvent]) -> Self {
        let mut names = vec![player1];
        if player2 != player1 {
            names.push(player2);
        }
        let players = names
            .into_iter()
            .map(|name| {
                let own: Vec<&GoalEvent> =
                    goals.iter().copied().filter(|g| g.scorer == name).collect();
                PlayerTally {
                    player: name.to_string(),
                    goals: own.len(),
                    penalties: own.iter().filter(|g| g.penalty).count(),
                    minutes: minute_distribution(own.iter().copied()),
                }
            })
            .collect();
        Self { players }
    }

    pub fn tally(&self, player: &str) -> Option<&PlayerTally> {
        self.players.iter().find(|t| t.player == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn goal(scorer: &str, minute: u16, penalty: bool, tournament: Option<&str>) -> GoalEvent {
        GoalEvent {
            date: NaiveDate::from_ymd_opt(2018, 6, 15).unwrap(),
            home_team: "Portugal".to_string(),
            away_team: "Spain".to_string(),
            team: None,
            scorer: scorer.to_string(),
            minute,
            own_goal: false,
            penalty,
            tournament: tournament.map(str::to_string),
        }
    }

    #[test]
    fn groupings_are_by_scorer_penalty_and_minute() {
        let goals = vec![
            goal("Cristiano Ronaldo", 4, true, Some("FIFA World Cup")),
            goal("Diego Costa", 24, false, Some("FIFA World Cup")),
            goal("Cristiano Ronaldo", 44, false, Some("FIFA World Cup")),
            goal("Diego Costa", 55, false, Some("FIFA World Cup")),
            goal("Nacho", 58, false, Some("FIFA World Cup")),
            goal("Cristiano Ronaldo", 88, false, Some("FIFA World Cup")),
        ];
        let picked = player_goals(
            &goals,
            "Cristiano Ronaldo",
            "Diego Costa",
            &TournamentFilter::all(),
            DateRange::unbounded(),
        );
        assert_eq!(picked.len(), 5);

        let by_scorer = goals_by_scorer(picked.iter().copied());
        assert_eq!(by_scorer["Cristiano Ronaldo"], 3);
        assert_eq!(by_scorer["Diego Costa"], 2);

        let pens = penalties_by_scorer(picked.iter().copied());
        assert_eq!(pens.get("Cristiano Ronaldo"), Some(&1));
        assert_eq!(pens.get("Diego Costa"), None);

        let minutes = minute_distribution(picked.iter().copied());
        assert_eq!(minutes.len(), 5);
        assert_eq!(minutes[&88], 1);
    }

    #[test]
    fn comparison_keeps_scoreless_player() {
        let goals = vec![goal("Pelé", 10, false, None)];
        let refs: Vec<&GoalEvent> = goals.iter().collect();
        let cmp = PlayerComparison::from_goals("Pelé", "Garrincha", &refs);
        assert_eq!(cmp.players.len(), 2);
        assert_eq!(cmp.tally("Pelé").map(|t| t.goals), Some(1));
        assert_eq!(cmp.tally("Garrincha").map(|t| t.goals), Some(0));

        let same = PlayerComparison::from_goals("Pelé", "Pelé", &refs);
        assert_eq!(same.players.len(), 1);
    }

    #[test]
    fn missing_tournament_only_passes_all_filter() {
        let goals = vec![goal("Pelé", 10, false, None)];
        let filtered = player_goals(
            &goals,
            "Pelé",
            "Pelé",
            &TournamentFilter::new("cup"),
            DateRange::unbounded(),
        );
        assert!(filtered.is_empty());
        let all = player_goals(
            &goals,
            "Pelé",
            "Pelé",
            &TournamentFilter::all(),
            DateRange::unbounded(),
        );
        assert_eq!(all.len(), 1);
    }
}
