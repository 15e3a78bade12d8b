use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;

use crate::model::{GoalEvent, Match};
use crate::query::DateRange;

/// Home teams in the order they first appear.
pub fn teams(matches: &[Match]) -> Vec<&str> {
    let mut seen = HashSet::new();
    matches
        .iter()
        .map(|m| m.home_team.as_str())
        .filter(|t| seen.insert(*t))
        .collect()
}

pub fn tournaments(matches: &[Match]) -> Vec<&str> {
    matches
        .iter()
        .map(|m| m.tournament.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn scorers(goals: &[GoalEvent]) -> Vec<&str> {
    goals
        .iter()
        .map(|g| g.scorer.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Earliest and latest match dates, or `None` for an empty corpus.
pub fn date_bounds(matches: &[Match]) -> Option<DateRange> {
    let start: NaiveDate = matches.iter().map(|m| m.date).min()?;
    let end: NaiveDate = matches.iter().map(|m| m.date).max()?;
    Some(DateRange::new(start, end))
}
