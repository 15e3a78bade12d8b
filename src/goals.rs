use std::collections::HashMap;

use serde::Deserialize;

use crate::error::RowError;
use crate::model::{GoalEvent, Match, MatchKey, non_empty, parse_date, parse_flag};
use crate::results::{ParsedRows, numbered};

/// One line of `goalscorers.csv`, exactly as read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGoalRow {
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub team: String,
    pub scorer: String,
    pub minute: String,
    #[serde(default)]
    pub own_goal: String,
    pub penalty: String,
}

impl RawGoalRow {
    pub fn new(
        date: &str,
        home_team: &str,
        away_team: &str,
        scorer: &str,
        minute: u16,
        penalty: bool,
    ) -> Self {
        Self {
            date: date.to_string(),
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            scorer: scorer.to_string(),
            minute: minute.to_string(),
            penalty: if penalty { "TRUE" } else { "FALSE" }.to_string(),
            ..Self::default()
        }
    }
}

/// Parses goal rows and joins each to its parent match's tournament.
///
/// A goal whose `(date, home, away)` matches no result row keeps
/// `tournament: None`; it is not an error.
pub fn parse_goals(raw: &[RawGoalRow], matches: &[Match]) -> ParsedRows<GoalEvent> {
    parse_numbered_goals(numbered(raw), matches)
}

pub fn parse_numbered_goals<'r>(
    raw: impl IntoIterator<Item = (usize, &'r RawGoalRow)>,
    matches: &[Match],
) -> ParsedRows<GoalEvent> {
    let tournaments = tournament_lookup(matches);
    let mut rows = Vec::new();
    let mut errors = Vec::new();
    for (row_no, row) in raw {
        match parse_goal_row(row_no, row) {
            Ok(mut goal) => {
                let tournament = tournaments.get(&goal.key()).map(|t| t.to_string());
                goal.tournament = tournament;
                rows.push(goal);
            }
            Err(err) => errors.push(err),
        }
    }
    ParsedRows { rows, errors }
}

fn tournament_lookup(matches: &[Match]) -> HashMap<MatchKey<'_>, &str> {
    let mut out = HashMap::with_capacity(matches.len());
    for m in matches {
        out.entry(m.key()).or_insert(m.tournament.as_str());
    }
    out
}

pub fn parse_goal_row(row_no: usize, raw: &RawGoalRow) -> Result<GoalEvent, RowError> {
    let malformed = |reason: String| RowError::MalformedGoalRow {
        row: row_no,
        reason,
    };
    let date = parse_date(&raw.date)
        .ok_or_else(|| malformed(format!("malformed date {:?}", raw.date)))?;
    let minute = raw
        .minute
        .trim()
        .parse::<u16>()
        .map_err(|_| malformed(format!("malformed minute {:?}", raw.minute)))?;
    let penalty = parse_flag(&raw.penalty)
        .ok_or_else(|| malformed(format!("malformed penalty flag {:?}", raw.penalty)))?;
    let scorer = raw.scorer.trim();
    if scorer.is_empty() {
        return Err(malformed("missing scorer".to_string()));
    }

    Ok(GoalEvent {
        date,
        home_team: raw.home_team.trim().to_string(),
        away_team: raw.away_team.trim().to_string(),
        team: non_empty(&raw.team),
        scorer: scorer.to_string(),
        minute,
        own_goal: parse_flag(&raw.own_goal).unwrap_or(false),
        penalty,
        tournament: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{RawMatchRow, parse_matches};

    #[test]
    fn joins_tournament_and_tolerates_orphans() {
        let matches = parse_matches(&[RawMatchRow::new(
            "2014-07-13",
            "Germany",
            "Argentina",
            1,
            0,
            "FIFA World Cup",
        )])
        .rows;
        let raw = vec![
            RawGoalRow::new("2014-07-13", "Germany", "Argentina", "Mario Götze", 113, false),
            RawGoalRow::new("2014-07-14", "Germany", "Argentina", "Nobody", 5, false),
        ];
        let parsed = parse_goals(&raw, &matches);
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.rows[0].tournament.as_deref(), Some("FIFA World Cup"));
        assert_eq!(parsed.rows[0].minute, 113);
        assert_eq!(parsed.rows[1].tournament, None);
    }

    #[test]
    fn excludes_rows_with_bad_minute_or_date() {
        let mut no_minute = RawGoalRow::new("2014-07-13", "Germany", "Argentina", "X", 0, false);
        no_minute.minute = "NA".to_string();
        let mut bad_date = RawGoalRow::new("2014-07-13", "Germany", "Argentina", "Y", 10, true);
        bad_date.date = "13/07/2014".to_string();
        let mut odd_penalty = RawGoalRow::new("2014-07-13", "Germany", "Argentina", "W", 45, false);
        odd_penalty.penalty = "maybe".to_string();
        let no_scorer = RawGoalRow::new("2014-07-13", "Germany", "Argentina", "  ", 60, false);
        let ok = RawGoalRow::new("2014-07-13", "Germany", "Argentina", "Z", 90, true);

        let parsed = parse_goals(&[no_minute, bad_date, odd_penalty, no_scorer, ok], &[]);
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].scorer, "Z");
        assert!(parsed.rows[0].penalty);
        assert_eq!(parsed.errors.len(), 4);
        let rows: Vec<usize> = parsed.errors.iter().map(RowError::row).collect();
        assert_eq!(rows, vec![1, 2, 3, 4]);
        assert!(matches!(
            &parsed.errors[2],
            RowError::MalformedGoalRow { reason, .. } if reason.contains("penalty")
        ));
        assert!(matches!(
            &parsed.errors[3],
            RowError::MalformedGoalRow { reason, .. } if reason == "missing scorer"
        ));
    }

    #[test]
    fn keeps_source_row_numbers() {
        let mut bad_date = RawGoalRow::new("2014-07-13", "Germany", "Argentina", "Y", 10, false);
        bad_date.date = "bad".to_string();
        let ok = RawGoalRow::new("2014-07-13", "Germany", "Argentina", "Z", 90, false);
        let parsed = parse_numbered_goals([(4, &ok), (7, &bad_date)], &[]);
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.errors[0].row(), 7);
    }
}
