use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{RowError, Table};
use crate::model::{Match, MatchKey, ShootoutRecord, non_empty, parse_date};
use crate::results::{ParsedRows, numbered};

/// One line of `shootouts.csv`, exactly as read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawShootoutRow {
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub winner: String,
    #[serde(default)]
    pub first_shooter: String,
}

impl RawShootoutRow {
    pub fn new(date: &str, home_team: &str, away_team: &str, winner: &str) -> Self {
        Self {
            date: date.to_string(),
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            winner: winner.to_string(),
            first_shooter: String::new(),
        }
    }
}

pub fn parse_shootouts(raw: &[RawShootoutRow]) -> ParsedRows<ShootoutRecord> {
    parse_numbered_shootouts(numbered(raw))
}

pub fn parse_numbered_shootouts<'r>(
    raw: impl IntoIterator<Item = (usize, &'r RawShootoutRow)>,
) -> ParsedRows<ShootoutRecord> {
    let mut rows = Vec::new();
    let mut errors = Vec::new();
    for (row_no, row) in raw {
        let Some(date) = parse_date(&row.date) else {
            errors.push(RowError::MalformedDate {
                table: Table::Shootouts,
                row: row_no,
                value: row.date.clone(),
            });
            continue;
        };
        rows.push(ShootoutRecord {
            date,
            home_team: row.home_team.trim().to_string(),
            away_team: row.away_team.trim().to_string(),
            winner: non_empty(&row.winner),
            first_shooter: non_empty(&row.first_shooter),
        });
    }
    ParsedRows { rows, errors }
}

/// Shootout winners keyed by the exact `(date, home, away)` orientation.
#[derive(Debug)]
pub struct ShootoutIndex<'a> {
    winners: HashMap<MatchKey<'a>, Option<&'a str>>,
    duplicates: usize,
}

impl<'a> ShootoutIndex<'a> {
    /// First record for a key wins; later ones only bump [`Self::duplicates`].
    pub fn build(records: &'a [ShootoutRecord]) -> Self {
        let mut winners = HashMap::with_capacity(records.len());
        let mut duplicates = 0usize;
        for record in records {
            if winners.contains_key(&record.key()) {
                tracing::debug!(
                    date = %record.date,
                    home = %record.home_team,
                    away = %record.away_team,
                    "duplicate shootout row ignored"
                );
                duplicates += 1;
                continue;
            }
            winners.insert(record.key(), record.winner.as_deref());
        }
        Self {
            winners,
            duplicates,
        }
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn len(&self) -> usize {
        self.winners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }

    /// `None` when no shootout took place; `Some(None)` when one did but the
    /// winner cell was blank.
    pub fn lookup<'k>(&'k self, key: &MatchKey<'k>) -> Option<Option<&'k str>> {
        self.winners.get(key).copied()
    }

    /// Sets `had_shootout` / `shootout_winner` on every match and returns how
    /// many were linked.
    pub fn annotate(&self, matches: &mut [Match]) -> usize {
        let mut linked = 0usize;
        for m in matches.iter_mut() {
            let found = self.lookup(&m.key()).map(|w| w.map(str::to_string));
            match found {
                Some(winner) => {
                    m.had_shootout = true;
                    m.shootout_winner = winner;
                    linked += 1;
                }
                None => {
                    m.had_shootout = false;
                    m.shootout_winner = None;
                }
            }
        }
        linked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{RawMatchRow, parse_matches};

    fn matches() -> Vec<Match> {
        parse_matches(&[
            RawMatchRow::new("2022-12-18", "Argentina", "France", 3, 3, "FIFA World Cup"),
            RawMatchRow::new("2022-12-17", "Croatia", "Morocco", 2, 1, "FIFA World Cup"),
        ])
        .rows
    }

    #[test]
    fn links_on_exact_key() {
        let shootouts = parse_shootouts(&[RawShootoutRow::new(
            "2022-12-18",
            "Argentina",
            "France",
            "Argentina",
        )]);
        let index = ShootoutIndex::build(&shootouts.rows);
        let mut matches = matches();
        assert_eq!(index.annotate(&mut matches), 1);
        assert!(matches[0].had_shootout);
        assert_eq!(matches[0].shootout_winner.as_deref(), Some("Argentina"));
        assert!(!matches[1].had_shootout);
        assert_eq!(matches[1].shootout_winner, None);
    }

    #[test]
    fn first_duplicate_wins() {
        let shootouts = parse_shootouts(&[
            RawShootoutRow::new("2022-12-18", "Argentina", "France", "Argentina"),
            RawShootoutRow::new("2022-12-18", "Argentina", "France", "France"),
        ]);
        let index = ShootoutIndex::build(&shootouts.rows);
        assert_eq!(index.len(), 1);
        assert_eq!(index.duplicates(), 1);
        let mut matches = matches();
        index.annotate(&mut matches);
        assert_eq!(matches[0].shootout_winner.as_deref(), Some("Argentina"));
    }

    #[test]
    fn reversed_orientation_is_not_linked() {
        let shootouts = parse_shootouts(&[RawShootoutRow::new(
            "2022-12-18",
            "France",
            "Argentina",
            "Argentina",
        )]);
        let index = ShootoutIndex::build(&shootouts.rows);
        let mut matches = matches();
        assert_eq!(index.annotate(&mut matches), 0);
        assert!(!matches[0].had_shootout);
    }

    #[test]
    fn blank_winner_still_marks_shootout() {
        let shootouts = parse_shootouts(&[RawShootoutRow::new(
            "2022-12-18",
            "Argentina",
            "France",
            "",
        )]);
        let index = ShootoutIndex::build(&shootouts.rows);
        let mut matches = matches();
        index.annotate(&mut matches);
        assert!(matches[0].had_shootout);
        assert_eq!(matches[0].shootout_winner, None);
    }

    #[test]
    fn bad_date_is_reported() {
        let parsed = parse_shootouts(&[RawShootoutRow::new("?", "A", "B", "A")]);
        assert!(parsed.rows.is_empty());
        assert_eq!(parsed.errors.len(), 1);
    }
}
