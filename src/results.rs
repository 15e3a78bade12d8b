use serde::Deserialize;

use crate::error::{RowError, Table};
use crate::model::{Match, Outcome, non_empty, parse_date, parse_flag};

/// One line of `results.csv`, exactly as read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMatchRow {
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: String,
    pub away_score: String,
    pub tournament: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub neutral: String,
}

impl RawMatchRow {
    pub fn new(
        date: &str,
        home_team: &str,
        away_team: &str,
        home_score: u16,
        away_score: u16,
        tournament: &str,
    ) -> Self {
        Self {
            date: date.to_string(),
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score: home_score.to_string(),
            away_score: away_score.to_string(),
            tournament: tournament.to_string(),
            ..Self::default()
        }
    }
}

/// Rows that parsed, in input order, plus the ones that did not.
#[derive(Debug, Clone)]
pub struct ParsedRows<T> {
    pub rows: Vec<T>,
    pub errors: Vec<RowError>,
}

/// Parses the raw results table. Shootout fields start out unset; see
/// [`crate::shootouts::ShootoutIndex::annotate`].
pub fn parse_matches(raw: &[RawMatchRow]) -> ParsedRows<Match> {
    parse_numbered_matches(numbered(raw))
}

/// Like [`parse_matches`], for rows that carry their 1-based source row number.
pub fn parse_numbered_matches<'r>(
    raw: impl IntoIterator<Item = (usize, &'r RawMatchRow)>,
) -> ParsedRows<Match> {
    let mut rows = Vec::new();
    let mut errors = Vec::new();
    for (row_no, row) in raw {
        match parse_match_row(row_no, row) {
            Ok(m) => rows.push(m),
            Err(err) => errors.push(err),
        }
    }
    ParsedRows { rows, errors }
}

/// Pairs each row with its 1-based position.
pub(crate) fn numbered<T>(raw: &[T]) -> impl Iterator<Item = (usize, &T)> {
    raw.iter().enumerate().map(|(idx, row)| (idx + 1, row))
}

pub fn parse_match_row(row_no: usize, raw: &RawMatchRow) -> Result<Match, RowError> {
    let date = parse_date(&raw.date).ok_or_else(|| RowError::MalformedDate {
        table: Table::Results,
        row: row_no,
        value: raw.date.clone(),
    })?;
    let home_score = parse_score(row_no, "home_score", &raw.home_score)?;
    let away_score = parse_score(row_no, "away_score", &raw.away_score)?;
    let home_team = raw.home_team.trim().to_string();
    let away_team = raw.away_team.trim().to_string();

    Ok(Match {
        date,
        outcome: Outcome::from_scores(home_score, away_score),
        home_team,
        away_team,
        tournament: raw.tournament.trim().to_string(),
        home_score,
        away_score,
        city: non_empty(&raw.city),
        country: non_empty(&raw.country),
        // The venue flag is informational; an odd value is not worth dropping a result for.
        neutral: parse_flag(&raw.neutral).unwrap_or(false),
        had_shootout: false,
        shootout_winner: None,
    })
}

fn parse_score(row_no: usize, field: &'static str, raw: &str) -> Result<u16, RowError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| RowError::MalformedScore {
            table: Table::Results,
            row: row_no,
            field,
            value: raw.to_string(),
        })
}
