use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::catalog;
use crate::config::DataConfig;
use crate::error::{RowError, Table};
use crate::goals::{RawGoalRow, parse_numbered_goals};
use crate::model::{GoalEvent, Match};
use crate::query::{
    self, DateRange, FinalSelector, HeadToHeadRow, TournamentFilter, TournamentSummary,
};
use crate::results::{RawMatchRow, numbered, parse_numbered_matches};
use crate::shootouts::{RawShootoutRow, ShootoutIndex, parse_numbered_shootouts};

/// What happened while building a [`Dataset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub matches_loaded: usize,
    pub shootouts_read: usize,
    pub shootouts_linked: usize,
    pub duplicate_shootouts: usize,
    pub goals_loaded: usize,
    pub goals_without_match: usize,
    pub skipped: Vec<RowError>,
}

impl LoadReport {
    pub fn skipped_in(&self, table: Table) -> usize {
        self.skipped
            .iter()
            .filter(|err| match err {
                RowError::MalformedDate { table: t, .. }
                | RowError::MalformedScore { table: t, .. }
                | RowError::Unreadable { table: t, .. } => *t == table,
                RowError::MalformedGoalRow { .. } => table == Table::Goals,
            })
            .count()
    }
}

/// The loaded corpus. Built once, then only read.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    matches: Vec<Match>,
    goals: Vec<GoalEvent>,
    report: LoadReport,
}

impl Dataset {
    /// Links and indexes already-read rows. Bad rows are skipped and listed
    /// in [`Dataset::report`].
    pub fn from_rows(
        results: &[RawMatchRow],
        shootouts: &[RawShootoutRow],
        goals: &[RawGoalRow],
    ) -> Self {
        Self::from_numbered_rows(numbered(results), numbered(shootouts), numbered(goals))
    }

    /// Same as [`Dataset::from_rows`], for rows tagged with their 1-based
    /// source row numbers.
    pub fn from_numbered_rows<'r>(
        results: impl IntoIterator<Item = (usize, &'r RawMatchRow)>,
        shootouts: impl IntoIterator<Item = (usize, &'r RawShootoutRow)>,
        goals: impl IntoIterator<Item = (usize, &'r RawGoalRow)>,
    ) -> Self {
        let mut report = LoadReport::default();

        let parsed_matches = parse_numbered_matches(results);
        let mut matches = parsed_matches.rows;
        report.skipped.extend(parsed_matches.errors);

        let parsed_shootouts = parse_numbered_shootouts(shootouts);
        report.skipped.extend(parsed_shootouts.errors);
        report.shootouts_read = parsed_shootouts.rows.len();
        {
            let index = ShootoutIndex::build(&parsed_shootouts.rows);
            report.duplicate_shootouts = index.duplicates();
            report.shootouts_linked = index.annotate(&mut matches);
        }

        let parsed_goals = parse_numbered_goals(goals, &matches);
        report.skipped.extend(parsed_goals.errors);
        let goals = parsed_goals.rows;

        report.matches_loaded = matches.len();
        report.goals_loaded = goals.len();
        report.goals_without_match = goals.iter().filter(|g| g.tournament.is_none()).count();

        for err in &report.skipped {
            tracing::warn!("skipped {err}");
        }
        tracing::info!(
            matches = report.matches_loaded,
            goals = report.goals_loaded,
            shootouts_linked = report.shootouts_linked,
            skipped = report.skipped.len(),
            "corpus loaded"
        );

        Self {
            matches,
            goals,
            report,
        }
    }

    /// Reads the three CSV tables named by `config`.
    pub fn load(config: &DataConfig) -> Result<Self> {
        let (results, unreadable_results) =
            read_csv::<RawMatchRow>(&config.results_path(), Table::Results)?;
        let (shootouts, unreadable_shootouts) =
            read_csv::<RawShootoutRow>(&config.shootouts_path(), Table::Shootouts)?;
        let (goals, unreadable_goals) =
            read_csv::<RawGoalRow>(&config.goals_path(), Table::Goals)?;

        let mut dataset = Self::from_numbered_rows(
            results.iter().map(|(row_no, row)| (*row_no, row)),
            shootouts.iter().map(|(row_no, row)| (*row_no, row)),
            goals.iter().map(|(row_no, row)| (*row_no, row)),
        );
        for err in unreadable_results
            .into_iter()
            .chain(unreadable_shootouts)
            .chain(unreadable_goals)
        {
            tracing::warn!("skipped {err}");
            dataset.report.skipped.push(err);
        }
        Ok(dataset)
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn goals(&self) -> &[GoalEvent] {
        &self.goals
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn head_to_head(
        &self,
        team1: &str,
        team2: &str,
        tournament: &TournamentFilter,
        dates: DateRange,
    ) -> Vec<HeadToHeadRow<'_>> {
        query::head_to_head(&self.matches, team1, team2, tournament, dates)
    }

    pub fn player_goals(
        &self,
        player1: &str,
        player2: &str,
        tournament: &TournamentFilter,
        dates: DateRange,
    ) -> Vec<&GoalEvent> {
        query::player_goals(&self.goals, player1, player2, tournament, dates)
    }

    pub fn tournament_summary(
        &self,
        tournament: &str,
        year: i32,
        selector: &impl FinalSelector,
    ) -> Option<TournamentSummary> {
        query::tournament_summary(&self.matches, tournament, year, selector)
    }

    pub fn tournament_history<S>(&self, tournament: &str, selector: &S) -> Vec<TournamentSummary>
    where
        S: FinalSelector + Sync,
    {
        query::tournament_history(&self.matches, tournament, selector)
    }

    pub fn teams(&self) -> Vec<&str> {
        catalog::teams(&self.matches)
    }

    pub fn tournaments(&self) -> Vec<&str> {
        catalog::tournaments(&self.matches)
    }

    pub fn scorers(&self) -> Vec<&str> {
        catalog::scorers(&self.goals)
    }

    pub fn date_bounds(&self) -> Option<DateRange> {
        catalog::date_bounds(&self.matches)
    }
}

/// Reads every record of a CSV table, each tagged with its 1-based data row
/// number. Records that do not fit the row shape come back as
/// [`RowError::Unreadable`] instead of failing the whole file.
fn read_csv<T: DeserializeOwned>(
    path: &Path,
    table: Table,
) -> Result<(Vec<(usize, T)>, Vec<RowError>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("open {table} table {}", path.display()))?;
    reader
        .headers()
        .with_context(|| format!("read {table} header {}", path.display()))?;

    let mut rows = Vec::new();
    let mut errors = Vec::new();
    for (idx, record) in reader.deserialize::<T>().enumerate() {
        match record {
            Ok(row) => rows.push((idx + 1, row)),
            Err(err) => errors.push(RowError::Unreadable {
                table,
                row: idx + 1,
                reason: err.to_string(),
            }),
        }
    }
    Ok((rows, errors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_by_table() {
        let dataset = Dataset::from_rows(
            &[
                RawMatchRow::new("2006-07-09", "Italy", "France", 1, 1, "FIFA World Cup"),
                RawMatchRow::new("bad", "Italy", "France", 1, 1, "FIFA World Cup"),
            ],
            &[
                RawShootoutRow::new("2006-07-09", "Italy", "France", "Italy"),
                RawShootoutRow::new("2006-07-09", "Italy", "France", "France"),
            ],
            &[
                RawGoalRow::new("2006-07-09", "Italy", "France", "Zinedine Zidane", 7, true),
                RawGoalRow::new("2006-07-09", "Italy", "France", "Marco Materazzi", 19, false),
                RawGoalRow::new("2006-07-10", "Italy", "France", "Ghost", 1, false),
            ],
        );
        let report = dataset.report();
        assert_eq!(report.matches_loaded, 1);
        assert_eq!(report.shootouts_read, 2);
        assert_eq!(report.shootouts_linked, 1);
        assert_eq!(report.duplicate_shootouts, 1);
        assert_eq!(report.goals_loaded, 3);
        assert_eq!(report.goals_without_match, 1);
        assert_eq!(report.skipped_in(Table::Results), 1);
        assert_eq!(report.skipped_in(Table::Goals), 0);
        assert_eq!(dataset.matches()[0].shootout_winner.as_deref(), Some("Italy"));
    }
}
