use serde::Serialize;
use thiserror::Error;

/// A single input row that was excluded while loading the corpus.
///
/// Row numbers are 1-based positions within the source table, header excluded.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowError {
    #[error("{table} row {row}: malformed date {value:?}")]
    MalformedDate {
        table: Table,
        row: usize,
        value: String,
    },

    #[error("{table} row {row}: malformed {field} {value:?}")]
    MalformedScore {
        table: Table,
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("goal row {row}: {reason}")]
    MalformedGoalRow { row: usize, reason: String },

    #[error("{table} row {row}: unreadable record: {reason}")]
    Unreadable {
        table: Table,
        row: usize,
        reason: String,
    },
}

impl RowError {
    pub fn row(&self) -> usize {
        match self {
            Self::MalformedDate { row, .. }
            | Self::MalformedScore { row, .. }
            | Self::MalformedGoalRow { row, .. }
            | Self::Unreadable { row, .. } => *row,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Results,
    Shootouts,
    Goals,
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Table::Results => "results",
            Table::Shootouts => "shootouts",
            Table::Goals => "goals",
        };
        f.write_str(name)
    }
}
