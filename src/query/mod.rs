use chrono::NaiveDate;
use serde::Serialize;

pub mod head_to_head;
pub mod players;
pub mod tournament;

pub use head_to_head::{HeadToHeadRow, HeadToHeadSummary, RelativeResult, head_to_head};
pub use players::{PlayerComparison, PlayerTally, player_goals};
pub use tournament::{
    FinalResult, FinalSelector, FinalWinner, LastInInputOrder, LatestDate, TournamentSummary,
    resolve_final_winner, tournament_history, tournament_summary,
};

/// Inclusive calendar-date window. `start > end` selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Case-insensitive substring filter on tournament names.
///
/// An empty needle is the "all tournaments" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TournamentFilter {
    needle: String,
}

impl TournamentFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, tournament: &str) -> bool {
        self.is_all() || tournament.to_lowercase().contains(&self.needle)
    }

    /// A missing tournament only passes the "all" filter.
    pub fn matches_opt(&self, tournament: Option<&str>) -> bool {
        match tournament {
            Some(t) => self.matches(t),
            None => self.is_all(),
        }
    }
}

impl From<&str> for TournamentFilter {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Option<&str>> for TournamentFilter {
    fn from(value: Option<&str>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }
}
