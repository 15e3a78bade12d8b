use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Composite join key shared by the results, shootout and goal tables.
///
/// Orientation matters: `(d, "A", "B")` and `(d, "B", "A")` are different keys.
pub type MatchKey<'a> = (NaiveDate, &'a str, &'a str);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Outcome {
    pub fn from_scores(home_score: u16, away_score: u16) -> Self {
        if home_score > away_score {
            Outcome::HomeWin
        } else if away_score > home_score {
            Outcome::AwayWin
        } else {
            Outcome::Draw
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub tournament: String,
    pub home_score: u16,
    pub away_score: u16,
    pub city: Option<String>,
    pub country: Option<String>,
    pub neutral: bool,
    pub outcome: Outcome,
    pub had_shootout: bool,
    pub shootout_winner: Option<String>,
}

impl Match {
    pub fn key(&self) -> MatchKey<'_> {
        (self.date, self.home_team.as_str(), self.away_team.as_str())
    }

    /// Winning team over regular and extra time; `None` for a draw.
    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            Outcome::HomeWin => Some(self.home_team.as_str()),
            Outcome::AwayWin => Some(self.away_team.as_str()),
            Outcome::Draw => None,
        }
    }

    pub fn total_goals(&self) -> u32 {
        u32::from(self.home_score) + u32::from(self.away_score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShootoutRecord {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub winner: Option<String>,
    pub first_shooter: Option<String>,
}

impl ShootoutRecord {
    pub fn key(&self) -> MatchKey<'_> {
        (self.date, self.home_team.as_str(), self.away_team.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalEvent {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    /// Team credited with the goal, when the source records it.
    pub team: Option<String>,
    pub scorer: String,
    pub minute: u16,
    pub own_goal: bool,
    pub penalty: bool,
    /// Joined in from the parent match; `None` when no match row has the same key.
    pub tournament: Option<String>,
}

impl GoalEvent {
    pub fn key(&self) -> MatchKey<'_> {
        (self.date, self.home_team.as_str(), self.away_team.as_str())
    }
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Parses a boolean cell. Empty cells read as `false`.
pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "no" | "n" => Some(false),
        "true" | "1" | "yes" | "y" => Some(true),
        _ => None,
    }
}

pub(crate) fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("NA") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_follows_scores_over_grid() {
        for h in 0..=6u16 {
            for a in 0..=6u16 {
                let expected = if h > a {
                    Outcome::HomeWin
                } else if a > h {
                    Outcome::AwayWin
                } else {
                    Outcome::Draw
                };
                assert_eq!(Outcome::from_scores(h, a), expected, "score {h}-{a}");
            }
        }
        assert_eq!(Outcome::from_scores(0, 0), Outcome::Draw);
        assert_eq!(Outcome::from_scores(u16::MAX, 0), Outcome::HomeWin);
    }

    #[test]
    fn parse_date_accepts_common_layouts() {
        let want = NaiveDate::from_ymd_opt(1872, 11, 30);
        assert_eq!(parse_date("1872-11-30"), want);
        assert_eq!(parse_date(" 1872/11/30 "), want);
        assert_eq!(parse_date("1872-11-30T00:00:00"), want);
        assert_eq!(parse_date("1872-11-30 15:00:00"), want);
        assert_eq!(parse_date("30.11.1872"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("1872-02-30"), None);
    }

    #[test]
    fn parse_flag_is_lenient_on_case() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("False"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
