use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::model::GoalEvent;
use crate::query::{HeadToHeadRow, HeadToHeadSummary, PlayerComparison, TournamentSummary};

pub struct ExportReport {
    pub sheets: usize,
    pub rows: usize,
}

/// One sheet with the fixtures and one with the win/draw counts.
pub fn export_head_to_head(
    path: &Path,
    rows: &[HeadToHeadRow<'_>],
    summary: &HeadToHeadSummary,
) -> Result<ExportReport> {
    let mut fixtures = vec![header(&[
        "Date",
        "Home",
        "Away",
        "Home Score",
        "Away Score",
        "Tournament",
        "Result",
        "Shootout Winner",
    ])];
    for row in rows {
        let m = row.fixture;
        fixtures.push(vec![
            m.date.to_string(),
            m.home_team.clone(),
            m.away_team.clone(),
            m.home_score.to_string(),
            m.away_score.to_string(),
            m.tournament.clone(),
            row.label.clone(),
            m.shootout_winner.clone().unwrap_or_default(),
        ]);
    }

    let mut counts = vec![header(&["Result", "Matches"])];
    for (label, n) in summary.label_counts() {
        counts.push(vec![label, n.to_string()]);
    }

    save(path, &[("HeadToHead", &fixtures), ("Outcomes", &counts)])
}

pub fn export_player_goals(
    path: &Path,
    goals: &[&GoalEvent],
    comparison: &PlayerComparison,
) -> Result<ExportReport> {
    let mut goal_rows = vec![header(&[
        "Date",
        "Home",
        "Away",
        "Team",
        "Scorer",
        "Minute",
        "Penalty",
        "Own Goal",
        "Tournament",
    ])];
    for g in goals {
        goal_rows.push(vec![
            g.date.to_string(),
            g.home_team.clone(),
            g.away_team.clone(),
            g.team.clone().unwrap_or_default(),
            g.scorer.clone(),
            g.minute.to_string(),
            yes_no(g.penalty),
            yes_no(g.own_goal),
            g.tournament.clone().unwrap_or_default(),
        ]);
    }

    let mut tally_rows = vec![header(&["Player", "Goals", "Penalties"])];
    for t in &comparison.players {
        tally_rows.push(vec![
            t.player.clone(),
            t.goals.to_string(),
            t.penalties.to_string(),
        ]);
    }

    save(path, &[("Goals", &goal_rows), ("Players", &tally_rows)])
}

pub fn export_tournament_summaries(
    path: &Path,
    summaries: &[TournamentSummary],
) -> Result<ExportReport> {
    let mut rows = vec![header(&[
        "Tournament",
        "Year",
        "Matches",
        "Goals",
        "Teams",
        "Avg Goals",
        "Final",
        "Score",
        "Winner",
        "Shootout",
    ])];
    for s in summaries {
        let (fixture, score, winner, shootout) = match &s.final_match {
            Some(f) => (
                format!("{} vs {}", f.fixture.home_team, f.fixture.away_team),
                format!("{}-{}", f.fixture.home_score, f.fixture.away_score),
                f.winner.to_string(),
                yes_no(f.decided_by_shootout),
            ),
            None => Default::default(),
        };
        rows.push(vec![
            s.tournament.clone(),
            s.year.to_string(),
            s.match_count.to_string(),
            s.goal_count.to_string(),
            s.team_count.to_string(),
            format!("{:.2}", s.avg_goals),
            fixture,
            score,
            winner,
            shootout,
        ]);
    }

    save(path, &[("Summary", &rows)])
}

fn save(path: &Path, sheets: &[(&str, &Vec<Vec<String>>)]) -> Result<ExportReport> {
    let mut workbook = Workbook::new();
    let mut total_rows = 0usize;
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name)?;
        write_rows(sheet, rows)?;
        total_rows += rows.len().saturating_sub(1);
    }
    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;
    Ok(ExportReport {
        sheets: sheets.len(),
        rows: total_rows,
    })
}

fn header(cols: &[&str]) -> Vec<String> {
    cols.iter().map(|c| c.to_string()).collect()
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
