use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Historical statistics over international football results.
///
/// Reads results.csv, shootouts.csv and goalscorers.csv from the data
/// directory (FOOTBALL_DATA_DIR, default data/football_data) and answers one
/// query per invocation.
#[derive(Parser, Debug)]
#[command(name = "football_history", version)]
pub struct Args {
    /// Directory holding the three CSV tables. Overrides FOOTBALL_DATA_DIR.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Also write the result to an .xlsx workbook.
    #[arg(long, global = true, value_name = "PATH")]
    pub xlsx: Option<PathBuf>,

    /// Verbose logging on stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Every meeting between two teams.
    H2h {
        team1: String,
        team2: String,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Goals scored by two players.
    Players {
        player1: String,
        player2: String,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Aggregates and final for one tournament edition.
    Summary {
        tournament: String,
        year: i32,
        #[arg(long, value_enum, default_value_t = FinalBy::Last)]
        final_by: FinalBy,
    },
    /// Summaries for every edition of a tournament.
    History {
        tournament: String,
        #[arg(long, value_enum, default_value_t = FinalBy::Last)]
        final_by: FinalBy,
    },
    /// Teams, tournaments, date span and load diagnostics.
    Catalog,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive substring of the tournament name; omit for all.
    #[arg(long, short = 't')]
    pub tournament: Option<String>,

    /// First date to include (YYYY-MM-DD). Defaults to the earliest match.
    #[arg(long, value_parser = parse_cli_date)]
    pub from: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD). Defaults to the latest match.
    #[arg(long, value_parser = parse_cli_date)]
    pub to: Option<NaiveDate>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalBy {
    /// Last fixture of the edition as listed in results.csv.
    Last,
    /// Fixture with the latest date.
    LatestDate,
}

fn parse_cli_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
