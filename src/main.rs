mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use cli::{Args, Command, FilterArgs, FinalBy};
use football_history::query::{
    DateRange, FinalSelector, HeadToHeadSummary, LastInInputOrder, LatestDate, PlayerComparison,
    TournamentFilter, TournamentSummary,
};
use football_history::{DataConfig, Dataset, export, logging};

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let args = Args::parse();
    logging::init(args.debug);

    let mut config = DataConfig::from_env();
    if let Some(dir) = args.data_dir.as_ref() {
        config.data_dir = dir.clone();
    }
    let data = Dataset::load(&config)
        .with_context(|| format!("load corpus from {}", config.data_dir.display()))?;

    match &args.command {
        Command::H2h {
            team1,
            team2,
            filter,
        } => run_head_to_head(&args, &data, team1, team2, filter),
        Command::Players {
            player1,
            player2,
            filter,
        } => run_players(&args, &data, player1, player2, filter),
        Command::Summary {
            tournament,
            year,
            final_by,
        } => match final_by {
            FinalBy::Last => run_summary(&args, &data, tournament, *year, &LastInInputOrder),
            FinalBy::LatestDate => run_summary(&args, &data, tournament, *year, &LatestDate),
        },
        Command::History {
            tournament,
            final_by,
        } => match final_by {
            FinalBy::Last => run_history(&args, &data, tournament, &LastInInputOrder),
            FinalBy::LatestDate => run_history(&args, &data, tournament, &LatestDate),
        },
        Command::Catalog => run_catalog(&args, &data),
    }
}

fn date_range(data: &Dataset, filter: &FilterArgs) -> DateRange {
    let bounds = data.date_bounds().unwrap_or_default();
    DateRange::new(
        filter.from.unwrap_or(bounds.start),
        filter.to.unwrap_or(bounds.end),
    )
}

fn run_head_to_head(
    args: &Args,
    data: &Dataset,
    team1: &str,
    team2: &str,
    filter: &FilterArgs,
) -> Result<()> {
    let tournament = TournamentFilter::from(filter.tournament.as_deref());
    let rows = data.head_to_head(team1, team2, &tournament, date_range(data, filter));
    let summary = HeadToHeadSummary::from_rows(team1, team2, &rows);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "summary": summary, "matches": rows }))?
        );
    } else {
        println!(
            "{team1} and {team2} played {} matches head to head",
            summary.total
        );
        if let Some(name) = filter.tournament.as_deref() {
            println!("Filtering by tournament: {name}");
        }
        for (label, n) in summary.label_counts() {
            println!("  {label}: {n}");
        }
        for row in &rows {
            let m = row.fixture;
            println!(
                "{}  {} {}-{} {}  [{}]  {}",
                m.date, m.home_team, m.home_score, m.away_score, m.away_team, m.tournament, row.label
            );
        }
        if summary.shootouts.is_empty() {
            println!("No shootout data available for these teams in the selected range.");
        } else {
            println!("Shootout matches:");
            for s in &summary.shootouts {
                println!(
                    "  {}  {} vs {}  winner: {}",
                    s.date,
                    s.home_team,
                    s.away_team,
                    s.winner.as_deref().unwrap_or("n/a")
                );
            }
        }
    }

    if let Some(path) = args.xlsx.as_ref() {
        let report = export::export_head_to_head(path, &rows, &summary)?;
        eprintln!(
            "Wrote {} rows across {} sheets to {}",
            report.rows,
            report.sheets,
            path.display()
        );
    }
    Ok(())
}

fn run_players(
    args: &Args,
    data: &Dataset,
    player1: &str,
    player2: &str,
    filter: &FilterArgs,
) -> Result<()> {
    let tournament = TournamentFilter::from(filter.tournament.as_deref());
    let goals = data.player_goals(player1, player2, &tournament, date_range(data, filter));
    let comparison = PlayerComparison::from_goals(player1, player2, &goals);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "comparison": comparison, "goals": goals }))?
        );
    } else {
        for tally in &comparison.players {
            println!(
                "{}: {} goals ({} penalties)",
                tally.player, tally.goals, tally.penalties
            );
        }
        for g in &goals {
            println!(
                "{}  {:<24} {:>3}'{}  {} vs {}  [{}]",
                g.date,
                g.scorer,
                g.minute,
                if g.penalty { " (pen)" } else { "" },
                g.home_team,
                g.away_team,
                g.tournament.as_deref().unwrap_or("unknown")
            );
        }
    }

    if let Some(path) = args.xlsx.as_ref() {
        let report = export::export_player_goals(path, &goals, &comparison)?;
        eprintln!(
            "Wrote {} rows across {} sheets to {}",
            report.rows,
            report.sheets,
            path.display()
        );
    }
    Ok(())
}

fn run_summary(
    args: &Args,
    data: &Dataset,
    tournament: &str,
    year: i32,
    selector: &impl FinalSelector,
) -> Result<()> {
    let summary = data.tournament_summary(tournament, year, selector);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        match summary.as_ref() {
            Some(s) => print_summary(s),
            None => println!("No data for {tournament} in {year}."),
        }
    }

    if let (Some(path), Some(s)) = (args.xlsx.as_ref(), summary) {
        export::export_tournament_summaries(path, std::slice::from_ref(&s))?;
        eprintln!("Wrote summary to {}", path.display());
    }
    Ok(())
}

fn run_history<S>(args: &Args, data: &Dataset, tournament: &str, selector: &S) -> Result<()>
where
    S: FinalSelector + Sync,
{
    let history = data.tournament_history(tournament, selector);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&history)?);
    } else if history.is_empty() {
        println!("No data for {tournament}.");
    } else {
        for s in &history {
            print_summary(s);
            println!();
        }
    }

    if let Some(path) = args.xlsx.as_ref() {
        let report = export::export_tournament_summaries(path, &history)?;
        eprintln!(
            "Wrote {} rows across {} sheets to {}",
            report.rows,
            report.sheets,
            path.display()
        );
    }
    Ok(())
}

fn print_summary(s: &TournamentSummary) {
    println!("{} {}", s.tournament, s.year);
    println!("  Matches: {}", s.match_count);
    println!("  Goals: {}", s.goal_count);
    println!("  Teams: {}", s.team_count);
    println!("  Avg goals per match: {:.2}", s.avg_goals);
    if let Some(f) = s.final_match.as_ref() {
        let m = &f.fixture;
        println!(
            "  Final: {} {}-{} {} on {}",
            m.home_team, m.home_score, m.away_score, m.away_team, m.date
        );
        if f.decided_by_shootout {
            println!("  Winner: {} (on penalties)", f.winner);
        } else {
            println!("  Winner: {}", f.winner);
        }
    }
}

fn run_catalog(args: &Args, data: &Dataset) -> Result<()> {
    let teams = data.teams();
    let tournaments = data.tournaments();
    let bounds = data.date_bounds();
    let report = data.report();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "teams": teams,
                "tournaments": tournaments,
                "date_bounds": bounds,
                "report": report,
            }))?
        );
        return Ok(());
    }

    match bounds {
        Some(b) => println!("Matches: {} ({} to {})", report.matches_loaded, b.start, b.end),
        None => println!("Matches: 0"),
    }
    println!("Goals: {}", report.goals_loaded);
    println!(
        "Shootouts: {} read, {} linked, {} duplicates",
        report.shootouts_read, report.shootouts_linked, report.duplicate_shootouts
    );
    println!("Goals without a match row: {}", report.goals_without_match);
    println!("Skipped rows: {}", report.skipped.len());
    for err in report.skipped.iter().take(6) {
        println!("   - {err}");
    }
    println!("Teams: {}", teams.len());
    println!("Tournaments ({}):", tournaments.len());
    for t in &tournaments {
        println!("  {t}");
    }
    Ok(())
}
