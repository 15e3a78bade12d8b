use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use football_history::Dataset;
use football_history::goals::RawGoalRow;
use football_history::query::{DateRange, LastInInputOrder, TournamentFilter};
use football_history::results::RawMatchRow;
use football_history::shootouts::RawShootoutRow;

const TEAMS: &[&str] = &[
    "Argentina", "Brazil", "England", "France", "Germany", "Italy", "Netherlands", "Spain",
    "Uruguay", "Portugal", "Belgium", "Croatia",
];
const TOURNAMENTS: &[&str] = &[
    "Friendly",
    "FIFA World Cup",
    "FIFA World Cup qualification",
    "UEFA Euro",
    "Copa América",
];

fn synthetic_corpus(n: usize) -> Dataset {
    let mut results = Vec::with_capacity(n);
    let mut shootouts = Vec::new();
    let mut goals = Vec::new();
    for idx in 0..n {
        let year = 1950 + (idx / 400) as i32;
        let date = format!("{year}-{:02}-{:02}", 1 + (idx / 28) % 12, 1 + idx % 28);
        let home = TEAMS[idx % TEAMS.len()];
        let away = TEAMS[(idx * 7 + 1) % TEAMS.len()];
        let away = if away == home { TEAMS[(idx + 1) % TEAMS.len()] } else { away };
        let h = (idx % 4) as u16;
        let a = (idx % 3) as u16;
        let tournament = TOURNAMENTS[idx % TOURNAMENTS.len()];
        results.push(RawMatchRow::new(&date, home, away, h, a, tournament));
        if h == a && idx % 5 == 1 {
            shootouts.push(RawShootoutRow::new(&date, home, away, home));
        }
        for g in 0..h {
            goals.push(RawGoalRow::new(
                &date,
                home,
                away,
                &format!("{home} Striker {}", g % 3),
                (10 + 20 * g) % 120,
                g == 2,
            ));
        }
    }
    Dataset::from_rows(&results, &shootouts, &goals)
}

fn bench_load(c: &mut Criterion) {
    c.bench_function("load_10k_rows", |b| {
        b.iter(|| {
            let data = synthetic_corpus(black_box(10_000));
            black_box(data.matches().len());
        })
    });
}

fn bench_head_to_head(c: &mut Criterion) {
    let data = synthetic_corpus(40_000);
    let filter = TournamentFilter::new("world cup");
    c.bench_function("head_to_head", |b| {
        b.iter(|| {
            let rows = data.head_to_head(
                black_box("Brazil"),
                black_box("England"),
                &filter,
                DateRange::unbounded(),
            );
            black_box(rows.len());
        })
    });
}

fn bench_player_goals(c: &mut Criterion) {
    let data = synthetic_corpus(40_000);
    let filter = TournamentFilter::all();
    c.bench_function("player_goals", |b| {
        b.iter(|| {
            let goals = data.player_goals(
                black_box("Brazil Striker 0"),
                black_box("Spain Striker 1"),
                &filter,
                DateRange::unbounded(),
            );
            black_box(goals.len());
        })
    });
}

fn bench_tournament(c: &mut Criterion) {
    let data = synthetic_corpus(40_000);
    c.bench_function("tournament_summary", |b| {
        b.iter(|| {
            let summary = data.tournament_summary(black_box("UEFA Euro"), 1960, &LastInInputOrder);
            black_box(summary.map(|s| s.match_count));
        })
    });
    c.bench_function("tournament_history", |b| {
        b.iter(|| {
            let history = data.tournament_history(black_box("FIFA World Cup"), &LastInInputOrder);
            black_box(history.len());
        })
    });
}

criterion_group!(
    benches,
    bench_load,
    bench_head_to_head,
    bench_player_goals,
    bench_tournament
);
criterion_main!(benches);
