//! Query engine over the international football results corpus.
//!
//! Three CSV tables (results, shootouts, goal scorers) are parsed once into an
//! immutable [`Dataset`]; the [`query`] functions then answer head-to-head,
//! player comparison and tournament-year questions against it without side
//! effects.
//!
//! ```rust,no_run
//! use football_history::{DataConfig, Dataset};
//! use football_history::query::{DateRange, LastInInputOrder, TournamentFilter};
//!
//! # fn main() -> anyhow::Result<()> {
//! let data = Dataset::load(&DataConfig::from_env())?;
//! let rows = data.head_to_head(
//!     "Argentina",
//!     "Brazil",
//!     &TournamentFilter::new("copa"),
//!     DateRange::unbounded(),
//! );
//! println!("{} meetings", rows.len());
//!
//! if let Some(summary) = data.tournament_summary("FIFA World Cup", 2022, &LastInInputOrder) {
//!     println!("{:.2} goals per match", summary.avg_goals);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod goals;
pub mod logging;
pub mod model;
pub mod query;
pub mod results;
pub mod shootouts;

pub use config::DataConfig;
pub use dataset::{Dataset, LoadReport};
pub use error::{RowError, Table};
pub use model::{GoalEvent, Match, Outcome, ShootoutRecord};
