//! # Paddock Analytics
//!
//! Pure aggregation functions over joined race results.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** This crate has no knowledge of where the rows come from.
//!   It depends only on `core-types`. Callers pass in an iterator of
//!   `ResultRow`s and a key function that both selects and groups rows.
//! - **Empty In, Empty Out:** No function here fails. An empty input yields a
//!   zero KPI, an empty ranking or an empty series.
//! - **Deterministic Output:** Rankings break ties by label and then by key,
//!   and series are keyed by ordered maps, so repeated calls produce
//!   identical output.
//!
//! ## Public API
//!
//! - `Kpis`: distinct race, driver, constructor and country counts.
//! - `tally`, `tally_races`, `count_distinct`: grouped counting.
//! - `top_n`, `shares`: rankings and pie-chart breakdowns of a tally.
//! - `yearly_totals`, `cumulative_wins`, `season_points`: per-year series.

// Declare the modules that constitute this crate.
pub mod kpi;
pub mod ranking;
pub mod series;
pub mod tally;

// Re-export the key components to create a clean, public-facing API.
pub use kpi::Kpis;
pub use ranking::{Ranked, Share, shares, top_n};
pub use series::{YearValue, cumulative_wins, season_points, yearly_totals};
pub use tally::{count_distinct, tally, tally_races};
