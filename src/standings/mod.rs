//! Standings module.
//!
//! Derives a ranked view of players from the match log. Nothing here is
//! persisted; every call recomputes wins and matches played from the
//! append-only log, so the standings can never drift from the recorded
//! results.

pub mod calculator;
pub mod models;

pub use calculator::StandingsCalculator;
pub use models::StandingRow;
