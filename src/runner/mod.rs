//! Tournament runner module.
//!
//! Drives a full Swiss event: computes the round count from the player count,
//! pairs each round from current standings, records the results, and
//! snapshots standings after every round. The runner is the only writer of
//! the match log during simulated play.

pub mod manager;
pub mod models;

pub use manager::{MIN_PLAYERS, TournamentRunner};
pub use models::{RoundReport, TournamentPhase, TournamentReport, rounds_for};
