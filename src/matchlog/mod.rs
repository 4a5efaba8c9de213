//! Match log module.
//!
//! Append-only record of completed matches and the single source of truth for
//! standings. Rows are immutable once written; the only destructive operation
//! is the bulk reset. The first listed player of a row is always the winner
//! (`outcome` is the fixed flag `1` — draws are not representable), and a row
//! without a second player records a bye.

pub mod manager;
pub mod models;

pub use manager::MatchLog;
pub use models::{MatchId, MatchRecord, OUTCOME_WIN};
