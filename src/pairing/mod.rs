//! Pairing module.
//!
//! Generates next-round pairings from a ranked standings list. Pure logic
//! with no database access: the engine sees only the ordering the standings
//! calculator produced and is memoryless with respect to earlier rounds, so
//! rematches are possible by design.

pub mod engine;
pub mod models;

pub use engine::PairingEngine;
pub use models::{Pairing, RoundPairings};
