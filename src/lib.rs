//! # Swiss Rounds
//!
//! A Swiss-system tournament library over PostgreSQL.
//!
//! Players register, matches are reported into an append-only log, and
//! standings are derived from that log on every query — the log is the single
//! source of truth, so win counts can never drift. Round pairings follow the
//! Swiss adjacency rule: the ranked standings are chunked into consecutive
//! pairs so each player meets the nearest win-record neighbor.
//!
//! ## Core modules
//!
//! - [`registry`]: Player identity and registration
//! - [`matchlog`]: Append-only match records with validation
//! - [`standings`]: Ranked standings derived from the match log
//! - [`pairing`]: Pure next-round pairing over a ranked list
//! - [`runner`]: Multi-round tournament progression
//! - [`service`]: Flat operation facade for in-process callers
//! - [`db`]: Connection pool and schema setup
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use swiss_rounds::TournamentService;
//! use swiss_rounds::db::{Database, DatabaseConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), swiss_rounds::TournamentError> {
//!     let db = Database::new(&DatabaseConfig::from_env()).await?;
//!     db.ensure_schema().await?;
//!
//!     let service = TournamentService::new(Arc::new(db.pool().clone()));
//!     let alice = service.register_player("Alice").await?;
//!     let bob = service.register_player("Bob").await?;
//!     service.report_match(alice, bob).await?;
//!
//!     for row in service.player_standings().await? {
//!         println!("{} has {} wins", row.name, row.wins);
//!     }
//!     Ok(())
//! }
//! ```

/// Connection pool and schema management.
pub mod db;
pub use db::{Database, DatabaseConfig};

/// Error taxonomy shared by every component.
pub mod errors;
pub use errors::{TournamentError, TournamentResult};

/// Player identity and registration.
pub mod registry;
pub use registry::{Player, PlayerId, PlayerRegistry};

/// Append-only match log.
pub mod matchlog;
pub use matchlog::{MatchLog, MatchRecord};

/// Standings derived from the match log.
pub mod standings;
pub use standings::{StandingRow, StandingsCalculator};

/// Next-round pairing generation.
pub mod pairing;
pub use pairing::{Pairing, PairingEngine, RoundPairings};

/// Multi-round tournament progression.
pub mod runner;
pub use runner::{RoundReport, TournamentPhase, TournamentReport, TournamentRunner};

/// Flat operation facade.
pub mod service;
pub use service::TournamentService;
