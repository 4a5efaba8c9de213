//! Tournament service facade.
//!
//! Flat, in-process operation surface for a thin front end (CLI, test
//! harness, or orchestration script). Composes the registry, match log,
//! standings calculator, pairing engine, and runner over one shared pool.

use sqlx::PgPool;
use std::sync::Arc;

use crate::errors::TournamentResult;
use crate::matchlog::MatchLog;
use crate::pairing::{PairingEngine, RoundPairings};
use crate::registry::{PlayerId, PlayerRegistry};
use crate::runner::{TournamentReport, TournamentRunner};
use crate::standings::{StandingRow, StandingsCalculator};

/// Tournament service
#[derive(Clone)]
pub struct TournamentService {
    pool: Arc<PgPool>,
    registry: PlayerRegistry,
    matchlog: MatchLog,
    standings: StandingsCalculator,
    engine: PairingEngine,
}

impl TournamentService {
    /// Create a new tournament service over a shared pool
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            registry: PlayerRegistry::new(Arc::clone(&pool)),
            matchlog: MatchLog::new(Arc::clone(&pool)),
            standings: StandingsCalculator::new(Arc::clone(&pool)),
            engine: PairingEngine::new(),
            pool,
        }
    }

    /// Remove all match records
    pub async fn delete_matches(&self) -> TournamentResult<()> {
        self.matchlog.delete_all().await
    }

    /// Remove all players and their match records
    pub async fn delete_players(&self) -> TournamentResult<()> {
        self.registry.delete_all().await
    }

    /// Number of currently registered players
    pub async fn count_players(&self) -> TournamentResult<usize> {
        self.registry.count().await
    }

    /// Register a player and return the assigned id
    pub async fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        self.registry.register(name).await
    }

    /// Ranked standings: (id, name, wins, matches) per player
    pub async fn player_standings(&self) -> TournamentResult<Vec<StandingRow>> {
        self.standings.standings().await
    }

    /// Record the outcome of a single match between two players
    pub async fn report_match(&self, winner: PlayerId, loser: PlayerId) -> TournamentResult<()> {
        self.matchlog.record_match(winner, loser).await?;
        Ok(())
    }

    /// Next-round pairings with names, plus the bye recipient if the player
    /// count is odd
    pub async fn swiss_pairings(&self) -> TournamentResult<RoundPairings> {
        let standings = self.standings.standings().await?;
        Ok(self.engine.pair(&standings))
    }

    /// Next-round pairings as (id1, id2) tuples
    ///
    /// The bye recipient, if any, does not appear; credit the bye through the
    /// match log when the round is resolved.
    pub async fn swiss_pairings_id(&self) -> TournamentResult<Vec<(PlayerId, PlayerId)>> {
        let round = self.swiss_pairings().await?;
        Ok(round.id_pairs())
    }

    /// Run a full sample tournament and return the per-round report
    ///
    /// Outcomes are simulated (first pairing member wins). Real deployments
    /// generate pairings with [`Self::swiss_pairings`] and ingest results
    /// through [`Self::report_match`] instead.
    pub async fn play_sample_tournament(&self) -> TournamentResult<TournamentReport> {
        let mut runner = TournamentRunner::new(Arc::clone(&self.pool));
        runner.play_sample_tournament().await
    }
}
