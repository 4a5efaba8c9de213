//! Tournament runner implementation.

use sqlx::PgPool;
use std::sync::Arc;

use super::models::{RoundReport, TournamentPhase, TournamentReport, rounds_for};
use crate::errors::{TournamentError, TournamentResult};
use crate::matchlog::MatchLog;
use crate::pairing::PairingEngine;
use crate::registry::PlayerRegistry;
use crate::standings::StandingsCalculator;

/// Minimum number of players a tournament can run with
pub const MIN_PLAYERS: usize = 2;

/// Tournament runner
pub struct TournamentRunner {
    pool: Arc<PgPool>,
    registry: PlayerRegistry,
    standings: StandingsCalculator,
    engine: PairingEngine,
    phase: TournamentPhase,
}

impl TournamentRunner {
    /// Create a new tournament runner
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            registry: PlayerRegistry::new(Arc::clone(&pool)),
            standings: StandingsCalculator::new(Arc::clone(&pool)),
            engine: PairingEngine::new(),
            pool,
            phase: TournamentPhase::NotStarted,
        }
    }

    /// Current phase of the run
    pub fn phase(&self) -> TournamentPhase {
        self.phase
    }

    /// Play a full sample tournament over the registered players
    ///
    /// Runs `floor(log2(player_count))` rounds. Each round pairs the current
    /// standings, resolves every pair by crediting the first member with the
    /// win (a simulation stand-in — real results go through
    /// [`MatchLog::record_match`]), and records the whole round in one
    /// transaction, so a mid-round failure rolls that round back while prior
    /// rounds stay recorded. The bye recipient, if any, is credited an
    /// automatic win in the same transaction.
    ///
    /// # Errors
    ///
    /// * [`TournamentError::InsufficientPlayers`] - fewer than two players
    pub async fn play_sample_tournament(&mut self) -> TournamentResult<TournamentReport> {
        let player_count = self.registry.count().await?;
        if player_count < MIN_PLAYERS {
            return Err(TournamentError::InsufficientPlayers {
                needed: MIN_PLAYERS,
                current: player_count,
            });
        }

        let total_rounds = rounds_for(player_count);
        log::info!("Starting sample tournament: {player_count} players, {total_rounds} rounds");

        let mut rounds = Vec::with_capacity(total_rounds as usize);
        let mut matches_recorded = 0;

        for round in 1..=total_rounds {
            self.phase = TournamentPhase::RoundInProgress(round);
            matches_recorded += self.play_round().await?;

            let snapshot = self.standings.standings().await?;
            log::info!(
                "Round {round}/{total_rounds} complete, leader is {}",
                snapshot
                    .first()
                    .map(|row| row.name.as_str())
                    .unwrap_or("nobody")
            );
            rounds.push(RoundReport {
                round,
                standings: snapshot,
            });
        }

        self.phase = TournamentPhase::Finished;

        // player_count >= 2 guarantees the final snapshot is non-empty
        let champion = rounds
            .last()
            .and_then(|report| report.standings.first())
            .cloned()
            .ok_or(TournamentError::InsufficientPlayers {
                needed: MIN_PLAYERS,
                current: 0,
            })?;

        log::info!("Tournament finished, champion is {}", champion.name);

        Ok(TournamentReport {
            player_count,
            total_rounds,
            matches_recorded,
            rounds,
            champion,
        })
    }

    /// Pair and resolve one round inside a single transaction
    ///
    /// Returns the number of match rows written.
    async fn play_round(&self) -> TournamentResult<usize> {
        let standings = self.standings.standings().await?;
        let round_pairings = self.engine.pair(&standings);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(TournamentError::storage("play_round"))?;

        let mut written = 0;
        for pairing in &round_pairings.pairings {
            MatchLog::record_match_in(&mut tx, pairing.id1, pairing.id2).await?;
            written += 1;
        }

        if let Some(bye) = &round_pairings.bye {
            MatchLog::record_bye_in(&mut tx, bye.player_id).await?;
            written += 1;
        }

        tx.commit()
            .await
            .map_err(TournamentError::storage("play_round"))?;

        Ok(written)
    }
}
