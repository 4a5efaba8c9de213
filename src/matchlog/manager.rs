//! Match log manager implementation.

use sqlx::{PgPool, Postgres, Row, Transaction};
use std::sync::Arc;

use super::models::{MatchId, MatchRecord, OUTCOME_WIN};
use crate::errors::{TournamentError, TournamentResult};
use crate::registry::PlayerId;

/// Match log
#[derive(Clone)]
pub struct MatchLog {
    pool: Arc<PgPool>,
}

impl MatchLog {
    /// Create a new match log
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Record the outcome of a single match between two players
    ///
    /// The winner is stored as the first listed player with the fixed outcome
    /// flag. Validation and insert run inside one transaction.
    ///
    /// # Arguments
    ///
    /// * `winner` - id of the player who won
    /// * `loser` - id of the player who lost
    ///
    /// # Errors
    ///
    /// * [`TournamentError::SelfMatch`] - `winner == loser`
    /// * [`TournamentError::InvalidReference`] - either id is not registered
    pub async fn record_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> TournamentResult<MatchId> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(TournamentError::storage("record_match"))?;

        let match_id = Self::record_match_in(&mut tx, winner, loser).await?;

        tx.commit()
            .await
            .map_err(TournamentError::storage("record_match"))?;

        log::info!("Recorded match {match_id}: {winner} defeats {loser}");
        Ok(match_id)
    }

    /// Record a bye: an automatic win for an unpaired player
    ///
    /// Stored as a match row with no second player. Counts as one win and one
    /// match played for the recipient.
    pub async fn record_bye(&self, player: PlayerId) -> TournamentResult<MatchId> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(TournamentError::storage("record_bye"))?;

        let match_id = Self::record_bye_in(&mut tx, player).await?;

        tx.commit()
            .await
            .map_err(TournamentError::storage("record_bye"))?;

        log::info!("Recorded bye {match_id} for player {player}");
        Ok(match_id)
    }

    /// Record a match inside an existing transaction
    ///
    /// Used by the tournament runner to batch a whole round into one
    /// transaction so a mid-round failure rolls the round back as a unit.
    pub async fn record_match_in(
        tx: &mut Transaction<'_, Postgres>,
        winner: PlayerId,
        loser: PlayerId,
    ) -> TournamentResult<MatchId> {
        if winner == loser {
            return Err(TournamentError::SelfMatch(winner));
        }

        Self::check_player_exists(tx, winner).await?;
        Self::check_player_exists(tx, loser).await?;

        let row = sqlx::query(
            r#"
            INSERT INTO matches (id_player1, id_player2, outcome)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(winner)
        .bind(loser)
        .bind(OUTCOME_WIN)
        .fetch_one(&mut **tx)
        .await
        .map_err(TournamentError::storage("record_match"))?;

        Ok(row.get("id"))
    }

    /// Record a bye inside an existing transaction
    pub async fn record_bye_in(
        tx: &mut Transaction<'_, Postgres>,
        player: PlayerId,
    ) -> TournamentResult<MatchId> {
        Self::check_player_exists(tx, player).await?;

        let row = sqlx::query(
            r#"
            INSERT INTO matches (id_player1, id_player2, outcome)
            VALUES ($1, NULL, $2)
            RETURNING id
            "#,
        )
        .bind(player)
        .bind(OUTCOME_WIN)
        .fetch_one(&mut **tx)
        .await
        .map_err(TournamentError::storage("record_bye"))?;

        Ok(row.get("id"))
    }

    /// Clear the log
    pub async fn delete_all(&self) -> TournamentResult<()> {
        let result = sqlx::query("DELETE FROM matches")
            .execute(self.pool.as_ref())
            .await
            .map_err(TournamentError::storage("delete_matches"))?;

        log::info!("Deleted {} matches", result.rows_affected());
        Ok(())
    }

    /// Number of matches the given player has won
    pub async fn wins_for(&self, player_id: PlayerId) -> TournamentResult<usize> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM matches WHERE id_player1 = $1")
            .bind(player_id)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(TournamentError::storage("wins_for"))?;

        let total: i64 = row.get("total");
        Ok(total as usize)
    }

    /// Number of matches the given player has appeared in, in either role
    pub async fn matches_for(&self, player_id: PlayerId) -> TournamentResult<usize> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total FROM matches WHERE id_player1 = $1 OR id_player2 = $1",
        )
        .bind(player_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(TournamentError::storage("matches_for"))?;

        let total: i64 = row.get("total");
        Ok(total as usize)
    }

    /// Total number of recorded matches, byes included
    pub async fn total_matches(&self) -> TournamentResult<usize> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM matches")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(TournamentError::storage("total_matches"))?;

        let total: i64 = row.get("total");
        Ok(total as usize)
    }

    /// Most recently reported matches, newest first
    pub async fn entries(&self, limit: i64) -> TournamentResult<Vec<MatchRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, id_player1, id_player2, outcome, reported_at
            FROM matches
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(TournamentError::storage("match_entries"))?;

        let records = rows
            .into_iter()
            .map(|row| MatchRecord {
                id: row.get("id"),
                winner: row.get("id_player1"),
                loser: row.get("id_player2"),
                outcome: row.get("outcome"),
                reported_at: row
                    .get::<chrono::NaiveDateTime, _>("reported_at")
                    .and_utc(),
            })
            .collect();

        Ok(records)
    }

    async fn check_player_exists(
        tx: &mut Transaction<'_, Postgres>,
        player_id: PlayerId,
    ) -> TournamentResult<()> {
        let row = sqlx::query("SELECT id FROM players WHERE id = $1")
            .bind(player_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(TournamentError::storage("record_match"))?;

        if row.is_none() {
            return Err(TournamentError::InvalidReference(player_id));
        }
        Ok(())
    }
}
