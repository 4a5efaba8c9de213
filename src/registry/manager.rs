//! Player registry manager.

use sqlx::{PgPool, Row};
use std::sync::Arc;

use super::models::{Player, PlayerId};
use crate::errors::{TournamentError, TournamentResult};

/// Player registry
#[derive(Clone)]
pub struct PlayerRegistry {
    pool: Arc<PgPool>,
}

impl PlayerRegistry {
    /// Create a new player registry
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Register a player and return the assigned id
    ///
    /// Duplicate names are allowed; the database assigns a fresh serial id.
    ///
    /// # Errors
    ///
    /// * [`TournamentError::InvalidName`] - `name` is empty
    pub async fn register(&self, name: &str) -> TournamentResult<PlayerId> {
        if name.is_empty() {
            return Err(TournamentError::InvalidName);
        }

        let row = sqlx::query("INSERT INTO players (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(TournamentError::storage("register_player"))?;

        let id: PlayerId = row.get("id");
        log::info!("Registered player {id} ({name})");
        Ok(id)
    }

    /// Number of currently registered players
    pub async fn count(&self) -> TournamentResult<usize> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM players")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(TournamentError::storage("count_players"))?;

        let total: i64 = row.get("total");
        Ok(total as usize)
    }

    /// Fetch a single player by id
    pub async fn get(&self, player_id: PlayerId) -> TournamentResult<Option<Player>> {
        let row = sqlx::query("SELECT id, name, created_at FROM players WHERE id = $1")
            .bind(player_id)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(TournamentError::storage("get_player"))?;

        Ok(row.map(|row| Player {
            id: row.get("id"),
            name: row.get("name"),
            created_at: row.get::<chrono::NaiveDateTime, _>("created_at").and_utc(),
        }))
    }

    /// Remove every player
    ///
    /// Match rows cascade with their players, so the match log is cleared in
    /// the same statement and no dangling ids can survive.
    pub async fn delete_all(&self) -> TournamentResult<()> {
        let result = sqlx::query("DELETE FROM players")
            .execute(self.pool.as_ref())
            .await
            .map_err(TournamentError::storage("delete_players"))?;

        log::info!("Deleted {} players", result.rows_affected());
        Ok(())
    }
}
