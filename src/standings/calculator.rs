//! Standings calculator implementation.

use sqlx::{PgPool, Row};
use std::sync::Arc;

use super::models::StandingRow;
use crate::errors::{TournamentError, TournamentResult};

/// Standings calculator
#[derive(Clone)]
pub struct StandingsCalculator {
    pool: Arc<PgPool>,
}

impl StandingsCalculator {
    /// Create a new standings calculator
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Ranked standings for every registered player
    ///
    /// Wins and matches played are aggregated from the match log in a single
    /// query. Rows are ordered by wins descending with ties broken by player
    /// id ascending — registration order — so the result is deterministic and
    /// repeated calls against an unchanged log are identical. The pairing
    /// engine relies on this ordering.
    pub async fn standings(&self) -> TournamentResult<Vec<StandingRow>> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.name,
                   (SELECT COUNT(*) FROM matches m
                     WHERE m.id_player1 = p.id) AS wins,
                   (SELECT COUNT(*) FROM matches m
                     WHERE m.id_player1 = p.id OR m.id_player2 = p.id) AS matches_played
            FROM players p
            ORDER BY wins DESC, p.id ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(TournamentError::storage("player_standings"))?;

        let standings = rows
            .into_iter()
            .map(|row| StandingRow {
                player_id: row.get("id"),
                name: row.get("name"),
                wins: row.get::<i64, _>("wins") as usize,
                matches_played: row.get::<i64, _>("matches_played") as usize,
            })
            .collect();

        Ok(standings)
    }
}
