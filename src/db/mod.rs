//! Database module providing PostgreSQL connection pooling and schema setup.
//!
//! This module manages the database connection pool using sqlx. All tournament
//! components share one pool and take a connection (or transaction) per
//! logical operation rather than opening a connection per call.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::errors::{TournamentError, TournamentResult};

pub mod config;

pub use config::DatabaseConfig;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    ///
    /// # Arguments
    ///
    /// * `config` - Database configuration
    ///
    /// # Errors
    ///
    /// Returns [`TournamentError::Connection`] when the pool cannot be
    /// established. Callers are expected to surface this rather than continue
    /// without a connection.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use swiss_rounds::db::{Database, DatabaseConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), swiss_rounds::TournamentError> {
    ///     let config = DatabaseConfig::from_env();
    ///     let db = Database::new(&config).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn new(config: &DatabaseConfig) -> TournamentResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
            .connect(&config.database_url)
            .await
            .map_err(TournamentError::Connection)?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the tournament tables if they do not exist
    ///
    /// Idempotent. Wins and matches played are never stored on `players`;
    /// they are derived from `matches` on every standings query. A row with
    /// `id_player2 IS NULL` records a bye for `id_player1`.
    pub async fn ensure_schema(&self) -> TournamentResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS players (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL CHECK (name <> ''),
                created_at TIMESTAMP NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(TournamentError::storage("ensure_schema"))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS matches (
                id BIGSERIAL PRIMARY KEY,
                id_player1 BIGINT NOT NULL REFERENCES players(id) ON DELETE CASCADE,
                id_player2 BIGINT REFERENCES players(id) ON DELETE CASCADE,
                outcome INTEGER NOT NULL DEFAULT 1,
                reported_at TIMESTAMP NOT NULL DEFAULT NOW(),
                CHECK (id_player2 IS NULL OR id_player1 <> id_player2)
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(TournamentError::storage("ensure_schema"))?;

        Ok(())
    }

    /// Check if the database connection is healthy
    pub async fn health_check(&self) -> TournamentResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(TournamentError::storage("health_check"))?;
        Ok(())
    }

    /// Close the database connection pool
    pub async fn close(self) {
        self.pool.close().await;
    }
}
