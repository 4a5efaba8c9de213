//! Tournament error types.

use thiserror::Error;

use crate::registry::PlayerId;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Failed to establish a database connection
    #[error("Database connection failed: {0}")]
    Connection(sqlx::Error),

    /// A query failed mid-operation
    #[error("Storage error during {operation}: {source}")]
    Storage {
        operation: &'static str,
        source: sqlx::Error,
    },

    /// Player name may not be empty
    #[error("Player name may not be empty")]
    InvalidName,

    /// A match references a player id that does not exist
    #[error("Match references unknown player {0}")]
    InvalidReference(PlayerId),

    /// A match pairs a player against themself
    #[error("Player {0} cannot play against themself")]
    SelfMatch(PlayerId),

    /// Not enough players to run a tournament
    #[error("Insufficient players: need {needed}, have {current}")]
    InsufficientPlayers { needed: usize, current: usize },
}

impl TournamentError {
    /// Wrap a query failure with the name of the failing operation.
    ///
    /// Intended for `map_err`:
    ///
    /// ```ignore
    /// sqlx::query("DELETE FROM matches")
    ///     .execute(pool)
    ///     .await
    ///     .map_err(TournamentError::storage("delete_matches"))?;
    /// ```
    pub fn storage(operation: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Storage { operation, source }
    }

    /// Get a client-safe error message that doesn't leak sensitive information
    ///
    /// Storage and connection errors are sanitized to avoid exposing SQL
    /// details or connection strings to callers that relay messages outward.
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::Connection(_) => "Service unavailable".to_string(),
            TournamentError::Storage { .. } => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_wrapper_keeps_operation() {
        let err = TournamentError::storage("record_match")(sqlx::Error::PoolClosed);
        match err {
            TournamentError::Storage { operation, .. } => assert_eq!(operation, "record_match"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_client_message_sanitizes_storage_errors() {
        let err = TournamentError::storage("standings")(sqlx::Error::PoolClosed);
        assert_eq!(err.client_message(), "Internal server error");

        let err = TournamentError::Connection(sqlx::Error::PoolTimedOut);
        assert_eq!(err.client_message(), "Service unavailable");
    }

    #[test]
    fn test_client_message_passes_domain_errors_through() {
        let err = TournamentError::SelfMatch(7);
        assert_eq!(err.client_message(), "Player 7 cannot play against themself");
    }
}
