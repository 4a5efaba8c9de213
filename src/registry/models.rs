//! Player data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player ID type
pub type PlayerId = i64;

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique id assigned at registration
    pub id: PlayerId,
    /// Full name as registered (need not be unique)
    pub name: String,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}
