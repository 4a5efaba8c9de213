//! Match log data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::registry::PlayerId;

/// Match ID type
pub type MatchId = i64;

/// Outcome flag stored with every row: the first listed player won.
pub const OUTCOME_WIN: i32 = 1;

/// One completed match
///
/// `winner` is always the first listed player. A `loser` of `None` records a
/// bye: an automatic win credited without an opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique id assigned at creation
    pub id: MatchId,
    /// The winning player
    pub winner: PlayerId,
    /// The losing player, or `None` for a bye
    pub loser: Option<PlayerId>,
    /// Outcome flag (always [`OUTCOME_WIN`])
    pub outcome: i32,
    /// When the match was reported
    pub reported_at: DateTime<Utc>,
}

impl MatchRecord {
    /// Whether this row records a bye rather than a played match
    pub fn is_bye(&self) -> bool {
        self.loser.is_none()
    }

    /// Whether the given player took part in this match
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.winner == player_id || self.loser == Some(player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(winner: PlayerId, loser: Option<PlayerId>) -> MatchRecord {
        MatchRecord {
            id: 1,
            winner,
            loser,
            outcome: OUTCOME_WIN,
            reported_at: Utc::now(),
        }
    }

    #[test]
    fn test_bye_detection() {
        assert!(record(3, None).is_bye());
        assert!(!record(3, Some(4)).is_bye());
    }

    #[test]
    fn test_involves_both_sides() {
        let m = record(3, Some(4));
        assert!(m.involves(3));
        assert!(m.involves(4));
        assert!(!m.involves(5));
    }

    #[test]
    fn test_bye_involves_only_recipient() {
        let m = record(3, None);
        assert!(m.involves(3));
        assert!(!m.involves(4));
    }
}
