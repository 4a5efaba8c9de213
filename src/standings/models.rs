//! Standings data models.

use serde::{Deserialize, Serialize};

use crate::registry::PlayerId;

/// One row of the ranked standings
///
/// Derived from the match log, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    /// Player id
    pub player_id: PlayerId,
    /// Player name as registered
    pub name: String,
    /// Matches this player won (byes included)
    pub wins: usize,
    /// Matches this player appeared in, in either role
    pub matches_played: usize,
}

impl StandingRow {
    /// Matches this player lost
    pub fn losses(&self) -> usize {
        self.matches_played - self.wins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_losses_derived_from_wins_and_matches() {
        let row = StandingRow {
            player_id: 1,
            name: "Alice".to_string(),
            wins: 2,
            matches_played: 3,
        };
        assert_eq!(row.losses(), 1);
    }
}
