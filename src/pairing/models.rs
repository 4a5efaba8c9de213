//! Pairing data models.

use serde::{Deserialize, Serialize};

use crate::registry::PlayerId;
use crate::standings::StandingRow;

/// Two players assigned to meet in the next round
///
/// Pair order carries no outcome: callers decide who plays whom and report
/// the result separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// First player's id
    pub id1: PlayerId,
    /// First player's name
    pub name1: String,
    /// Second player's id
    pub id2: PlayerId,
    /// Second player's name
    pub name2: String,
}

impl Pairing {
    /// The pair as an id tuple
    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.id1, self.id2)
    }
}

/// Pairings for one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPairings {
    /// Adjacent pairs in standings order
    pub pairings: Vec<Pairing>,
    /// Unpaired player when the count is odd; receives an automatic win
    pub bye: Option<StandingRow>,
}

impl RoundPairings {
    /// Pairings as id tuples
    pub fn id_pairs(&self) -> Vec<(PlayerId, PlayerId)> {
        self.pairings.iter().map(Pairing::ids).collect()
    }

    /// Number of players covered, bye recipient included
    pub fn players_covered(&self) -> usize {
        self.pairings.len() * 2 + usize::from(self.bye.is_some())
    }
}
