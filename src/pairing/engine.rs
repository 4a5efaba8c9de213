//! Pairing engine implementation.

use super::models::{Pairing, RoundPairings};
use crate::standings::StandingRow;

/// Pairing engine
///
/// Walks the ranked standings in order and groups consecutive rows into
/// pairs, so every player meets the nearest win-record neighbor still
/// unpaired — the Swiss-system adjacency rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairingEngine;

impl PairingEngine {
    /// Create a new pairing engine
    pub fn new() -> Self {
        Self
    }

    /// Pair a ranked standings list for the next round
    ///
    /// Row 0 is paired with row 1, row 2 with row 3, and so on. With an odd
    /// number of rows the leftover — the lowest-ranked player — becomes the
    /// bye recipient. An empty list yields no pairs and no bye.
    pub fn pair(&self, standings: &[StandingRow]) -> RoundPairings {
        let mut chunks = standings.chunks_exact(2);

        let pairings = chunks
            .by_ref()
            .map(|pair| Pairing {
                id1: pair[0].player_id,
                name1: pair[0].name.clone(),
                id2: pair[1].player_id,
                name2: pair[1].name.clone(),
            })
            .collect();

        let bye = chunks.remainder().first().cloned();

        RoundPairings { pairings, bye }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(player_id: i64, wins: usize) -> StandingRow {
        StandingRow {
            player_id,
            name: format!("player-{player_id}"),
            wins,
            matches_played: wins,
        }
    }

    #[test]
    fn test_pairs_adjacent_rows() {
        let standings = vec![row(1, 2), row(3, 2), row(2, 1), row(4, 0)];
        let round = PairingEngine::new().pair(&standings);

        assert_eq!(round.id_pairs(), vec![(1, 3), (2, 4)]);
        assert!(round.bye.is_none());
    }

    #[test]
    fn test_odd_count_gives_lowest_rank_a_bye() {
        let standings = vec![row(1, 2), row(2, 1), row(3, 0)];
        let round = PairingEngine::new().pair(&standings);

        assert_eq!(round.id_pairs(), vec![(1, 2)]);
        assert_eq!(round.bye.as_ref().map(|r| r.player_id), Some(3));
        assert_eq!(round.players_covered(), 3);
    }

    #[test]
    fn test_empty_standings_pair_to_nothing() {
        let round = PairingEngine::new().pair(&[]);
        assert!(round.pairings.is_empty());
        assert!(round.bye.is_none());
        assert_eq!(round.players_covered(), 0);
    }

    #[test]
    fn test_single_player_is_the_bye() {
        let round = PairingEngine::new().pair(&[row(9, 0)]);
        assert!(round.pairings.is_empty());
        assert_eq!(round.bye.as_ref().map(|r| r.player_id), Some(9));
    }

    #[test]
    fn test_pairing_keeps_names() {
        let standings = vec![row(5, 1), row(6, 0)];
        let round = PairingEngine::new().pair(&standings);

        assert_eq!(round.pairings[0].name1, "player-5");
        assert_eq!(round.pairings[0].name2, "player-6");
    }
}
