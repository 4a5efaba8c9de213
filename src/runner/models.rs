//! Tournament runner data models and reports.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::standings::StandingRow;

/// Tournament phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentPhase {
    /// No round has been played yet
    NotStarted,
    /// Round `k` (1-indexed) is being resolved
    RoundInProgress(u32),
    /// All rounds are complete
    Finished,
}

/// Number of Swiss rounds for the given player count: `floor(log2(n))`
///
/// Undefined for fewer than two players; callers must reject those counts
/// before calling.
pub fn rounds_for(player_count: usize) -> u32 {
    debug_assert!(player_count >= 2);
    player_count.ilog2()
}

/// Standings snapshot taken after one completed round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round number (1-indexed)
    pub round: u32,
    /// Standings after the round's matches were recorded
    pub standings: Vec<StandingRow>,
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Standings after round {}", self.round)?;
        writeln!(f, "Ranking | Name | Wins")?;
        for (position, row) in self.standings.iter().enumerate() {
            writeln!(f, " {}. | {} | {}", position + 1, row.name, row.wins)?;
        }
        Ok(())
    }
}

/// Full report of a simulated tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentReport {
    /// Players registered when the tournament started
    pub player_count: usize,
    /// Rounds played: `floor(log2(player_count))`
    pub total_rounds: u32,
    /// Match rows written during the run, byes included
    pub matches_recorded: usize,
    /// Per-round standings snapshots
    pub rounds: Vec<RoundReport>,
    /// Top standings row after the final round
    pub champion: StandingRow,
}

impl fmt::Display for TournamentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Welcome to the Open Grand Slam Tournament.")?;
        writeln!(f, "There are {} players registered.", self.player_count)?;
        writeln!(
            f,
            "There will be {} matches in {} rounds. Good luck to you all!",
            self.matches_recorded, self.total_rounds
        )?;
        for round in &self.rounds {
            writeln!(f)?;
            round.fmt(f)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "And the tournament has finished and we have a winner! Congratulations to {}! Great games!",
            self.champion.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_for_powers_of_two() {
        assert_eq!(rounds_for(2), 1);
        assert_eq!(rounds_for(4), 2);
        assert_eq!(rounds_for(8), 3);
        assert_eq!(rounds_for(16), 4);
    }

    #[test]
    fn test_rounds_for_rounds_down() {
        assert_eq!(rounds_for(3), 1);
        assert_eq!(rounds_for(5), 2);
        assert_eq!(rounds_for(7), 2);
        assert_eq!(rounds_for(9), 3);
    }

    #[test]
    fn test_round_report_lists_every_player() {
        let report = RoundReport {
            round: 1,
            standings: vec![
                StandingRow {
                    player_id: 1,
                    name: "Alice".to_string(),
                    wins: 1,
                    matches_played: 1,
                },
                StandingRow {
                    player_id: 2,
                    name: "Bob".to_string(),
                    wins: 0,
                    matches_played: 1,
                },
            ],
        };

        let text = report.to_string();
        assert!(text.contains("Standings after round 1"));
        assert!(text.contains(" 1. | Alice | 1"));
        assert!(text.contains(" 2. | Bob | 0"));
    }

    #[test]
    fn test_tournament_report_names_the_champion() {
        let champion = StandingRow {
            player_id: 1,
            name: "Alice".to_string(),
            wins: 3,
            matches_played: 3,
        };
        let report = TournamentReport {
            player_count: 8,
            total_rounds: 3,
            matches_recorded: 12,
            rounds: vec![],
            champion,
        };

        let text = report.to_string();
        assert!(text.contains("There are 8 players registered."));
        assert!(text.contains("12 matches in 3 rounds"));
        assert!(text.contains("Congratulations to Alice!"));
    }
}
