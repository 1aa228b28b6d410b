//! Running statistics for the current process
//!
//! Nothing is persisted; the tracker lives as long as the menu loop.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::games::RpsResult;

/// Aggregate counters across completed games
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Fewest attempts in a won guessing game (absent until one is won)
    pub best_guess_attempts: Option<u32>,
    /// Rounds won by the player across all recorded RPS sessions
    pub rps_player_wins: u32,
    /// Rounds won by the computer across all recorded RPS sessions
    pub rps_computer_wins: u32,
    /// Completed sessions of either game
    pub games_played: u32,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a won guessing game
    pub fn record_guessing(&mut self, attempts: u32) {
        if self.best_guess_attempts.is_none_or(|best| attempts < best) {
            self.best_guess_attempts = Some(attempts);
        }
        self.games_played += 1;
    }

    /// Record a finished RPS session
    pub fn record_rps(&mut self, result: RpsResult) {
        self.rps_player_wins += result.player_wins;
        self.rps_computer_wins += result.computer_wins;
        self.games_played += 1;
    }

    /// Total decisive RPS rounds recorded
    pub fn rps_rounds(&self) -> u32 {
        self.rps_player_wins + self.rps_computer_wins
    }

    /// Player's share of decisive RPS rounds, as a percentage
    pub fn win_rate(&self) -> Option<f64> {
        match self.rps_rounds() {
            0 => None,
            rounds => Some(self.rps_player_wins as f64 / rounds as f64 * 100.0),
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(40);
        writeln!(f, "\n{rule}")?;
        writeln!(f, "           GAME STATISTICS")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Total games played: {}", self.games_played)?;

        if let Some(best) = self.best_guess_attempts {
            writeln!(f, "Number Game best score: {best} attempts")?;
        }

        if let Some(rate) = self.win_rate() {
            writeln!(f, "RPS Player wins: {}", self.rps_player_wins)?;
            writeln!(f, "RPS Computer wins: {}", self.rps_computer_wins)?;
            writeln!(f, "RPS Win rate: {rate:.1}%")?;
        }

        write!(f, "{rule}")
    }
}
