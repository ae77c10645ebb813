//! Player statistics
//!
//! Games played, wins, streaks and the guess distribution, persisted as JSON
//! between runs. Fed one [`GameResult`] per finished game.

use crate::game::{GameResult, MAX_ATTEMPTS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default statistics file, relative to the working directory
pub const DEFAULT_STATS_FILE: &str = "wordle_stats.json";

/// Accumulated results across games
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by number of guesses; index 0 is a win on the first guess
    pub guess_distribution: [u32; MAX_ATTEMPTS],
}

impl Statistics {
    /// Load statistics from `path`, starting fresh if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no statistics file, starting fresh");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read statistics from {}", path.display()))?;
        let stats = serde_json::from_str(&content)
            .with_context(|| format!("invalid statistics file {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded statistics");
        Ok(stats)
    }

    /// Write statistics to `path` as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("failed to serialize statistics")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write statistics to {}", path.display()))?;

        tracing::debug!(path = %path.display(), games = self.games_played, "saved statistics");
        Ok(())
    }

    /// Fold one finished game into the totals
    pub fn record(&mut self, result: GameResult) {
        self.games_played += 1;

        if result.won {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            if let Some(slot) = result
                .attempts_used
                .checked_sub(1)
                .and_then(|i| self.guess_distribution.get_mut(i))
            {
                *slot += 1;
            }
        } else {
            self.current_streak = 0;
        }
    }

    /// Percentage of games won (0 when nothing has been played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }
}
