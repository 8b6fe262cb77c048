//! In-memory leaderboard of finished games.

use alloc::string::String;
use alloc::vec::Vec;

/// A finished game: who played and how many attempts it took.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Score {
    player: String,
    attempts: u32,
}

impl Score {
    pub fn new(player: impl Into<String>, attempts: u32) -> Self {
        Self {
            player: player.into(),
            attempts,
        }
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Append-only collection of scores.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    scores: Vec<Score>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, score: Score) {
        self.scores.push(score);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Scores ordered by ascending attempts. Ties keep insertion order.
    pub fn ranked(&self) -> Vec<&Score> {
        let mut ranked: Vec<&Score> = self.scores.iter().collect();
        ranked.sort_by_key(|s| s.attempts);
        ranked
    }

    /// The best `n` scores.
    pub fn top(&self, n: usize) -> Vec<&Score> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}
