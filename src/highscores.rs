//! Longest-distance leaderboard
//!
//! The persistence collaborator: the sim core only emits a final score when
//! a session ends, and this store decides whether the record improves.
//! Persisted as a small JSON file; a missing or corrupt file starts fresh.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Distance score at session end
    pub distance: i32,
    /// Unix timestamp (seconds) when achieved
    pub timestamp: u64,
}

/// Longest-distance leaderboard, sorted descending
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a distance qualifies for the leaderboard.
    /// Zero and negative runs never do.
    pub fn qualifies(&self, distance: i32) -> bool {
        if distance <= 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries
            .last()
            .map(|e| distance > e.distance)
            .unwrap_or(true)
    }

    /// Add a finished run (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(&mut self, distance: i32, timestamp: u64) -> Option<usize> {
        if !self.qualifies(distance) {
            return None;
        }

        let entry = HighScoreEntry {
            distance,
            timestamp,
        };

        let pos = self.entries.iter().position(|e| distance > e.distance);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The longest distance so far (if any)
    pub fn top_score(&self) -> Option<i32> {
        self.entries.first().map(|e| e.distance)
    }

    /// Load the leaderboard from a JSON file; any failure starts fresh
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(e) => {
                    log::warn!("high score file unreadable ({e}), starting fresh");
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("no high score file, starting fresh");
                Self::new()
            }
        }
    }

    /// Save the leaderboard to a JSON file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("high scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}
