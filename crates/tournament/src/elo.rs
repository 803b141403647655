//! Elo rating calculation and tracking

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default starting Elo for new engines
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: GameResult) {
        match game {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Elo rating system for tracking engine strength
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    /// Ratings for each engine (by name/version)
    pub ratings: HashMap<String, f64>,
    /// Number of games played by each engine
    pub games_played: HashMap<String, u32>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tracker from a JSON file
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))
    }

    /// Save tracker to a JSON file
    pub fn save(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))
    }

    /// Get or initialize rating for an engine
    pub fn get_rating(&mut self, engine: &str) -> f64 {
        *self.ratings.entry(engine.to_string()).or_insert(DEFAULT_ELO)
    }

    /// Calculate expected score for engine1 against engine2
    pub fn expected_score(&mut self, engine1: &str, engine2: &str) -> f64 {
        let r1 = self.get_rating(engine1);
        let r2 = self.get_rating(engine2);
        1.0 / (1.0 + 10.0_f64.powf((r2 - r1) / 400.0))
    }

    /// Update ratings after a match
    pub fn update_ratings(&mut self, engine1: &str, engine2: &str, result: &MatchResult) {
        let expected = self.expected_score(engine1, engine2);
        let actual = result.score();

        let games = result.total_games() as f64;
        let elo_change = K_FACTOR * games * (actual - expected);

        let r1 = self.get_rating(engine1);
        let r2 = self.get_rating(engine2);
        self.ratings.insert(engine1.to_string(), r1 + elo_change);
        self.ratings.insert(engine2.to_string(), r2 - elo_change);

        *self.games_played.entry(engine1.to_string()).or_insert(0) += result.total_games();
        *self.games_played.entry(engine2.to_string()).or_insert(0) += result.total_games();
    }

    /// Get a sorted leaderboard
    pub fn leaderboard(&self) -> Vec<(String, f64, u32)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, &rating)| {
                let games = self.games_played.get(name).copied().unwrap_or(0);
                (name.clone(), rating, games)
            })
            .collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }

    /// Print leaderboard to stdout
    pub fn print_leaderboard(&self) {
        println!("\n=== Engine Leaderboard ===");
        println!("{:<30} {:>8} {:>8}", "Engine", "Elo", "Games");
        println!("{}", "-".repeat(50));
        for (name, rating, games) in self.leaderboard() {
            println!("{:<30} {:>8.1} {:>8}", name, rating, games);
        }
        println!();
    }
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
