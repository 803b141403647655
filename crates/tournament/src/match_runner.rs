//! Match runner for playing games between engines

use checkers_core::{Board, Color, Engine};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::elo::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum moves per game before declaring a draw
    pub max_moves: u32,
    /// Base seed for the elemental power assignment; each game uses
    /// `seed + game_num` so a match is reproducible end to end
    pub seed: u64,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            max_moves: 200,
            seed: 0,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Load a config from a TOML file
    pub fn from_toml_file(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let seed = self.config.seed.wrapping_add(game_num as u64);
            // Alternate which engine plays Light if configured
            let engine1_light = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_light {
                self.play_game(engine1, engine2, seed)
            } else {
                // Flip the result since engine1 plays Dark
                match self.play_game(engine2, engine1, seed) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };
            result.record(game_result);

            if self.config.verbose {
                let color = if engine1_light { "L" } else { "D" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returning the result from Light's perspective.
    /// Dark opens, per the game's convention.
    fn play_game<'a>(&self, light: &'a mut dyn Engine, dark: &'a mut dyn Engine, seed: u64) -> GameResult {
        let mut board = Board::startpos_with(&mut StdRng::seed_from_u64(seed));
        let mut to_move = Color::Dark;
        light.new_game();
        dark.new_game();

        for _ in 0..self.config.max_moves {
            if let Some(winner) = board.winner() {
                return result_for(winner);
            }

            let engine = match to_move {
                Color::Light => &mut *light,
                Color::Dark => &mut *dark,
            };
            match engine.choose_move(&board, to_move, self.config.depth).board {
                Some(next) => board = next,
                // No legal reply: the mover loses
                None => return result_for(to_move.other()),
            }
            to_move = to_move.other();
        }

        GameResult::Draw
    }
}

fn result_for(winner: Color) -> GameResult {
    match winner {
        Color::Light => GameResult::Win,
        Color::Dark => GameResult::Loss,
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
