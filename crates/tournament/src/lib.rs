//! Tournament Runner for elemental checkers
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Tracking Elo ratings across engine versions
//! - Generating reports from match results
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax engine and the random baseline
//! cargo run -p tournament -- match minimax random --games 20 --depth 3
//!
//! # Show the current Elo leaderboard
//! cargo run -p tournament -- leaderboard
//! ```

mod elo;
mod match_runner;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use results::*;
