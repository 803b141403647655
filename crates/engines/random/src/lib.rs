//! Random Move Checkers Engine
//!
//! Picks uniformly at random from all reachable successor boards. Useful as
//! a tournament baseline (any real engine should easily beat this) and for
//! stress testing move generation, including the elemental special moves.

use checkers_core::{successors, Board, Color, Engine, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// A checkers engine that plays random legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, board: &Board, to_move: Color, _depth: u8) -> SearchResult {
        let children = successors(board, to_move);
        let nodes = children.len() as u64;
        let board_out = children.choose(&mut thread_rng()).cloned();

        SearchResult {
            board: board_out,
            score: 0.0,
            depth: 1,
            nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
