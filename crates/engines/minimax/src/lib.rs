//! Minimax engine for elemental checkers.
//!
//! Depth-limited minimax with alpha-beta pruning over deep board copies,
//! scored by a weighted material/position/mobility evaluation. Light is the
//! maximizing side by convention.

pub mod eval;
pub mod search;

pub use eval::{evaluate, position_value};
pub use search::{minimax, search};

use checkers_core::{Board, Color, Engine, SearchResult};

/// Alpha-beta minimax engine.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine;

impl MinimaxEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for MinimaxEngine {
    fn choose_move(&mut self, board: &Board, to_move: Color, depth: u8) -> SearchResult {
        if board.winner().is_some() {
            return SearchResult {
                board: None,
                score: evaluate(board),
                depth,
                nodes: 0,
            };
        }

        let mut nodes = 0;
        let maximizing = to_move == Color::Light;
        let (score, best) = minimax(
            board,
            depth,
            maximizing,
            f64::NEG_INFINITY,
            f64::INFINITY,
            &mut nodes,
        );

        // The recursion hands the input board back when the mover has no
        // legal reply; report that as "no move".
        let board_out = if &best == board { None } else { Some(best) };
        SearchResult {
            board: board_out,
            score,
            depth,
            nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }
}
