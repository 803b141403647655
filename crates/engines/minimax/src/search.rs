//! Minimax search with alpha-beta pruning over board snapshots.

use checkers_core::{successors, Board, Color};

use crate::eval::evaluate;

/// Searches the position and returns the best reachable board with its score.
///
/// `maximizing` means Light is to move (Light always maximizes). Bounds
/// start at -inf/+inf; the depth bound is the only cutoff.
pub fn search(board: &Board, depth: u8, maximizing: bool) -> (f64, Board) {
    let mut nodes = 0;
    minimax(board, depth, maximizing, f64::NEG_INFINITY, f64::INFINITY, &mut nodes)
}

/// Recursive minimax with alpha-beta pruning.
///
/// Every candidate move is simulated into a fresh deep copy, so no branch
/// ever mutates a board shared with a sibling or with the caller. On equal
/// scores the later-enumerated child wins; enumeration follows the board's
/// row-major piece scan and the generator's direction order, which makes
/// results reproducible for a fixed position.
pub fn minimax(
    board: &Board,
    depth: u8,
    maximizing: bool,
    mut alpha: f64,
    mut beta: f64,
    nodes: &mut u64,
) -> (f64, Board) {
    *nodes += 1;

    if depth == 0 || board.winner().is_some() {
        return (evaluate(board), board.clone());
    }

    let mover = if maximizing { Color::Light } else { Color::Dark };
    let mut best_board: Option<Board> = None;

    if maximizing {
        let mut best = f64::NEG_INFINITY;
        for child in successors(board, mover) {
            let (value, _) = minimax(&child, depth - 1, false, alpha, beta, nodes);
            if value >= best {
                best = value;
                best_board = Some(child);
            }
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        match best_board {
            Some(b) => (best, b),
            None => (evaluate(board), board.clone()),
        }
    } else {
        let mut best = f64::INFINITY;
        for child in successors(board, mover) {
            let (value, _) = minimax(&child, depth - 1, true, alpha, beta, nodes);
            if value <= best {
                best = value;
                best_board = Some(child);
            }
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        match best_board {
            Some(b) => (best, b),
            None => (evaluate(board), board.clone()),
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
