//! Weighted static evaluation of a board.

use checkers_core::{valid_moves, Board, Color, Piece};

/// Evaluates the board from Light's perspective.
///
/// Positive = good for Light (the maximizing side), negative = good for
/// Dark. Per side: men + 2.0*kings + 0.5*unused powers + 0.1*positional sum
/// + 0.1*mobility. The weights are load-bearing: search quality and the
/// parity tests depend on this exact formula.
pub fn evaluate(board: &Board) -> f64 {
    side_score(board, Color::Light) - side_score(board, Color::Dark)
}

fn side_score(board: &Board, color: Color) -> f64 {
    let pieces = board.pieces_of(color);

    let kings = pieces.iter().filter(|p| p.king).count();
    let men = pieces.len() - kings;
    let powers = pieces.iter().filter(|p| p.can_use_power()).count();

    let position: f64 = pieces.iter().map(position_value).sum();
    let mobility: usize = pieces.iter().map(|p| valid_moves(board, p).len()).sum();

    men as f64
        + 2.0 * kings as f64
        + 0.5 * powers as f64
        + 0.1 * position
        + 0.1 * mobility as f64
}

/// Positional value of a single piece: men are rewarded for advancing
/// toward promotion, kings for centrality; edge squares are penalized and
/// an unused elemental power carries a flat bonus.
pub fn position_value(piece: &Piece) -> f64 {
    let (row, col) = (piece.row, piece.col);
    let mut value = if piece.king {
        let center_dist = (row as f64 - 3.5).abs() + (col as f64 - 3.5).abs();
        (7.0 - center_dist) * 0.1
    } else {
        let advanced = match piece.color {
            Color::Light => row,
            Color::Dark => 7 - row,
        };
        advanced as f64 * 0.1
    };

    if row == 0 || row == 7 || col == 0 || col == 7 {
        value -= 0.2;
    }
    if piece.can_use_power() {
        value += 0.3;
    }

    value
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
