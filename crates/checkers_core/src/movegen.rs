//! Legal move generation, elemental modifiers and move simulation.

use crate::board::Board;
use crate::types::*;

/// Diagonal directions in enumeration order: up-left, up-right, down-left,
/// down-right. Iteration order is part of the search tie-break contract.
pub const DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Complete move map for a single piece on the given board.
///
/// Base diagonal moves first (kings in all four directions, men forward
/// only), then the water, air and fire additions for pieces whose matching
/// power is still unused. Earth never adds moves for its holder; it is
/// handled when the holder is captured.
pub fn valid_moves(board: &Board, piece: &Piece) -> MoveMap {
    let mut moves = MoveMap::new();
    let (row, col) = (piece.row, piece.col);

    if piece.king {
        for &(dr, dc) in &DIRECTIONS {
            ray_walk(board, piece.color, true, row + dr, col + dc, dr, dc, &[], false, &mut moves);
        }
    } else {
        let fwd = piece.color.forward();
        for &(dr, dc) in &DIRECTIONS {
            if dr == fwd {
                ray_walk(board, piece.color, false, row + dr, col + dc, dr, dc, &[], false, &mut moves);
            }
        }
        // Water grants the mirror-direction walk with the same short reach.
        if piece.has_power(Element::Water) {
            for &(dr, dc) in &DIRECTIONS {
                if dr == -fwd {
                    ray_walk(board, piece.color, false, row + dr, col + dc, dr, dc, &[], true, &mut moves);
                }
            }
        }
    }

    if piece.has_power(Element::Air) && !piece.king {
        air_moves(board, piece, &mut moves);
    }
    if piece.has_power(Element::Fire) {
        fire_moves(board, piece, &mut moves);
    }

    moves
}

/// Walk one diagonal ray starting at (row, col).
///
/// Empty squares are simple destinations (kings keep sliding, men stop after
/// one). An opposing piece becomes a pending jump target; if the next square
/// is empty the landing is recorded as a capture and chained jumps are
/// explored from there in all four directions, otherwise the ray is blocked.
/// With `skipped` non-empty (chain mode) the first square must hold a
/// jumpable enemy, and pieces already in the chain block the ray so a
/// reversed direction cannot capture the same piece twice.
#[allow(clippy::too_many_arguments)]
fn ray_walk(
    board: &Board,
    color: Color,
    king: bool,
    start_row: i8,
    start_col: i8,
    dr: i8,
    dc: i8,
    skipped: &[Piece],
    water: bool,
    moves: &mut MoveMap,
) {
    let mut row = start_row;
    let mut col = start_col;
    let mut pending: Option<Piece> = None;
    let mut steps = 0;

    while on_board(row, col) {
        steps += 1;
        if !king && steps > 2 {
            break;
        }

        match board.piece_at(row, col) {
            None => {
                if let Some(jumped) = pending {
                    if water {
                        // A water move is never a capture, even over a piece.
                        moves.insert((row, col), MoveKind::WaterPower);
                    } else {
                        let mut caught = skipped.to_vec();
                        caught.push(jumped);
                        moves.insert((row, col), MoveKind::Capture(caught.clone()));
                        for &(ndr, ndc) in &DIRECTIONS {
                            ray_walk(
                                board,
                                color,
                                king,
                                row + ndr,
                                col + ndc,
                                ndr,
                                ndc,
                                &caught,
                                false,
                                moves,
                            );
                        }
                    }
                    break;
                }
                if !skipped.is_empty() {
                    // Chains must keep jumping; no sliding between jumps.
                    break;
                }
                let kind = if water { MoveKind::WaterPower } else { MoveKind::Simple };
                moves.insert((row, col), kind);
                if !king {
                    break;
                }
            }
            Some(other) if other.color == color => break,
            Some(enemy) => {
                if pending.is_some() {
                    break;
                }
                if skipped.iter().any(|s| s.row == enemy.row && s.col == enemy.col) {
                    break;
                }
                pending = Some(enemy);
            }
        }

        row += dr;
        col += dc;
    }
}

/// Air power: hop exactly two squares along a forward diagonal onto an empty
/// landing square. The intermediate square is deliberately not checked.
/// Kings never get air hops. An air entry must not shadow a plain capture
/// reaching the same square.
fn air_moves(board: &Board, piece: &Piece, moves: &mut MoveMap) {
    let fwd = piece.color.forward();
    for &(dr, dc) in &[(-2i8, -2i8), (-2, 2), (2, -2), (2, 2)] {
        if dr.signum() != fwd {
            continue;
        }
        let (row, col) = (piece.row + dr, piece.col + dc);
        if !on_board(row, col) || board.piece_at(row, col).is_some() {
            continue;
        }
        if matches!(moves.get((row, col)), Some(MoveKind::Capture(_))) {
            continue;
        }
        moves.insert((row, col), MoveKind::AirPower);
    }
}

/// Fire power: every adjacent diagonal enemy becomes a capture target, keyed
/// at the piece's own square since the attacker does not move.
fn fire_moves(board: &Board, piece: &Piece, moves: &mut MoveMap) {
    let mut targets = Vec::new();
    for &(dr, dc) in &DIRECTIONS {
        if let Some(other) = board.piece_at(piece.row + dr, piece.col + dc) {
            if other.color != piece.color {
                targets.push(other);
            }
        }
    }
    if !targets.is_empty() {
        moves.insert((piece.row, piece.col), MoveKind::FirePower(targets));
    }
}

/// First captured piece whose unused earth power intercepts the capture.
pub fn earth_defender(caught: &[Piece]) -> Option<Piece> {
    caught.iter().copied().find(|p| p.has_power(Element::Earth))
}

/// Apply one generated move to a fresh copy of the board.
///
/// Mirrors the interactive rules: an earth defender in the capture list
/// turns the jump into a relocation without removal (consuming the
/// defender's power, simulated "yes"); fire removes its targets without
/// moving the attacker; air and water consume the power and relocate without
/// capturing; plain captures resolve the mandatory multi-jump chain.
pub fn apply_move(board: &Board, from: (i8, i8), dest: (i8, i8), kind: &MoveKind) -> Board {
    let mut next = board.clone();
    match kind {
        MoveKind::Simple => {
            next.move_piece(from, dest);
        }
        MoveKind::WaterPower | MoveKind::AirPower => {
            next.mark_power_used(from);
            next.move_piece(from, dest);
        }
        MoveKind::FirePower(targets) => {
            next.mark_power_used(from);
            next.remove_pieces(targets);
        }
        MoveKind::Capture(caught) => {
            if let Some(defender) = earth_defender(caught) {
                next.mark_power_used((defender.row, defender.col));
                next.move_piece(from, dest);
                return next;
            }
            next.move_piece(from, dest);
            next.remove_pieces(caught);
            resolve_chain(&mut next, dest);
        }
    }
    next
}

/// Greedily extend a capture chain: keep taking the longest available plain
/// capture (first in enumeration order on ties) until none is left. Earth is
/// re-checked at every step and ends the chain with a relocation.
fn resolve_chain(board: &mut Board, mut at: (i8, i8)) {
    loop {
        let Some(piece) = board.piece_at(at.0, at.1) else { return };
        let moves = valid_moves(board, &piece);

        let mut best: Option<((i8, i8), Vec<Piece>)> = None;
        for (dest, kind) in moves.iter() {
            if let MoveKind::Capture(caught) = kind {
                let longer = best.as_ref().map_or(true, |(_, b)| caught.len() > b.len());
                if longer {
                    best = Some((*dest, caught.clone()));
                }
            }
        }
        let Some((dest, caught)) = best else { return };

        if let Some(defender) = earth_defender(&caught) {
            board.mark_power_used((defender.row, defender.col));
            board.move_piece(at, dest);
            return;
        }
        board.move_piece(at, dest);
        board.remove_pieces(&caught);
        at = dest;
    }
}

/// Every board reachable in one move by `color`, enumerating pieces in
/// row-major order and destinations in generation order. Forced capture is
/// an interactive rule; the search sees the full move set, as the evaluation
/// already punishes ignoring material.
pub fn successors(board: &Board, color: Color) -> Vec<Board> {
    let mut out = Vec::new();
    for piece in board.pieces_of(color) {
        let moves = valid_moves(board, &piece);
        for (dest, kind) in moves.iter() {
            out.push(apply_move(board, (piece.row, piece.col), *dest, kind));
        }
    }
    out
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
