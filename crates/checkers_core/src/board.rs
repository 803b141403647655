use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::movegen::valid_moves;
use crate::types::*;

/// 8x8 checkers board with cached piece and king counters.
///
/// Plain value type: the search engine snapshots boards with `clone()` and
/// never shares state between branches.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    grid: [[Option<Piece>; COLS as usize]; ROWS as usize],
    light_left: u8,
    dark_left: u8,
    light_kings: u8,
    dark_kings: u8,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            grid: [[None; COLS as usize]; ROWS as usize],
            light_left: 0,
            dark_left: 0,
            light_kings: 0,
            dark_kings: 0,
        }
    }

    /// Standard opening layout using `thread_rng` for element assignment.
    pub fn startpos() -> Self {
        Self::startpos_with(&mut thread_rng())
    }

    /// Standard opening layout: 12 Light pieces on rows 0-2, 12 Dark pieces
    /// on rows 5-7, dark squares only. Each piece draws its element
    /// uniformly from the injected generator, so tests can seed it.
    pub fn startpos_with<R: Rng>(rng: &mut R) -> Self {
        let mut board = Self::empty();
        for row in 0..ROWS {
            for col in 0..COLS {
                if (row + col) % 2 != 1 {
                    continue;
                }
                let color = if row < 3 {
                    Color::Light
                } else if row > 4 {
                    Color::Dark
                } else {
                    continue;
                };
                let element = *ELEMENTS.choose(rng).unwrap_or(&Element::Fire);
                board.place(Piece::with_element(row, col, color, element));
            }
        }
        board
    }

    /// Put a piece on its square and update the counters. Test and layout
    /// helper; the square must be empty.
    pub fn place(&mut self, piece: Piece) {
        debug_assert!(on_board(piece.row, piece.col));
        debug_assert!(self.grid[piece.row as usize][piece.col as usize].is_none());
        match piece.color {
            Color::Light => {
                self.light_left += 1;
                if piece.king {
                    self.light_kings += 1;
                }
            }
            Color::Dark => {
                self.dark_left += 1;
                if piece.king {
                    self.dark_kings += 1;
                }
            }
        }
        self.grid[piece.row as usize][piece.col as usize] = Some(piece);
    }

    /// Occupant of a square, or `None` for empty and off-board coordinates.
    /// Presentation-layer clicks routinely land off-board, so this never
    /// panics on bad input.
    pub fn piece_at(&self, row: i8, col: i8) -> Option<Piece> {
        if !on_board(row, col) {
            return None;
        }
        self.grid[row as usize][col as usize]
    }

    /// All live pieces of a color in row-major scan order. Search
    /// tie-breaking relies on this order.
    pub fn pieces_of(&self, color: Color) -> Vec<Piece> {
        let mut pieces = Vec::with_capacity(12);
        for row in &self.grid {
            for square in row {
                if let Some(p) = square {
                    if p.color == color {
                        pieces.push(*p);
                    }
                }
            }
        }
        pieces
    }

    /// Relocate the piece on `from` to `to`, promoting on the far row.
    /// Promotion marks the elemental power as spent and bumps the king
    /// counter.
    pub fn move_piece(&mut self, from: (i8, i8), to: (i8, i8)) {
        debug_assert!(on_board(to.0, to.1));
        let mut piece = match self.grid[from.0 as usize][from.1 as usize].take() {
            Some(p) => p,
            None => return,
        };
        piece.row = to.0;
        piece.col = to.1;
        if !piece.king && to.0 == piece.color.promotion_row() {
            piece.promote();
            match piece.color {
                Color::Light => self.light_kings += 1,
                Color::Dark => self.dark_kings += 1,
            }
        }
        self.grid[to.0 as usize][to.1 as usize] = Some(piece);
    }

    /// Remove captured pieces, keeping the counters in sync with the grid.
    /// Every entry must refer to a piece currently on the board.
    pub fn remove_pieces(&mut self, pieces: &[Piece]) {
        for target in pieces {
            let taken = self.grid[target.row as usize][target.col as usize].take();
            let Some(piece) = taken else { continue };
            match piece.color {
                Color::Light => {
                    self.light_left -= 1;
                    if piece.king {
                        self.light_kings -= 1;
                    }
                }
                Color::Dark => {
                    self.dark_left -= 1;
                    if piece.king {
                        self.dark_kings -= 1;
                    }
                }
            }
        }
    }

    /// Consume the elemental power of the piece on `at`.
    pub fn mark_power_used(&mut self, at: (i8, i8)) {
        if !on_board(at.0, at.1) {
            return;
        }
        if let Some(piece) = self.grid[at.0 as usize][at.1 as usize].as_mut() {
            piece.power_used = true;
        }
    }

    pub fn pieces_left(&self, color: Color) -> u8 {
        match color {
            Color::Light => self.light_left,
            Color::Dark => self.dark_left,
        }
    }

    pub fn kings(&self, color: Color) -> u8 {
        match color {
            Color::Light => self.light_kings,
            Color::Dark => self.dark_kings,
        }
    }

    /// Winner, if the game is over. A side with no pieces loses; a side with
    /// pieces but no legal move loses (forced-capture convention). Only
    /// evaluated when queried, never enforced mid-move.
    pub fn winner(&self) -> Option<Color> {
        if self.dark_left == 0 {
            return Some(Color::Light);
        }
        if self.light_left == 0 {
            return Some(Color::Dark);
        }

        let can_move = |color| {
            self.pieces_of(color)
                .iter()
                .any(|p| !valid_moves(self, p).is_empty())
        };
        if !can_move(Color::Dark) {
            return Some(Color::Light);
        }
        if !can_move(Color::Light) {
            return Some(Color::Dark);
        }
        None
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
