//! Interactive rules layer: piece selection, forced captures, the fire
//! two-step flow and the earth-power interception protocol.
//!
//! This is the headless counterpart of a GUI click handler: the presentation
//! layer feeds in board coordinates and yes/no decisions, and reads back the
//! move map, the winner signal and the pending earth prompt.

use rand::Rng;

use crate::board::Board;
use crate::movegen::{earth_defender, valid_moves};
use crate::types::*;

/// Capture suspended while the defender's earth power awaits a decision.
/// At most one of these exists at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingEarth {
    pub attacker: (i8, i8),
    pub defender: Piece,
    pub destination: (i8, i8),
    pub captured: Vec<Piece>,
}

/// Outcome of a single `select` / `activate_fire_power` request. Rejections
/// leave the session unchanged; the caller re-prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// A friendly piece became the current selection.
    Selected,
    /// The selected piece moved and the turn passed.
    Moved,
    /// A capture landed but further jumps are mandatory; same side to move.
    ChainContinues,
    /// Second click on a fire piece; next activation burns the power.
    FireArmed,
    /// Fire power consumed, targets removed, turn passed.
    FireCaptured,
    /// The capture is suspended on an earth-power decision.
    EarthPending,
    Rejected,
}

pub struct Session {
    board: Board,
    turn: Color,
    selected: Option<(i8, i8)>,
    valid_moves: MoveMap,
    fire_armed: bool,
    pending_earth: Option<PendingEarth>,
    last_move: Option<((i8, i8), (i8, i8))>,
}

impl Session {
    /// Fresh game; Dark moves first.
    pub fn new() -> Self {
        Self::with_board(Board::startpos(), Color::Dark)
    }

    /// Fresh game with a seeded power assignment.
    pub fn new_with<R: Rng>(rng: &mut R) -> Self {
        Self::with_board(Board::startpos_with(rng), Color::Dark)
    }

    /// Resume from an arbitrary position. Test and scenario entry point.
    pub fn with_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            selected: None,
            valid_moves: MoveMap::new(),
            fire_armed: false,
            pending_earth: None,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn winner(&self) -> Option<Color> {
        self.board.winner()
    }

    pub fn selected(&self) -> Option<(i8, i8)> {
        self.selected
    }

    /// Move map of the currently selected piece.
    pub fn valid_moves(&self) -> &MoveMap {
        &self.valid_moves
    }

    /// Payload for the earth-power prompt, when one is pending.
    pub fn earth_pending(&self) -> Option<&PendingEarth> {
        self.pending_earth.as_ref()
    }

    pub fn last_move(&self) -> Option<((i8, i8), (i8, i8))> {
        self.last_move
    }

    /// Select a piece or a destination for the current selection.
    ///
    /// Off-board coordinates and empty squares fall through to `Rejected`
    /// rather than failing. While an earth decision is pending every select
    /// is rejected.
    pub fn select(&mut self, row: i8, col: i8) -> SelectOutcome {
        if self.pending_earth.is_some() {
            return SelectOutcome::Rejected;
        }

        let clicked = self.board.piece_at(row, col);

        if let Some(from) = self.selected {
            // Re-clicking the selected fire piece arms, then fires.
            if from == (row, col) {
                if let Some(piece) = clicked {
                    if piece.has_power(Element::Fire) {
                        if self.fire_armed {
                            return self.activate_fire_power(row, col);
                        }
                        self.fire_armed = true;
                        return SelectOutcome::FireArmed;
                    }
                }
            }
            self.fire_armed = false;

            let outcome = self.try_move(row, col);
            if outcome != SelectOutcome::Rejected {
                return outcome;
            }
            self.selected = None;
            self.valid_moves = MoveMap::new();
        }

        self.select_origin(clicked)
    }

    fn select_origin(&mut self, clicked: Option<Piece>) -> SelectOutcome {
        let Some(piece) = clicked else {
            return SelectOutcome::Rejected;
        };
        if piece.color != self.turn {
            return SelectOutcome::Rejected;
        }

        let moves = valid_moves(&self.board, &piece);
        // Forced capture: with any capture available to this side, only
        // pieces that can capture are selectable.
        if self.side_has_forcing_capture() && !moves.has_forcing_capture() {
            return SelectOutcome::Rejected;
        }

        self.selected = Some((piece.row, piece.col));
        self.valid_moves = moves;
        self.fire_armed = false;
        SelectOutcome::Selected
    }

    fn side_has_forcing_capture(&self) -> bool {
        self.board
            .pieces_of(self.turn)
            .iter()
            .any(|p| valid_moves(&self.board, p).has_forcing_capture())
    }

    fn try_move(&mut self, row: i8, col: i8) -> SelectOutcome {
        let Some(from) = self.selected else {
            return SelectOutcome::Rejected;
        };
        if self.board.piece_at(row, col).is_some() {
            return SelectOutcome::Rejected;
        }
        let Some(kind) = self.valid_moves.get((row, col)).cloned() else {
            return SelectOutcome::Rejected;
        };
        let dest = (row, col);

        match kind {
            MoveKind::Simple => {
                self.board.move_piece(from, dest);
                self.finish_move(from, dest);
                SelectOutcome::Moved
            }
            MoveKind::WaterPower | MoveKind::AirPower => {
                self.board.mark_power_used(from);
                self.board.move_piece(from, dest);
                self.finish_move(from, dest);
                SelectOutcome::Moved
            }
            // Fire is keyed at the occupied origin square and activated by
            // re-clicking; it can never be reached as a destination here.
            MoveKind::FirePower(_) => SelectOutcome::Rejected,
            MoveKind::Capture(caught) => {
                if let Some(defender) = earth_defender(&caught) {
                    self.pending_earth = Some(PendingEarth {
                        attacker: from,
                        defender,
                        destination: dest,
                        captured: caught,
                    });
                    self.fire_armed = false;
                    return SelectOutcome::EarthPending;
                }
                self.board.move_piece(from, dest);
                self.board.remove_pieces(&caught);
                self.continue_or_finish(from, dest)
            }
        }
    }

    /// After a capture landed on `dest`: hold the turn if further jumps are
    /// mandatory, otherwise pass it.
    fn continue_or_finish(&mut self, from: (i8, i8), dest: (i8, i8)) -> SelectOutcome {
        let further = match self.board.piece_at(dest.0, dest.1) {
            Some(piece) => valid_moves(&self.board, &piece).captures_only(),
            None => MoveMap::new(),
        };
        if !further.is_empty() {
            self.selected = Some(dest);
            self.valid_moves = further;
            self.fire_armed = false;
            self.last_move = Some((from, dest));
            return SelectOutcome::ChainContinues;
        }
        self.finish_move(from, dest);
        SelectOutcome::Moved
    }

    /// Consume the armed fire option of the selected piece: targets are
    /// removed, the attacker stays put, the turn passes.
    pub fn activate_fire_power(&mut self, row: i8, col: i8) -> SelectOutcome {
        if self.pending_earth.is_some() {
            return SelectOutcome::Rejected;
        }
        if self.selected != Some((row, col)) {
            return SelectOutcome::Rejected;
        }
        let Some(MoveKind::FirePower(targets)) = self.valid_moves.get((row, col)).cloned() else {
            return SelectOutcome::Rejected;
        };
        self.board.mark_power_used((row, col));
        self.board.remove_pieces(&targets);
        self.finish_move((row, col), (row, col));
        SelectOutcome::FireCaptured
    }

    /// Resolve the pending earth decision. Returns `false` when nothing is
    /// pending (a caller-ordering bug, not a game state).
    pub fn decide_earth_power(&mut self, use_power: bool) -> bool {
        let Some(pending) = self.pending_earth.take() else {
            return false;
        };

        if use_power {
            // Defender survives with its power spent; the attacker still
            // crosses to the intended landing square. No chain follows.
            let defender = pending.defender;
            self.board.mark_power_used((defender.row, defender.col));
            self.board.move_piece(pending.attacker, pending.destination);
            self.finish_move(pending.attacker, pending.destination);
        } else {
            self.board.move_piece(pending.attacker, pending.destination);
            self.board.remove_pieces(&pending.captured);
            self.continue_or_finish(pending.attacker, pending.destination);
        }
        true
    }

    /// Install a search-produced board and pass the turn.
    pub fn ai_move(&mut self, board: Board) {
        self.board = board;
        self.end_turn();
    }

    fn finish_move(&mut self, from: (i8, i8), dest: (i8, i8)) {
        self.last_move = Some((from, dest));
        self.end_turn();
    }

    fn end_turn(&mut self) {
        self.selected = None;
        self.valid_moves = MoveMap::new();
        self.fire_armed = false;
        self.turn = self.turn.other();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
