pub mod board;
pub mod movegen;
pub mod session;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use movegen::*;
pub use session::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all checkers engines (minimax, random, etc.)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The resulting board after the chosen move (None if no legal moves)
    pub board: Option<Board>,
    /// Evaluation score, positive = good for Light
    pub score: f64,
    /// Search depth reached
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all checkers engines must implement.
///
/// This allows swapping between the minimax engine, the random baseline and
/// future engines in the tournament runner.
pub trait Engine: Send {
    /// Pick a move for `to_move` on the given board.
    ///
    /// Returns the board after the chosen move; `board: None` means the side
    /// to move has no legal move (or the game is already decided).
    fn choose_move(&mut self, board: &Board, to_move: Color, depth: u8) -> SearchResult;

    /// Engine name for reports and Elo tracking
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
