use super::*;
use checkers_core::Piece;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_picks_a_legal_successor() {
    let board = Board::startpos_with(&mut StdRng::seed_from_u64(1));
    let mut engine = RandomEngine::new();

    let result = engine.choose_move(&board, Color::Dark, 1);
    let chosen = result.board.expect("opening position has moves");

    assert!(successors(&board, Color::Dark).contains(&chosen));
    assert!(result.nodes > 0);
}

#[test]
fn test_no_moves_returns_none() {
    // Lone Dark man wedged in the corner behind two Light pieces.
    let mut board = Board::empty();
    board.place(Piece::new(7, 0, Color::Dark));
    board.place(Piece::new(6, 1, Color::Light));
    board.place(Piece::new(5, 2, Color::Light));

    let mut engine = RandomEngine::new();
    let result = engine.choose_move(&board, Color::Dark, 1);
    assert!(result.board.is_none());
}
