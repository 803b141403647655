use super::*;
use crate::eval::evaluate;
use crate::MinimaxEngine;
use checkers_core::{successors, Color, Engine, Piece};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_opening_depth_one_plays_one_light_move() {
    let board = Board::startpos_with(&mut StdRng::seed_from_u64(7));

    let (score, best) = search(&board, 1, true);

    // No captures exist on move one: the result is the input plus exactly
    // one Light move, and the score is the static value of that board.
    assert_ne!(best, board);
    assert!(successors(&board, Color::Light).contains(&best));
    assert_eq!(best.pieces_left(Color::Light), 12);
    assert_eq!(best.pieces_left(Color::Dark), 12);
    assert_eq!(score, evaluate(&best));
}

#[test]
fn test_search_is_deterministic() {
    let board = Board::startpos_with(&mut StdRng::seed_from_u64(11));

    let first = search(&board, 3, true);
    let second = search(&board, 3, true);
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}

#[test]
fn test_terminal_board_is_returned_unchanged() {
    let mut board = Board::empty();
    board.place(Piece::new(3, 2, Color::Light));

    let (score, best) = search(&board, 4, true);
    assert_eq!(best, board);
    assert_eq!(score, evaluate(&board));
}

#[test]
fn test_maximizer_takes_a_free_capture() {
    let mut board = Board::empty();
    board.place(Piece::new(2, 3, Color::Light));
    board.place(Piece::new(3, 4, Color::Dark));
    board.place(Piece::new(7, 0, Color::Dark));

    let (_, best) = search(&board, 1, true);
    assert_eq!(best.pieces_left(Color::Dark), 1);
    assert!(best.piece_at(4, 5).is_some());
}

#[test]
fn test_minimizer_takes_a_free_capture() {
    let mut board = Board::empty();
    board.place(Piece::new(5, 4, Color::Dark));
    board.place(Piece::new(4, 3, Color::Light));
    board.place(Piece::new(0, 7, Color::Light));

    let (_, best) = search(&board, 1, false);
    assert_eq!(best.pieces_left(Color::Light), 1);
    assert!(best.piece_at(3, 2).is_some());
}

#[test]
fn test_deeper_search_visits_more_nodes() {
    let board = Board::startpos_with(&mut StdRng::seed_from_u64(2));

    let mut shallow = 0;
    let mut deep = 0;
    minimax(&board, 1, true, f64::NEG_INFINITY, f64::INFINITY, &mut shallow);
    minimax(&board, 3, true, f64::NEG_INFINITY, f64::INFINITY, &mut deep);
    assert!(deep > shallow);
}

#[test]
fn test_engine_reports_no_move_on_finished_game() {
    let mut board = Board::empty();
    board.place(Piece::new(3, 2, Color::Light));

    let mut engine = MinimaxEngine::new();
    let result = engine.choose_move(&board, Color::Dark, 3);
    assert!(result.board.is_none());
}

#[test]
fn test_engine_plays_for_either_color() {
    let board = Board::startpos_with(&mut StdRng::seed_from_u64(4));
    let mut engine = MinimaxEngine::new();

    let as_dark = engine.choose_move(&board, Color::Dark, 2);
    assert!(successors(&board, Color::Dark).contains(&as_dark.board.unwrap()));

    let as_light = engine.choose_move(&board, Color::Light, 2);
    assert!(successors(&board, Color::Light).contains(&as_light.board.unwrap()));
    assert!(as_light.nodes > 0);
}
