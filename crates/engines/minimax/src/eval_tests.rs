use super::*;
use checkers_core::{Color, Element, Piece};

fn symmetric_board() -> Board {
    let mut board = Board::empty();
    for row in 0..3 {
        for col in 0..8 {
            if (row + col) % 2 == 1 {
                board.place(Piece::new(row, col, Color::Light));
            }
        }
    }
    for row in 5..8 {
        for col in 0..8 {
            if (row + col) % 2 == 1 {
                board.place(Piece::new(row, col, Color::Dark));
            }
        }
    }
    board
}

#[test]
fn test_symmetric_position_is_balanced() {
    let board = symmetric_board();
    assert!(evaluate(&board).abs() < 1e-9);
}

#[test]
fn test_lone_man_value() {
    let mut board = Board::empty();
    board.place(Piece::new(3, 2, Color::Light));

    // 1 man + 0.1 * (advancement 3 * 0.1) + 0.1 * 2 moves
    let expected = 1.0 + 0.1 * 0.3 + 0.1 * 2.0;
    assert!((evaluate(&board) - expected).abs() < 1e-9);
}

#[test]
fn test_king_is_worth_double_and_likes_the_center() {
    let mut board = Board::empty();
    let mut king = Piece::new(3, 4, Color::Light);
    king.king = true;
    king.power_used = true;
    board.place(king);

    // 2.0 + 0.1 * ((7 - 1.0) * 0.1) + 0.1 * 13 moves
    let expected = 2.0 + 0.1 * 0.6 + 0.1 * 13.0;
    assert!((evaluate(&board) - expected).abs() < 1e-9);
}

#[test]
fn test_edge_pieces_are_penalized() {
    let mut board = Board::empty();
    board.place(Piece::new(4, 7, Color::Light));

    // 1 man + 0.1 * (0.4 - 0.2 edge) + 0.1 * 1 move
    let expected = 1.0 + 0.1 * 0.2 + 0.1 * 1.0;
    assert!((evaluate(&board) - expected).abs() < 1e-9);
}

#[test]
fn test_unused_power_bonus() {
    let mut board = Board::empty();
    // Earth adds no moves, so mobility matches the bare man.
    board.place(Piece::with_element(3, 2, Color::Light, Element::Earth));

    // 1 man + 0.5 power + 0.1 * (0.3 advancement + 0.3 bonus) + 0.1 * 2 moves
    let expected = 1.0 + 0.5 + 0.1 * 0.6 + 0.1 * 2.0;
    assert!((evaluate(&board) - expected).abs() < 1e-9);
}

#[test]
fn test_dark_pieces_count_negative() {
    let mut board = Board::empty();
    board.place(Piece::new(4, 3, Color::Dark));
    assert!(evaluate(&board) < 0.0);
}

#[test]
fn test_position_value_mirrors_advancement() {
    let light = Piece::new(5, 2, Color::Light);
    let dark = Piece::new(2, 5, Color::Dark);
    assert!((position_value(&light) - position_value(&dark)).abs() < 1e-9);
}
