//! Board tests - grid access, locking and line clearing

use blockfall::core::Board;
use blockfall::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row_except(board: &mut Board, y: i32, gaps: &[i32], color: Color) {
    for x in 0..board.width() as i32 {
        if !gaps.contains(&x) {
            board.set(x, y, Some(color));
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();

    // Negative coordinates
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);

    // Beyond bounds
    assert_eq!(board.get(BOARD_WIDTH as i32, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i32), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();

    assert!(board.set(5, 10, Some(Color::Magenta)));
    assert_eq!(board.get(5, 10), Some(Some(Color::Magenta)));

    // Clear a cell
    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(10, 0, Some(Color::Red)));
}

#[test]
fn test_custom_dimensions() {
    let board = Board::new(6, 4);
    assert_eq!(board.cells().len(), 24);
    assert_eq!(board.rows().count(), 4);
    assert!(board.is_empty(5, 3));
    assert!(!board.is_empty(6, 3));
}

#[test]
fn test_clear_no_full_rows() {
    let mut board = Board::default();
    fill_row_except(&mut board, 19, &[0], Color::Blue);
    let before = board.clone();

    assert_eq!(board.clear_completed_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_adjacent_full_rows() {
    let mut board = Board::default();
    fill_row_except(&mut board, 19, &[], Color::Cyan);
    fill_row_except(&mut board, 18, &[], Color::Cyan);
    fill_row_except(&mut board, 17, &[], Color::Cyan);
    board.set(2, 16, Some(Color::Red));

    assert_eq!(board.clear_completed_lines(), 3);
    assert_eq!(board.get(2, 19), Some(Some(Color::Red)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn test_clear_preserves_order_of_remaining_rows() {
    let mut board = Board::default();
    board.set(0, 15, Some(Color::Red));
    fill_row_except(&mut board, 16, &[], Color::Cyan);
    board.set(0, 17, Some(Color::Green));
    fill_row_except(&mut board, 18, &[], Color::Cyan);
    board.set(0, 19, Some(Color::Blue));

    assert_eq!(board.clear_completed_lines(), 2);

    assert_eq!(board.get(0, 19), Some(Some(Color::Blue)));
    assert_eq!(board.get(0, 18), Some(Some(Color::Green)));
    assert_eq!(board.get(0, 17), Some(Some(Color::Red)));
    assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
    assert!(board.row(16).unwrap().iter().all(|c| c.is_none()));
}

#[test]
fn test_lock_rejects_out_of_bounds() {
    let mut board = Board::default();
    assert!(!board.lock(&[(0, 19), (0, 20)], Color::Red));
    assert!(!board.lock(&[(-1, 0)], Color::Red));
    assert_eq!(board.get(0, 19), Some(None));
}
