//! Shared helpers for the integration tests.

#![allow(dead_code)]

use noughts::{Action, Board};

/// Parse a board that is known to be valid.
pub fn board(cells: &str) -> Board {
    Board::from_string(cells).expect("test board should parse")
}

/// Build an in-range action.
pub fn action(row: usize, col: usize) -> Action {
    Action::new(row, col).expect("test action should be on the board")
}

/// Every reachable board that still has moves to make.
pub fn open_boards() -> Vec<Board> {
    Board::reachable_boards()
        .into_iter()
        .filter(|board| !board.is_terminal())
        .collect()
}
