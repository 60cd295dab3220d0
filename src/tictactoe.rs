//! Tic-Tac-Toe rules: boards, actions, transitions and game records

pub mod action;
pub mod board;
pub mod game;
pub mod lines;
pub mod transition;
pub mod validation;

pub use action::Action;
pub use board::{Board, Cell, DRAW, O_WIN, Player, Value, X_WIN};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
