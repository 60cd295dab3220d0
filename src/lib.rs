//! Exhaustive minimax oracle for Tic-Tac-Toe
//!
//! This crate provides:
//! - Board state, legal actions and value-returning transitions
//! - Minimax search with alpha-beta pruning, plus an unpruned reference engine
//! - Root move selection with a deterministic first-optimum tie-break
//! - Game records, strategies and self-play
//!
//! ```
//! use noughts::{Board, best_move};
//!
//! let board = Board::from_string("XX. OO. ...")?;
//! let action = best_move(&board)?;
//! assert_eq!((action.row(), action.col()), (0, 2));
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod search;
pub mod strategy;
pub mod tictactoe;

pub use config::{SearchConfig, SearchKind};
pub use error::{Error, Result};
pub use search::{AlphaBeta, Decision, Exhaustive, GameSearch, MoveSelector, best_move};
pub use tictactoe::{Action, Board, Cell, Game, GameOutcome, Player, Value};
