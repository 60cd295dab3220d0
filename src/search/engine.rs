//! The seam between the move selector and the recursive search engines

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Value};

/// Alpha-beta search window.
///
/// `alpha` is the best value the maximizing side (X) can already guarantee on
/// the current path, `beta` the best the minimizing side (O) can. The extreme
/// `i32` values stand in for -∞/+∞; game values never leave `-1..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub alpha: Value,
    pub beta: Value,
}

impl Window {
    /// The unbounded window `(-∞, +∞)` every top-level evaluation starts from
    pub const FULL: Window = Window {
        alpha: Value::MIN,
        beta: Value::MAX,
    };

    /// Whether the window has closed, meaning the remaining siblings cannot
    /// change the decision above
    pub fn is_closed(&self) -> bool {
        self.beta <= self.alpha
    }
}

impl Default for Window {
    fn default() -> Self {
        Window::FULL
    }
}

/// Counters accumulated while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including terminal leaves
    pub nodes: u64,
    /// Siblings skipped because the window closed
    pub cutoffs: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// A recursive game-tree search returning X-relative game values
pub trait GameSearch: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Evaluate `board` with `maximizing` deciding whether the side to move
    /// maximizes (X) or minimizes (O) the value.
    ///
    /// Called with [`Window::FULL`], the result is the exact game value under
    /// optimal play. With a narrower window an implementation may return a
    /// bound instead.
    fn evaluate(
        &self,
        board: &Board,
        maximizing: bool,
        window: Window,
        stats: &mut SearchStats,
    ) -> crate::Result<Value>;

    /// Exact game value of `board`, searched with the side to move deciding
    /// the direction
    fn game_value(&self, board: &Board, stats: &mut SearchStats) -> crate::Result<Value> {
        self.evaluate(
            board,
            board.current_player().is_maximizer(),
            Window::FULL,
            stats,
        )
    }
}
