//! Plain minimax without pruning

use super::engine::{GameSearch, SearchStats, Window};
use crate::tictactoe::{Board, Value};

/// Minimax over the full game tree, ignoring the window.
///
/// Visits every node below the root, so it always returns the exact value.
/// Serves as the reference the pruned search is checked against.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhaustive;

impl Exhaustive {
    pub fn new() -> Self {
        Self
    }
}

impl GameSearch for Exhaustive {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn evaluate(
        &self,
        board: &Board,
        maximizing: bool,
        _window: Window,
        stats: &mut SearchStats,
    ) -> crate::Result<Value> {
        stats.nodes += 1;

        if board.is_terminal() {
            return board.utility();
        }

        let mut best = if maximizing { Value::MIN } else { Value::MAX };
        for action in board.legal_actions() {
            let child = board.apply(action)?;
            let value = self.evaluate(&child, !maximizing, Window::FULL, stats)?;
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::DRAW;

    #[test]
    fn test_visits_whole_game_tree() {
        let mut stats = SearchStats::default();
        let value = Exhaustive
            .game_value(&Board::new(), &mut stats)
            .unwrap();

        assert_eq!(value, DRAW);
        assert_eq!(stats.nodes, 549_946);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn test_window_is_ignored() {
        let board = Board::from_string("XX. OO. ...").unwrap();
        let narrow = Window { alpha: -1, beta: -1 };
        let value = Exhaustive
            .evaluate(&board, true, narrow, &mut SearchStats::default())
            .unwrap();
        assert_eq!(value, 1);
    }
}
