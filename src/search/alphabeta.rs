//! Minimax with alpha-beta pruning

use super::engine::{GameSearch, SearchStats, Window};
use crate::tictactoe::{Board, Value};

/// Exhaustive minimax with fail-hard alpha-beta pruning.
///
/// Searches to the end of the game; there is no depth limit and no heuristic
/// evaluation. Each frame owns its board and window, so nothing is shared
/// between sibling branches.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBeta;

impl AlphaBeta {
    pub fn new() -> Self {
        Self
    }
}

impl GameSearch for AlphaBeta {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn evaluate(
        &self,
        board: &Board,
        maximizing: bool,
        window: Window,
        stats: &mut SearchStats,
    ) -> crate::Result<Value> {
        stats.nodes += 1;

        if board.is_terminal() {
            return board.utility();
        }

        let Window { mut alpha, mut beta } = window;

        if maximizing {
            let mut best = Value::MIN;
            for action in board.legal_actions() {
                let child = board.apply(action)?;
                let value = self.evaluate(&child, false, Window { alpha, beta }, stats)?;
                best = best.max(value);
                alpha = alpha.max(best);
                if (Window { alpha, beta }).is_closed() {
                    stats.cutoffs += 1;
                    return Ok(beta);
                }
            }
            Ok(alpha)
        } else {
            let mut best = Value::MAX;
            for action in board.legal_actions() {
                let child = board.apply(action)?;
                let value = self.evaluate(&child, true, Window { alpha, beta }, stats)?;
                best = best.min(value);
                beta = beta.min(best);
                if (Window { alpha, beta }).is_closed() {
                    stats.cutoffs += 1;
                    return Ok(alpha);
                }
            }
            Ok(beta)
        }
    }
}
