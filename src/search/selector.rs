//! Root move selection

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::{GameSearch, SearchStats, Window};
use crate::{
    config::SearchConfig,
    tictactoe::{Action, Board, Player, Value},
};

/// A root action with the exact value of the position it leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredAction {
    pub action: Action,
    pub value: Value,
}

/// The outcome of a root search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Side to move at the root
    pub mover: Player,
    /// First action in row-major order achieving the optimum for `mover`
    pub action: Action,
    /// Game value after `action` under optimal play
    pub value: Value,
    /// Every legal action with its value, in enumeration order
    pub scored: Vec<ScoredAction>,
    /// Counters summed over all root searches
    pub stats: SearchStats,
}

/// Picks the best move by searching every legal action from the root.
///
/// Each root action is searched with a fresh full window, so every candidate
/// gets an exact value. Candidates are compared strictly, which means the
/// first action in enumeration order that reaches the optimum wins ties.
pub struct MoveSelector {
    config: SearchConfig,
    search: Box<dyn GameSearch>,
}

impl MoveSelector {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            search: config.search.into_boxed_search(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search every legal action and return its value, in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMovesAvailable`](crate::Error::NoMovesAvailable) on a
    /// terminal board.
    pub fn score_actions(&self, board: &Board) -> crate::Result<(Vec<ScoredAction>, SearchStats)> {
        if board.is_terminal() {
            return Err(crate::Error::NoMovesAvailable);
        }

        let mover = board.current_player();
        // After the move it is the opponent who decides the direction
        let maximizing = mover.opponent().is_maximizer();
        let actions = board.legal_actions();

        let results: Vec<(ScoredAction, SearchStats)> = if self.config.parallel {
            actions
                .par_iter()
                .map(|&action| self.score_action(board, action, maximizing))
                .collect::<crate::Result<_>>()?
        } else {
            actions
                .iter()
                .map(|&action| self.score_action(board, action, maximizing))
                .collect::<crate::Result<_>>()?
        };

        let mut total = SearchStats::default();
        let mut scored = Vec::with_capacity(results.len());
        for (candidate, stats) in results {
            debug!(
                %mover,
                action = %candidate.action,
                value = candidate.value,
                nodes = stats.nodes,
                "scored root action"
            );
            total += stats;
            scored.push(candidate);
        }

        Ok((scored, total))
    }

    fn score_action(
        &self,
        board: &Board,
        action: Action,
        maximizing: bool,
    ) -> crate::Result<(ScoredAction, SearchStats)> {
        let child = board.apply(action)?;
        let mut stats = SearchStats::default();
        let value = self
            .search
            .evaluate(&child, maximizing, Window::FULL, &mut stats)?;
        Ok((ScoredAction { action, value }, stats))
    }

    /// Search the root and choose the move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMovesAvailable`](crate::Error::NoMovesAvailable) on a
    /// terminal board.
    pub fn decide(&self, board: &Board) -> crate::Result<Decision> {
        let mover = board.current_player();
        let (scored, stats) = self.score_actions(board)?;

        let mut best: Option<ScoredAction> = None;
        for candidate in &scored {
            if best.is_none_or(|incumbent| improves(mover, candidate.value, incumbent.value)) {
                best = Some(*candidate);
            }
        }
        let best = best.ok_or(crate::Error::NoMovesAvailable)?;

        debug!(
            engine = self.search.name(),
            %mover,
            action = %best.action,
            value = best.value,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "selected move"
        );

        Ok(Decision {
            mover,
            action: best.action,
            value: best.value,
            scored,
            stats,
        })
    }

    /// The optimal move for the side to move
    pub fn best_move(&self, board: &Board) -> crate::Result<Action> {
        self.decide(board).map(|decision| decision.action)
    }

    /// Every action achieving the optimal value, in enumeration order
    pub fn optimal_actions(&self, board: &Board) -> crate::Result<Vec<Action>> {
        let decision = self.decide(board)?;
        Ok(decision
            .scored
            .iter()
            .filter(|candidate| candidate.value == decision.value)
            .map(|candidate| candidate.action)
            .collect())
    }

    /// Exact value of any board, terminal or not
    pub fn game_value(&self, board: &Board) -> crate::Result<Value> {
        self.search.game_value(board, &mut SearchStats::default())
    }
}

impl std::fmt::Debug for MoveSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveSelector")
            .field("config", &self.config)
            .field("engine", &self.search.name())
            .finish()
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Whether `candidate` is strictly better than `incumbent` for `mover`
fn improves(mover: Player, candidate: Value, incumbent: Value) -> bool {
    match mover {
        Player::X => candidate > incumbent,
        Player::O => candidate < incumbent,
    }
}

/// The optimal move for the side to move, using alpha-beta search
pub fn best_move(board: &Board) -> crate::Result<Action> {
    MoveSelector::default().best_move(board)
}
