//! Move-choosing strategies and self-play
//!
//! A [`Strategy`] picks an action for whichever side is to move. Two are
//! provided:
//! - [`MinimaxStrategy`]: the search-backed optimal player
//! - [`RandomStrategy`]: a seeded uniform baseline

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use tracing::debug;

use crate::{
    Result,
    config::SearchConfig,
    search::MoveSelector,
    tictactoe::{Action, Board, Game, Player},
};

/// Strategy trait - anything that can choose a move on a board
///
/// # Examples
///
/// ```
/// use noughts::strategy::{MinimaxStrategy, RandomStrategy, play_game};
///
/// let mut x = MinimaxStrategy::default();
/// let mut o = RandomStrategy::seeded(7);
/// let game = play_game(&mut x, &mut o)?;
/// assert!(game.is_over());
/// # Ok::<(), noughts::Error>(())
/// ```
pub trait Strategy: Send {
    /// Choose an action for the side to move.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available (terminal state).
    fn select_move(&mut self, board: &Board) -> Result<Action>;

    /// Get the strategy's name.
    fn name(&self) -> &str;
}

/// Plays the move chosen by a [`MoveSelector`]
#[derive(Debug, Default)]
pub struct MinimaxStrategy {
    selector: MoveSelector,
}

impl MinimaxStrategy {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            selector: MoveSelector::new(config),
        }
    }
}

impl Strategy for MinimaxStrategy {
    fn select_move(&mut self, board: &Board) -> Result<Action> {
        self.selector.best_move(board)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

/// Plays a uniformly random legal move
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Deterministic strategy for reproducible games
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &Board) -> Result<Action> {
        if board.is_terminal() {
            return Err(crate::Error::NoMovesAvailable);
        }
        board
            .legal_actions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoMovesAvailable)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Play a full game from the empty board, `x` moving first.
pub fn play_game(x: &mut dyn Strategy, o: &mut dyn Strategy) -> Result<Game> {
    play_from(Board::new(), x, o)
}

/// Play out a game from `start` until it ends.
pub fn play_from(start: Board, x: &mut dyn Strategy, o: &mut dyn Strategy) -> Result<Game> {
    let mut game = Game::from_position(start);

    while !game.is_over() {
        let board = game.current_state()?;
        let action = match board.current_player() {
            Player::X => x.select_move(&board)?,
            Player::O => o.select_move(&board)?,
        };
        game.play(action)?;
    }

    debug!(
        x = x.name(),
        o = o.name(),
        moves = game.moves.len(),
        outcome = ?game.outcome,
        "game finished"
    );
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::GameOutcome;

    #[test]
    fn test_random_strategy_is_reproducible() {
        let board = Board::new();
        let first: Vec<Action> = {
            let mut strategy = RandomStrategy::seeded(42);
            (0..5).map(|_| strategy.select_move(&board).unwrap()).collect()
        };
        let second: Vec<Action> = {
            let mut strategy = RandomStrategy::seeded(42);
            (0..5).map(|_| strategy.select_move(&board).unwrap()).collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_strategy_only_plays_legal_moves() {
        let board = Board::from_string("XOX XOO .X.").unwrap();
        let mut strategy = RandomStrategy::seeded(3);
        for _ in 0..20 {
            let action = strategy.select_move(&board).unwrap();
            assert!(board.is_empty(action));
        }
    }

    #[test]
    fn test_entropy_strategy_plays_a_full_game() {
        let mut x = RandomStrategy::from_entropy();
        let mut o = MinimaxStrategy::default();
        assert_eq!(x.name(), "random");
        assert_eq!(o.name(), "minimax");

        let game = play_game(&mut x, &mut o).unwrap();
        assert!(game.is_over());
        assert_ne!(game.outcome, Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn test_strategies_refuse_finished_games() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        assert!(RandomStrategy::seeded(0).select_move(&board).is_err());
        assert!(MinimaxStrategy::default().select_move(&board).is_err());
    }

    #[test]
    fn test_play_from_finishes_the_game() {
        let start = Board::from_string("XX. OO. ...").unwrap();
        let game = play_from(
            start,
            &mut MinimaxStrategy::default(),
            &mut RandomStrategy::seeded(1),
        )
        .unwrap();

        assert_eq!(game.moves.len(), 1);
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
    }
}
