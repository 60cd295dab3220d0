//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::board::{Board, DRAW, Player, Value};
use super::Action;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while the game is open
    pub fn of(board: &Board) -> Option<Self> {
        if !board.is_terminal() {
            return None;
        }
        Some(match board.winner() {
            Some(winner) => GameOutcome::Win(winner),
            None => GameOutcome::Draw,
        })
    }

    /// The outcome as a game value (+1 X win, -1 O win, 0 draw)
    pub fn value(self) -> Value {
        match self {
            GameOutcome::Win(player) => player.win_value(),
            GameOutcome::Draw => DRAW,
        }
    }
}

/// A complete game with history.
///
/// The fields are a record of what was played. Extend a game through
/// [`Game::play`], which keeps `moves` and `outcome` consistent; editing
/// the fields directly bypasses those checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_position(Board::new())
    }

    /// Create a game starting from an arbitrary position
    pub fn from_position(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: GameOutcome::of(&initial),
        }
    }

    /// Play a move
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let next = current.apply(action)?;
        let player = current.current_player();
        trace!(%player, %action, board = %next.encode(), "move played");

        self.moves.push(Move { action, player });
        self.outcome = GameOutcome::of(&next);

        Ok(())
    }

    /// Whether the game has finished
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the position it
    /// was played in. This indicates corrupted game data.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.initial.apply_all(self.moves.iter().map(|m| m.action))
    }

    /// Get the sequence of board states, starting with the initial position
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the position it
    /// was played in.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = self.initial;
        states.push(state);

        for m in &self.moves {
            state = state.apply(m.action)?;
            states.push(state);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
