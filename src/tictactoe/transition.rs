//! Board transitions

use super::{Action, Board};

impl Board {
    /// Place the current player's mark on `action` and return the new board.
    ///
    /// The receiver is left as it was; searches apply many sibling actions to
    /// the same parent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`](crate::Error::InvalidMove) if the target
    /// cell is occupied.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, action: Action) -> Result<Board, crate::Error> {
        if !self.is_empty(action) {
            return Err(crate::Error::InvalidMove {
                row: action.row(),
                col: action.col(),
            });
        }

        let mut next = *self;
        next.cells[action.index()] = self.current_player().to_cell();
        Ok(next)
    }

    /// Apply a sequence of actions in order, starting from this board
    #[must_use = "apply_all returns a new board; the original is unchanged"]
    pub fn apply_all<I>(&self, actions: I) -> Result<Board, crate::Error>
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .try_fold(*self, |board, action| board.apply(action))
    }
}
