//! Board coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate on the 3x3 board.
///
/// Both components are always in `0..=2`; the only ways to build an action
/// ([`Action::new`], [`Action::from_index`], `TryFrom<(usize, usize)>`) check
/// the bounds. Actions order row-major, which is also the order
/// [`Board::legal_actions`](super::Board::legal_actions) enumerates them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    /// Create an action, rejecting coordinates outside the board
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row > 2 || col > 2 {
            return Err(crate::Error::InvalidPosition { row, col });
        }
        Ok(Action { row, col })
    }

    /// Action for a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        Self::new(index / 3, index % 3)
    }

    /// All nine actions in row-major order
    pub fn all() -> impl Iterator<Item = Action> {
        (0..9).map(|index| Action {
            row: index / 3,
            col: index % 3,
        })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major cell index (0-8)
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }
}

impl TryFrom<(usize, usize)> for Action {
    type Error = crate::Error;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Action::new(row, col)
    }
}

impl From<Action> for (usize, usize) {
    fn from(action: Action) -> Self {
        (action.row, action.col)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_bounds() {
        assert!(Action::new(2, 2).is_ok());

        let err = Action::new(3, 0).unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
        assert!(Action::new(0, 3).is_err());
    }

    #[test]
    fn test_index_roundtrip() {
        for index in 0..9 {
            let action = Action::from_index(index).unwrap();
            assert_eq!(action.index(), index);
        }
        assert!(Action::from_index(9).is_err());
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<Action> = Action::all().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Action::new(0, 0).unwrap());
        assert_eq!(all[2], Action::new(0, 2).unwrap());
        assert_eq!(all[3], Action::new(1, 0).unwrap());

        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(sorted, all);
    }

    #[test]
    fn test_serde_rejects_out_of_bounds() {
        let action: Action = serde_json::from_str("[1,2]").unwrap();
        assert_eq!(action, Action::new(1, 2).unwrap());
        assert_eq!(serde_json::to_string(&action).unwrap(), "[1,2]");

        assert!(serde_json::from_str::<Action>("[0,5]").is_err());
    }
}
