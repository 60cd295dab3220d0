//! Board state representation and pure queries

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Action, lines::LineAnalyzer};

/// Game-theoretic value of a position, from X's fixed perspective
pub type Value = i32;

/// Value of a board X has won
pub const X_WIN: Value = 1;
/// Value of a board O has won
pub const O_WIN: Value = -1;
/// Value of a drawn board
pub const DRAW: Value = 0;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Whether this player is the maximizing side (values are X-relative)
    pub fn is_maximizer(self) -> bool {
        self == Player::X
    }

    /// Value of a game this player has won
    pub fn win_value(self) -> Value {
        match self {
            Player::X => X_WIN,
            Player::O => O_WIN,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// A 3x3 board stored row-major.
///
/// Boards are `Copy` values: every transition returns a fresh board and the
/// source is never touched, so sibling branches of a search cannot interfere
/// with each other. The cells are private and every constructor enforces the
/// turn invariant (`X == O` or `X == O + 1`), which is what lets
/// [`current_player`](Board::current_player) be infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Cell; 9]", into = "[Cell; 9]")]
pub struct Board {
    pub(super) cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl Board {
    /// Create the empty starting board (X to move)
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPieceCounts`](crate::Error::InvalidPieceCounts)
    /// unless X has as many pieces as O or exactly one more. Winning lines are
    /// not checked; use [`Board::is_reachable`] or [`Board::from_string`] for
    /// that.
    pub fn from_cells(cells: [Cell; 9]) -> Result<Self, crate::Error> {
        let count = Self::count_pieces(&cells);
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }
        Ok(Board { cells })
    }

    /// Parse a board from 9 cell characters (`.`, `X`, `O`), row-major.
    ///
    /// Whitespace is ignored, so both `"XO......."` and a three-line layout
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not contain exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are invalid
    /// - The position cannot arise in a real game (see [`Board::is_reachable`])
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Self::from_reachable_cells(cells)
    }

    /// Like [`Board::from_cells`], but also rejects positions that cannot
    /// arise in a real game.
    fn from_reachable_cells(cells: [Cell; 9]) -> Result<Self, crate::Error> {
        let board = Self::from_cells(cells)?;
        if let Some(reason) = board.unreachable_reason() {
            return Err(crate::Error::UnreachableBoard {
                board: board.encode(),
                reason: reason.to_string(),
            });
        }
        Ok(board)
    }

    pub(crate) fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Row-major cells
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get the cell an action targets
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.index()]
    }

    /// Check if the cell an action targets is empty
    pub fn is_empty(&self, action: Action) -> bool {
        self.get(action) == Cell::Empty
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        9 - Self::count_pieces(&self.cells).empty
    }

    /// The player whose turn it is: X when the piece counts are equal, O otherwise
    pub fn current_player(&self) -> Player {
        let count = Self::count_pieces(&self.cells);
        debug_assert!(
            count.x == count.o || count.x == count.o + 1,
            "board constructors keep X == O or X == O + 1"
        );
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Every empty cell, in row-major order.
    ///
    /// This does not consult the terminal test; callers that search check
    /// [`is_terminal`](Board::is_terminal) first.
    pub fn legal_actions(&self) -> Vec<Action> {
        Action::all().filter(|&action| self.is_empty(action)).collect()
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// The owner of the first complete line, checking rows, columns, then diagonals
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::first_complete_line(&self.cells)
    }

    /// Check if the board is full
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Outcome value of a finished game: +1 if X won, -1 if O won, 0 for a draw.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTerminal`](crate::Error::NotTerminal) when the game is
    /// still undecided, so an open position is never mistaken for a proven draw.
    pub fn utility(&self) -> Result<Value, crate::Error> {
        if !self.is_terminal() {
            return Err(crate::Error::NotTerminal {
                board: self.encode(),
            });
        }
        Ok(self.winner().map_or(DRAW, Player::win_value))
    }

    /// Empty cells that would immediately win for `player`
    pub fn winning_actions(&self, player: Player) -> Vec<Action> {
        LineAnalyzer::winning_actions(&self.cells, player)
    }

    /// Compact 9-character representation, row-major
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<[Cell; 9]> for Board {
    type Error = crate::Error;

    fn try_from(cells: [Cell; 9]) -> Result<Self, Self::Error> {
        Board::from_reachable_cells(cells)
    }
}

impl From<Board> for [Cell; 9] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
