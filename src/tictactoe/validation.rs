//! Board state validation logic

use std::collections::{HashSet, VecDeque};

use super::{Board, Player, lines::LineAnalyzer};

impl Board {
    /// Check if the board can arise from the empty board under normal play
    pub fn is_reachable(&self) -> bool {
        self.unreachable_reason().is_none()
    }

    /// Why the board cannot arise in a real game, if it cannot.
    ///
    /// Turn counts are already guaranteed by construction; this checks the
    /// winning lines against them.
    pub(crate) fn unreachable_reason(&self) -> Option<&'static str> {
        let count = Self::count_pieces(&self.cells);
        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return Some("both players cannot have winning lines");
        }

        // The winner moved last.
        if x_wins && count.x != count.o + 1 {
            return Some("X winning requires X to have exactly one more move than O");
        }
        if o_wins && count.x != count.o {
            return Some("O winning requires O to have the same number of moves as X");
        }

        // Several lines can only be completed together by one shared cell
        for player in [Player::X, Player::O] {
            if !self.winning_lines_share_cell(player) {
                return Some("winning lines must share the cell that completed them");
            }
        }

        None
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::complete_lines(&self.cells, player);
        if lines.len() < 2 {
            return true;
        }

        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }

    /// Every board reachable from the empty board, in breadth-first order.
    ///
    /// Expansion stops at terminal boards, so won positions with empty cells
    /// are included but never extended. The classic count is 5,478.
    pub fn reachable_boards() -> Vec<Board> {
        let root = Board::new();
        let mut seen = HashSet::from([root]);
        let mut queue = VecDeque::from([root]);
        let mut boards = Vec::new();

        while let Some(board) = queue.pop_front() {
            boards.push(board);
            if board.is_terminal() {
                continue;
            }

            for action in board.legal_actions() {
                let Ok(next) = board.apply(action) else {
                    continue;
                };
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        boards
    }
}
