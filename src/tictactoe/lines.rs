//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use super::{Action, Cell, Player};

/// Winning line indices on the 3x3 board, in the order they are checked
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Owner of the first complete line (rows, then columns, then diagonals)
    pub fn first_complete_line(cells: &[Cell; 9]) -> Option<Player> {
        WINNING_LINES.iter().find_map(|line| {
            let first = cells[line[0]];
            if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
                first.to_player()
            } else {
                None
            }
        })
    }

    /// Complete lines owned by `player`
    pub fn complete_lines(cells: &[Cell; 9], player: Player) -> Vec<[usize; 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| cells[idx] == target))
            .copied()
            .collect()
    }

    /// Every empty cell that would immediately complete a line for `player`,
    /// in row-major order
    pub fn winning_actions(cells: &[Cell; 9], player: Player) -> Vec<Action> {
        let positions: BTreeSet<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect();

        positions
            .into_iter()
            .filter_map(|pos| Action::from_index(pos).ok())
            .collect()
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
        assert_eq!(LineAnalyzer::first_complete_line(&cells), Some(Player::X));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
        assert_eq!(LineAnalyzer::first_complete_line(&cells), Some(Player::O));
    }

    #[test]
    fn test_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert_eq!(LineAnalyzer::first_complete_line(&cells), Some(Player::X));
        assert_eq!(
            LineAnalyzer::complete_lines(&cells, Player::X),
            vec![[2, 4, 6]]
        );
    }

    #[test]
    fn test_empty_line_is_not_a_win() {
        let cells = [Cell::Empty; 9];
        assert_eq!(LineAnalyzer::first_complete_line(&cells), None);
        assert!(LineAnalyzer::complete_lines(&cells, Player::X).is_empty());
    }

    #[test]
    fn test_winning_actions() {
        // X.X
        // ...
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[2] = Cell::X;

        let actions = LineAnalyzer::winning_actions(&cells, Player::X);
        assert_eq!(actions, vec![Action::new(0, 1).unwrap()]);
        assert!(LineAnalyzer::winning_actions(&cells, Player::O).is_empty());
    }

    #[test]
    fn test_winning_actions_multiple() {
        // XX.
        // X..
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[3] = Cell::X;

        let actions = LineAnalyzer::winning_actions(&cells, Player::X);
        assert_eq!(
            actions,
            vec![Action::new(0, 2).unwrap(), Action::new(2, 0).unwrap()]
        );
    }

    #[test]
    fn test_blocked_line_has_no_winning_action() {
        // XXO
        // ...
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::O;

        assert!(LineAnalyzer::winning_actions(&cells, Player::X).is_empty());
    }
}
