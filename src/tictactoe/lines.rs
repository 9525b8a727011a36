//! Winning line analysis for the 3x3 board

use super::board::{Board, Player};

/// Winning line indices, in the order they are checked
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

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player owns all three cells of some line
    pub fn has_won(board: &Board, player: Player) -> bool {
        Self::completed_line(board, player).is_some()
    }

    /// First completed line for `player`, in [`WINNING_LINES`] order
    pub fn completed_line(board: &Board, player: Player) -> Option<[usize; 3]> {
        WINNING_LINES
            .iter()
            .copied()
            .find(|line| line.iter().all(|&idx| board.owner(idx) == Some(player)))
    }
}
