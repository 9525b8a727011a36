//! Weighted Tic-Tac-Toe (ABC349 E)
//!
//! Each cell carries a score. A completed line wins outright; otherwise the
//! player holding the larger score total on a full board wins.

pub mod board;
pub mod game;
pub mod lines;
pub mod solver;

pub use board::{
    Board, BoardKey, Outcome, Player, SCORE_MAX, SCORE_MIN, ScoreTotals, WeightedCell,
};
pub use game::{GameStatus, HumanResult, Match, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use solver::{Memo, SolveResult, Solver, choose_move, hint, solve};
