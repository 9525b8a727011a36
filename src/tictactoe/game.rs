//! Human versus CPU play on a weighted board

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    board::{Board, Outcome, Player, ScoreTotals},
    solver::Solver,
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Whether the game is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Finished(Outcome),
}

/// The game result seen from the human's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumanResult {
    Win,
    Lose,
    Draw,
}

/// A game between a human and the solver.
///
/// The human chooses a side; the CPU plays the other one and always picks a
/// random optimal move.
#[derive(Debug)]
pub struct Match {
    initial: Board,
    board: Board,
    human: Player,
    moves: Vec<Move>,
    solver: Solver,
}

impl Match {
    /// Start a match from `board`.
    ///
    /// # Errors
    ///
    /// Returns error if `board` could not have been reached by alternating
    /// play.
    pub fn new(board: Board, human: Player) -> Result<Self, crate::Error> {
        board.validate()?;
        Ok(Match {
            initial: board,
            board,
            human,
            moves: Vec::new(),
            solver: Solver::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn cpu(&self) -> Player {
        self.human.opponent()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn status(&self) -> GameStatus {
        match self.board.judge() {
            Some(outcome) => GameStatus::Finished(outcome),
            None => GameStatus::Ongoing,
        }
    }

    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// Whose turn it is by remaining-cell parity: `First` moves when an odd
    /// number of cells is left.
    fn turn(&self) -> Option<Player> {
        if self.is_over() {
            return None;
        }
        let remaining = self.board.remaining();
        if remaining % 2 == 1 {
            Some(Player::First)
        } else {
            Some(Player::Second)
        }
    }

    pub fn is_human_turn(&self) -> bool {
        self.turn() == Some(self.human)
    }

    pub fn is_cpu_turn(&self) -> bool {
        self.turn() == Some(self.cpu())
    }

    fn apply(&mut self, position: usize, player: Player) -> Result<(), crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        if self.turn() != Some(player) {
            return Err(crate::Error::NotYourTurn {
                player: player.to_string(),
            });
        }
        self.board = self.board.place(position, player)?;
        self.moves.push(Move { position, player });
        debug!(position, %player, board = %self.board.encode(), "move played");
        Ok(())
    }

    /// Play the human's move at `position`
    pub fn play_human(&mut self, position: usize) -> Result<(), crate::Error> {
        self.apply(position, self.human)
    }

    /// Let the CPU play a random optimal move. Returns the chosen position.
    pub fn play_cpu<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        let position = self.solver.choose_move(&self.board, rng)?;
        self.apply(position, self.cpu())?;
        Ok(position)
    }

    /// Optimal moves for whoever is to move, used for on-demand hints
    pub fn suggestions(&mut self) -> Vec<usize> {
        self.solver.solve(&self.board).best_moves
    }

    pub fn scores(&self) -> ScoreTotals {
        self.board.scores()
    }

    pub fn human_result(&self) -> Option<HumanResult> {
        match self.status() {
            GameStatus::Ongoing => None,
            GameStatus::Finished(Outcome::Draw) => Some(HumanResult::Draw),
            GameStatus::Finished(Outcome::Win(winner)) if winner == self.human => {
                Some(HumanResult::Win)
            }
            GameStatus::Finished(Outcome::Win(_)) => Some(HumanResult::Lose),
        }
    }
}
