//! Memoized minimax over weighted boards

use std::collections::HashMap;

use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::board::{Board, BoardKey, Outcome, Player};

/// Optimal moves from a position and the value of the position under
/// optimal play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Every empty cell reaching `outcome`, ascending. Empty on terminal boards.
    pub best_moves: Vec<usize>,
    pub outcome: Outcome,
}

/// Solved positions keyed by owner and score of every cell
pub type Memo = HashMap<BoardKey, SolveResult>;

/// Solve `board` for the player inferred by [`Board::to_move`].
///
/// Moves that win for the mover are preferred over moves that draw, which
/// are preferred over moves that lose. `board` is not modified; each branch
/// works on its own copy.
///
/// # Examples
///
/// ```
/// use cpviz::tictactoe::{Board, Memo, Outcome, solve};
///
/// let mut memo = Memo::new();
/// let result = solve(&Board::from_scores([0; 9]), &mut memo);
/// assert_eq!(result.outcome, Outcome::Draw);
/// ```
pub fn solve(board: &Board, memo: &mut Memo) -> SolveResult {
    let key = board.key();
    if let Some(result) = memo.get(&key) {
        return result.clone();
    }

    if let Some(outcome) = board.judge() {
        let result = SolveResult {
            best_moves: Vec::new(),
            outcome,
        };
        memo.insert(key, result.clone());
        return result;
    }

    let mover = board.to_move();
    let mut win = Vec::new();
    let mut draw = Vec::new();
    let mut lose = Vec::new();

    for pos in board.empty_positions() {
        let child = board.with_mark(pos, mover);
        match solve(&child, memo).outcome {
            Outcome::Win(player) if player == mover => win.push(pos),
            Outcome::Draw => draw.push(pos),
            Outcome::Win(_) => lose.push(pos),
        }
    }

    let result = if !win.is_empty() {
        SolveResult {
            best_moves: win,
            outcome: Outcome::Win(mover),
        }
    } else if !draw.is_empty() {
        SolveResult {
            best_moves: draw,
            outcome: Outcome::Draw,
        }
    } else {
        SolveResult {
            best_moves: lose,
            outcome: Outcome::Win(mover.opponent()),
        }
    };

    memo.insert(key, result.clone());
    result
}

/// Pick uniformly among the optimal moves of `board`.
///
/// # Errors
///
/// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) when the board
/// is terminal.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    memo: &mut Memo,
    rng: &mut R,
) -> Result<usize, crate::Error> {
    let result = solve(board, memo);
    result
        .best_moves
        .choose(rng)
        .copied()
        .ok_or(crate::Error::NoValidMoves)
}

/// Which player wins `board` under optimal play, if anyone does.
///
/// Backs the "First-player win game" / "Second-player win game" hint.
pub fn hint(board: &Board) -> Option<Player> {
    solve(board, &mut Memo::new()).outcome.winner()
}

/// A memo table bound to one score assignment.
///
/// Reusing the solver across moves of one game keeps earlier work. Handing
/// it a board with different scores starts a fresh table.
#[derive(Debug, Default)]
pub struct Solver {
    scores: Option<[i32; 9]>,
    memo: Memo,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    fn prepare(&mut self, board: &Board) {
        let scores = board.score_array();
        if self.scores != Some(scores) {
            if self.scores.is_some() {
                trace!(cached = self.memo.len(), "scores changed, clearing memo");
            }
            self.memo.clear();
            self.scores = Some(scores);
        }
    }

    pub fn solve(&mut self, board: &Board) -> SolveResult {
        self.prepare(board);
        let result = solve(board, &mut self.memo);
        debug!(
            board = %board.encode(),
            outcome = %result.outcome,
            best_moves = ?result.best_moves,
            cached = self.memo.len(),
            "solved position"
        );
        result
    }

    pub fn choose_move<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        rng: &mut R,
    ) -> Result<usize, crate::Error> {
        self.prepare(board);
        choose_move(board, &mut self.memo, rng)
    }

    /// Number of cached positions
    pub fn cached(&self) -> usize {
        self.memo.len()
    }
}
