//! Weighted board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Lowest score the visualizer accepts for a cell
pub const SCORE_MIN: i32 = -100;
/// Highest score the visualizer accepts for a cell
pub const SCORE_MAX: i32 = 100;

/// A player in the game. `First` always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::First => "first",
            Player::Second => "second",
        }
    }

    /// Mark used in the text encoding of a board
    pub fn to_char(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "x" | "1" => Ok(Player::First),
            "second" | "o" | "2" => Ok(Player::Second),
            _ => Err(crate::Error::ParsePlayer {
                input: s.to_string(),
            }),
        }
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// One cell: a fixed score and the player who claimed it, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedCell {
    pub score: i32,
    pub owner: Option<Player>,
}

impl WeightedCell {
    pub fn new(score: i32) -> Self {
        WeightedCell { score, owner: None }
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
    }
}

/// Memo key covering every cell's owner and score in row-major order.
///
/// Two boards with the same marks but different scores are different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardKey([(Option<Player>, i32); 9]);

/// Accumulated score of each player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTotals {
    pub first: i64,
    pub second: i64,
}

impl ScoreTotals {
    pub fn of(&self, player: Player) -> i64 {
        match player {
            Player::First => self.first,
            Player::Second => self.second,
        }
    }
}

/// A 3x3 weighted board, row-major `0..=8`.
///
/// `Copy` so the solver can branch on a fresh value per move instead of
/// mutating shared scratch space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [WeightedCell; 9],
}

impl Board {
    /// Empty board with the given scores. No bounds are enforced here.
    pub fn from_scores(scores: [i32; 9]) -> Self {
        Board {
            cells: scores.map(WeightedCell::new),
        }
    }

    /// Empty board from nine whitespace- or comma-separated integers, each
    /// within [`SCORE_MIN`, `SCORE_MAX`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cpviz::tictactoe::Board;
    ///
    /// let board = Board::parse_scores("-1 1 0\n-4 -2 -5\n-4 -1 -5").unwrap();
    /// assert_eq!(board.cells[3].score, -4);
    /// assert!(Board::parse_scores("1 2 3").is_err());
    /// ```
    pub fn parse_scores(s: &str) -> Result<Self, crate::Error> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: tokens.len(),
                context: s.to_string(),
            });
        }

        let mut scores = [0i32; 9];
        for (position, token) in tokens.iter().enumerate() {
            scores[position] = token
                .parse::<i32>()
                .map_err(|_| crate::Error::InvalidScore {
                    position,
                    token: token.to_string(),
                })?;
        }

        Self::checked_scores(scores)
    }

    /// Empty board with the given scores, each within [`SCORE_MIN`, `SCORE_MAX`].
    pub fn checked_scores(scores: [i32; 9]) -> Result<Self, crate::Error> {
        if let Some((position, &value)) = scores
            .iter()
            .enumerate()
            .find(|(_, value)| !(SCORE_MIN..=SCORE_MAX).contains(*value))
        {
            return Err(crate::Error::ScoreOutOfRange {
                position,
                value,
                min: SCORE_MIN,
                max: SCORE_MAX,
            });
        }
        Ok(Self::from_scores(scores))
    }

    /// Apply marks from a 9-character string (`X` first, `O` second, `.` empty).
    ///
    /// The result is not checked for alternation; use [`Board::validate`].
    pub fn with_marks(mut self, marks: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = marks.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: marks.to_string(),
            });
        }

        for (position, &c) in chars.iter().enumerate() {
            self.cells[position].owner = match c {
                '.' | '_' | '-' => None,
                'X' | 'x' => Some(Player::First),
                'O' | 'o' | '0' => Some(Player::Second),
                _ => {
                    return Err(crate::Error::InvalidCellCharacter {
                        character: c,
                        position,
                        context: marks.to_string(),
                    });
                }
            };
        }

        Ok(self)
    }

    pub fn score_array(&self) -> [i32; 9] {
        self.cells.map(|cell| cell.score)
    }

    pub fn owner(&self, pos: usize) -> Option<Player> {
        self.cells[pos].owner
    }

    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos].is_empty()
    }

    /// Empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        (0..9).filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Number of empty cells
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| c.owner == Some(player))
            .count()
    }

    /// Player to move, inferred from mark counts: `First` when both players
    /// have placed the same number of marks, `Second` otherwise.
    ///
    /// Only meaningful for boards reached by alternating play from empty.
    pub fn to_move(&self) -> Player {
        if self.count(Player::First) == self.count(Player::Second) {
            Player::First
        } else {
            Player::Second
        }
    }

    /// Copy of this board with `player` owning `pos`. Does not check occupancy.
    pub(crate) fn with_mark(&self, pos: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[pos].owner = Some(player);
        next
    }

    /// Place a mark, returning the new board.
    ///
    /// # Errors
    ///
    /// Returns error if `pos` is outside `0..=8` or already owned.
    pub fn place(&self, pos: usize, player: Player) -> Result<Board, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::CellOccupied { position: pos });
        }
        Ok(self.with_mark(pos, player))
    }

    /// Sum of cell scores owned by each player
    pub fn scores(&self) -> ScoreTotals {
        let mut totals = ScoreTotals::default();
        for cell in &self.cells {
            match cell.owner {
                Some(Player::First) => totals.first += i64::from(cell.score),
                Some(Player::Second) => totals.second += i64::from(cell.score),
                None => {}
            }
        }
        totals
    }

    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(self, player)
    }

    /// Terminal evaluation.
    ///
    /// A completed line wins, with `First` checked before `Second`. A full
    /// board without a line goes to the higher score total; equal totals are a
    /// draw. Returns `None` while the game is still open.
    pub fn judge(&self) -> Option<Outcome> {
        if self.has_won(Player::First) {
            return Some(Outcome::Win(Player::First));
        }
        if self.has_won(Player::Second) {
            return Some(Outcome::Win(Player::Second));
        }
        if self.remaining() > 0 {
            return None;
        }

        let totals = self.scores();
        Some(match totals.first.cmp(&totals.second) {
            std::cmp::Ordering::Greater => Outcome::Win(Player::First),
            std::cmp::Ordering::Less => Outcome::Win(Player::Second),
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    pub fn is_terminal(&self) -> bool {
        self.judge().is_some()
    }

    /// Check that the board is reachable by alternating play with `First`
    /// opening.
    ///
    /// # Errors
    ///
    /// Returns error if the mark counts are not equal or `First` ahead by one,
    /// or if both players completed a line.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let first = self.count(Player::First);
        let second = self.count(Player::Second);
        if !(first == second || first == second + 1) {
            return Err(crate::Error::InvalidPieceCounts { first, second });
        }
        if self.has_won(Player::First) && self.has_won(Player::Second) {
            return Err(crate::Error::ConflictingWinners);
        }
        Ok(())
    }

    /// Memo key for the solver
    pub fn key(&self) -> BoardKey {
        BoardKey(self.cells.map(|cell| (cell.owner, cell.score)))
    }

    /// Compact text form: marks then scores, e.g. `X.O......|1,2,3,4,5,6,7,8,9`
    pub fn encode(&self) -> String {
        let marks: String = self
            .cells
            .iter()
            .map(|c| c.owner.map_or('.', Player::to_char))
            .collect();
        let scores: Vec<String> = self.cells.iter().map(|c| c.score.to_string()).collect();
        format!("{marks}|{}", scores.join(","))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_scores([0; 9])
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let cell = self.cells[row * 3 + col];
                let mark = cell.owner.map_or('.', Player::to_char);
                write!(f, "{:>5}{}", cell.score, mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_scores([-1, 1, 0, -4, -2, -5, -4, -1, -5])
    }

    #[test]
    fn test_new_board() {
        let board = sample();
        assert_eq!(board.remaining(), 9);
        assert_eq!(board.to_move(), Player::First);
        assert_eq!(board.judge(), None);
        assert_eq!(board.scores(), ScoreTotals::default());
    }

    #[test]
    fn test_place() {
        let board = sample().place(4, Player::First).unwrap();
        assert_eq!(board.owner(4), Some(Player::First));
        assert_eq!(board.to_move(), Player::Second);
        assert!(matches!(
            board.place(4, Player::Second),
            Err(crate::Error::CellOccupied { position: 4 })
        ));
        assert!(matches!(
            board.place(9, Player::Second),
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn test_parse_scores_bounds() {
        assert!(Board::parse_scores("0,0,0,0,0,0,0,0,100").is_ok());
        assert!(matches!(
            Board::parse_scores("0 0 0 0 0 0 0 0 101"),
            Err(crate::Error::ScoreOutOfRange { position: 8, .. })
        ));
        assert!(matches!(
            Board::parse_scores("0 0 0 0 x 0 0 0 0"),
            Err(crate::Error::InvalidScore { position: 4, .. })
        ));
        assert!(matches!(
            Board::parse_scores("0 0 0 0 0 0 0 0"),
            Err(crate::Error::InvalidBoardLength { got: 8, .. })
        ));
    }

    #[test]
    fn test_checked_scores() {
        assert!(Board::checked_scores([-100, 0, 0, 0, 0, 0, 0, 0, 100]).is_ok());
        assert!(matches!(
            Board::checked_scores([0, -101, 0, 0, 0, 0, 0, 0, 500]),
            Err(crate::Error::ScoreOutOfRange {
                position: 1,
                value: -101,
                ..
            })
        ));
    }

    #[test]
    fn test_with_marks() {
        let board = sample().with_marks("X.O\n...\n..X").unwrap();
        assert_eq!(board.count(Player::First), 2);
        assert_eq!(board.count(Player::Second), 1);
        assert!(board.with_marks("X.Q......").is_err());
    }

    #[test]
    fn test_line_win_beats_scores() {
        // X X X
        // O O .
        // . . .
        let board = Board::from_scores([-5, -5, -5, 9, 9, 0, 0, 0, 0])
            .with_marks("XXXOO....")
            .unwrap();
        assert_eq!(board.judge(), Some(Outcome::Win(Player::First)));
    }

    #[test]
    fn test_full_board_decided_by_scores() {
        // X O X
        // X O O
        // O X X   no completed line
        let marks = "XOXXOOOXX";
        let board = Board::from_scores([1, 1, 1, 1, 1, 1, 1, 1, 1])
            .with_marks(marks)
            .unwrap();
        assert_eq!(board.judge(), Some(Outcome::Win(Player::First)));

        let board = Board::from_scores([1, 5, 1, 1, 5, 1, 1, 1, 1])
            .with_marks(marks)
            .unwrap();
        assert_eq!(board.scores(), ScoreTotals { first: 5, second: 12 });
        assert_eq!(board.judge(), Some(Outcome::Win(Player::Second)));

        let board = Board::from_scores([0; 9]).with_marks(marks).unwrap();
        assert_eq!(board.judge(), Some(Outcome::Draw));
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());
        assert!(matches!(
            sample().with_marks("XX.......").unwrap().validate(),
            Err(crate::Error::InvalidPieceCounts {
                first: 2,
                second: 0
            })
        ));
        assert!(matches!(
            sample().with_marks("XXXOOO...").unwrap().validate(),
            Err(crate::Error::ConflictingWinners)
        ));
    }

    #[test]
    fn test_key_includes_scores() {
        let a = Board::from_scores([1; 9]);
        let b = Board::from_scores([2; 9]);
        assert_ne!(a.key(), b.key());
        assert_eq!(a.key(), Board::from_scores([1; 9]).key());
    }

    #[test]
    fn test_encode_and_display() {
        let board = sample().place(0, Player::First).unwrap();
        assert_eq!(board.encode(), "X........|-1,1,0,-4,-2,-5,-4,-1,-5");
        let shown = board.to_string();
        assert_eq!(shown.lines().count(), 3);
        assert!(shown.starts_with("   -1X    1.    0."));
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("first".parse::<Player>().unwrap(), Player::First);
        assert_eq!("O".parse::<Player>().unwrap(), Player::Second);
        assert!("third".parse::<Player>().is_err());
    }
}
