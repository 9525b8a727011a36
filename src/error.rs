//! Error types for the cpviz crate
//!
//! The graph parser reports through its own [`ParseError`](crate::graph::ParseError)
//! so callers can point at the offending line. Everything else returns this
//! crate-wide [`Error`].

use thiserror::Error;

/// Main error type for the cpviz crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    CellOccupied { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("not {player}'s turn")]
    NotYourTurn { player: String },

    #[error("score {value} at cell {position} is outside [{min}, {max}]")]
    ScoreOutOfRange {
        position: usize,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("invalid score '{token}' at cell {position}: expected an integer")]
    InvalidScore { position: usize, token: String },

    #[error("expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error(
        "invalid piece counts: first={first}, second={second} (must be equal or first ahead by 1)"
    )]
    InvalidPieceCounts { first: usize, second: usize },

    #[error("both players have a completed line")]
    ConflictingWinners,

    #[error("Prüfer value {value} at index {index} is outside [0, {max}]")]
    InvalidPruferValue {
        index: usize,
        value: usize,
        max: usize,
    },

    #[error("a labelled tree needs at least 2 nodes, got {nodes}")]
    TooFewNodes { nodes: usize },

    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("invalid character '{character}' at position {position}: expected 0 or 1")]
    InvalidBit { character: char, position: usize },

    #[error("{cells} required cells but the grid only takes {max}")]
    TooManyCells { cells: usize, max: usize },

    #[error("cell ({row}, {col}) is listed twice")]
    DuplicateCell { row: usize, col: usize },

    #[error("{first} and {second} cannot be at the same position")]
    SamePosition {
        first: &'static str,
        second: &'static str,
    },

    #[error("invalid move key '{key}' at position {position}. Expected one of: w, a, s, d")]
    InvalidMoveKey { key: char, position: usize },

    #[error("invalid coordinates '{input}'. Expected two integers like '3,-1'")]
    ParseCoordinates { input: String },

    #[error("invalid index start '{input}'. Expected one of: 0-indexed, 1-indexed")]
    ParseIndexStart { input: String },

    #[error("invalid player '{input}'. Expected one of: first, second")]
    ParsePlayer { input: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
