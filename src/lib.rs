//! Algorithmic core of the contest-problem visualizers
//!
//! This crate provides:
//! - A parser for graphs written in contest input format, with structured errors
//! - Prüfer sequence decoding and random labelled trees
//! - A memoized minimax solver for Weighted Tic-Tac-Toe (ABC349 E) and a
//!   human-versus-CPU match built on it
//! - The smaller problems: Bad Juice, Alternating String, 01 Matrix Again,
//!   Sierpinski carpet and Push and Carry
//! - The `cpviz` command-line front end

pub mod cli;
pub mod error;
pub mod graph;
pub mod logging;
pub mod problems;
pub mod tictactoe;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, IndexStart, ParseError, ParseField, ParseOptions};
pub use tictactoe::{Board, Match, Outcome, Player, SolveResult, Solver};
