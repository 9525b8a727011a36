//! Subcommands of the `cpviz` binary

pub mod graph;
pub mod problem;
pub mod prufer;
pub mod tictactoe;
