//! CLI infrastructure for the cpviz toolkit
//!
//! This module provides the command-line front end that replaces the
//! visualizer input boxes: graph text parsing, Prüfer decoding, the
//! weighted tic-tac-toe solver and the smaller problem pages.

pub mod commands;
pub mod config;
pub mod output;
