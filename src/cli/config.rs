//! Configuration file shared across commands
//!
//! Command-line flags win over values loaded from the file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{graph::IndexStart, logging::LogFormat, tictactoe::Player};

/// Score grid shown on the input screen before the user edits anything
pub const DEFAULT_SCORES: [i32; 9] = [-1, 1, 0, -4, -2, -5, -4, -1, -5];

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Log line format
    pub log_format: LogFormat,

    pub graph: GraphConfig,

    pub tictactoe: TicTacToeConfig,
}

/// Graph parsing defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub index_start: IndexStart,
    pub weighted: bool,
}

/// Tic-tac-toe defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeConfig {
    /// Cell scores, row-major
    pub scores: [i32; 9],

    /// Side the human plays in `play`
    pub human: Player,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            scores: DEFAULT_SCORES,
            human: Player::First,
        }
    }
}

impl CliConfig {
    /// Load a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
