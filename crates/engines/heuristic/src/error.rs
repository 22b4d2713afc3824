//! Error types for the heuristic engine.

use std::path::PathBuf;

use chess_core::Square;
use thiserror::Error;

/// Errors raised while choosing a move.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeuristicError {
    /// The caller asked for a move in a position without legal moves.
    /// Detecting checkmate and stalemate is the host's job.
    #[error("no legal moves to choose from")]
    NoLegalMoves,

    /// A candidate move starts on an empty square, which means the move list
    /// does not belong to the board it was handed with.
    #[error("move starts on empty square {square}")]
    EmptyStartSquare { square: Square },
}

/// Errors raised while loading or tuning the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value {value:?} for {name}")]
    Invalid { name: String, value: String },

    #[error("unknown option {0:?}")]
    UnknownOption(String),
}

pub type HeuristicResult<T> = Result<T, HeuristicError>;
