//! Error types for arena operations

use thiserror::Error;

/// Errors surfaced by the arena.
///
/// Built-in strategies never fail. Only the interactive agent touches I/O,
/// and the CLI roster parser rejects malformed entries.
#[derive(Debug, Error)]
pub enum ArenaError {
    /// Interactive input reached end of stream before a valid move was read.
    #[error("input closed while waiting for a move from {name}")]
    InputClosed { name: String },

    /// Console read or write failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Move token other than `C` or `D`.
    #[error("invalid move {0:?}, expected C or D")]
    InvalidMove(String),

    /// Strategy token not recognised.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Roster entry not in `name=strategy` form.
    #[error("invalid player spec {0:?}, expected NAME=STRATEGY")]
    InvalidPlayerSpec(String),

    /// Report serialization failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
