//! Error types for the Caro engine
//!
//! Play-time conditions (illegal moves, empty undo/redo, search exhaustion)
//! are reported through plain `bool`/`Option` returns. Only construction-time
//! configuration and the background worker produce errors.

use std::time::Duration;

use thiserror::Error;

/// Invalid construction-time configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid board size {size} (expected 1..={max})")]
    InvalidSize { size: usize, max: usize },

    #[error("invalid win condition {win_condition} for a {size}x{size} board")]
    InvalidWinCondition { win_condition: usize, size: usize },

    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}

/// Failure while waiting on a background AI search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkerError {
    #[error("AI worker thread exited without producing a move")]
    Disconnected,

    #[error("AI worker did not answer within {0:?}")]
    TimedOut(Duration),
}
