//! Error types
//!
//! `GameError` is raised at the placement boundary and never changes state.
//! `AdvisorError` covers every way the external move advisor can fail; the
//! engine recovers from all of them by falling back to the local selector.

use std::time::Duration;

use thiserror::Error;

use crate::board::Pos;

/// Rejected placement. The board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("{0} is already occupied")]
    Occupied(Pos),

    #[error("game is over")]
    GameOver,

    #[error("cannot place an empty stone")]
    EmptyStone,
}

/// Failure of the external move advisor
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("advisor unavailable: {0}")]
    Unavailable(String),

    #[error("advisor backend failed: {0}")]
    Backend(String),

    #[error("advisor timed out after {0:?}")]
    Timeout(Duration),

    #[error("advisor worker exited without replying")]
    Disconnected,

    #[error("malformed advisor reply: {0}")]
    MalformedReply(#[from] serde_json::Error),

    #[error("advisor proposed an illegal move: {0}")]
    InvalidMove(#[from] GameError),
}

/// Malformed configuration value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}
