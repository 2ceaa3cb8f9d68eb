//! Advisor reply decoding and validation

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos};
use crate::error::{AdvisorError, GameError};

/// Move proposed by the advisor, as received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorReply {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub reasoning: String,
}

impl AdvisorReply {
    /// Accept the proposal only if it names an empty cell on the board
    pub fn validate(&self, board: &Board) -> Result<Pos, GameError> {
        let pos = Pos::try_new(self.x, self.y).ok_or(GameError::OutOfBounds {
            x: self.x,
            y: self.y,
        })?;
        if !board.is_empty(pos) {
            return Err(GameError::Occupied(pos));
        }
        Ok(pos)
    }
}

/// Decode a JSON reply, tolerating a surrounding Markdown code fence
pub fn parse_reply(text: &str) -> Result<AdvisorReply, AdvisorError> {
    let body = strip_code_fence(text.trim());
    Ok(serde_json::from_str(body)?)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (e.g. "json") on the opening line
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
