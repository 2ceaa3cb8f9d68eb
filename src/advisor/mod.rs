//! External move advisor
//!
//! A model-backed opponent is an outside service: it gets a board snapshot,
//! the side to move and a difficulty tag, and answers with a coordinate plus
//! free-text reasoning, or fails. Every failure is recovered by the engine
//! falling back to the local selector, so nothing here is fatal.
//!
//! The network call itself lives behind [`CompletionBackend`]; this module
//! owns the prompt, the reply format and the threading.

pub mod prompt;
pub mod reply;
pub mod task;

use tracing::{debug, instrument};

use crate::board::{Board, Stone};
use crate::error::AdvisorError;

pub use prompt::{board_to_text, build_prompt};
pub use reply::{parse_reply, AdvisorReply};
pub use task::AdvisorTask;

/// Result of one advisor call
pub type AdvisorOutcome = Result<AdvisorReply, AdvisorError>;

/// Snapshot handed to the advisor
#[derive(Debug, Clone)]
pub struct AdvisorRequest {
    pub board: Board,
    pub color: Stone,
    pub difficulty: String,
}

impl AdvisorRequest {
    pub fn new(board: Board, color: Stone, difficulty: impl Into<String>) -> Self {
        Self {
            board,
            color,
            difficulty: difficulty.into(),
        }
    }
}

/// Something that can propose a move for a position
pub trait MoveAdvisor: Send + Sync {
    fn name(&self) -> &str;

    /// Propose a move. May block; callers run it off the UI thread.
    fn request_move(&self, request: &AdvisorRequest) -> AdvisorOutcome;
}

/// Advisor used when no model backend is configured. Always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredAdvisor;

impl MoveAdvisor for UnconfiguredAdvisor {
    fn name(&self) -> &str {
        "unconfigured"
    }

    fn request_move(&self, _request: &AdvisorRequest) -> AdvisorOutcome {
        Err(AdvisorError::Unavailable("no model backend configured".into()))
    }
}

/// Raw text completion service, e.g. a hosted language model
pub trait CompletionBackend: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, AdvisorError>;
}

/// Advisor that prompts a language model and decodes its JSON answer
pub struct LlmAdvisor<B> {
    backend: B,
}

impl<B: CompletionBackend> LlmAdvisor<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: CompletionBackend> MoveAdvisor for LlmAdvisor<B> {
    fn name(&self) -> &str {
        "llm"
    }

    #[instrument(skip(self, request), fields(color = ?request.color, difficulty = %request.difficulty))]
    fn request_move(&self, request: &AdvisorRequest) -> AdvisorOutcome {
        let prompt = build_prompt(&request.board, request.color, &request.difficulty);
        debug!(len = prompt.len(), "sending prompt");

        let text = self.backend.complete(&prompt)?;
        let reply = parse_reply(&text)?;
        debug!(x = reply.x, y = reply.y, "advisor replied");
        Ok(reply)
    }
}
