//! AI engine: local heuristic play plus advisor fallback
//!
//! The engine answers "where does `color` play next" in one of two ways:
//!
//! 1. **Local**: score every candidate cell once for attack and defense and
//!    take the best, breaking ties at random.
//! 2. **Advised**: take a move proposed by an external [`MoveAdvisor`],
//!    provided it names an empty cell. Any failure silently downgrades to
//!    the local answer.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let mut engine = AIEngine::with_seed(7);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Stone::White);
//! println!("White plays {:?} ({:?})", result.best_move, result.source);
//! ```

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::advisor::{AdvisorOutcome, AdvisorRequest, MoveAdvisor};
use crate::board::{Board, Pos, Stone};
use crate::search::select_with_score;

/// Where the chosen move came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Empty board, center taken without scoring
    Opening,
    /// Local heuristic selector
    Heuristic,
    /// External advisor, validated
    Model,
    /// Advisor failed; local heuristic used instead
    Fallback,
}

/// Chosen move with statistics
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` only on a full board
    pub best_move: Option<Pos>,
    /// Combined selector score of the move (0 for advisor moves)
    pub score: i32,
    pub source: MoveSource,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Candidate cells scored
    pub candidates: usize,
    /// Advisor's explanation for its move
    pub reasoning: Option<String>,
    /// Why the advisor was not used
    pub fallback_reason: Option<String>,
}

impl MoveResult {
    fn advised(pos: Pos, reasoning: String, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            source: MoveSource::Model,
            time_ms,
            candidates: 1,
            reasoning: Some(reasoning),
            fallback_reason: None,
        }
    }

    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            source: MoveSource::Heuristic,
            time_ms,
            candidates: 0,
            reasoning: None,
            fallback_reason: None,
        }
    }
}

/// Move-choosing engine. Generic over its random source so tie-breaks can be
/// made reproducible.
pub struct AIEngine<R = SmallRng> {
    rng: R,
}

impl AIEngine<SmallRng> {
    /// Engine seeded from OS entropy
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Engine with a fixed seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl Default for AIEngine<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AIEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Best local move for `color`, or `None` on a full board
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Best local move for `color` with statistics
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();

        let Some((pos, selection)) = select_with_score(board, color, &mut self.rng) else {
            return MoveResult::no_move(elapsed_ms(start));
        };

        let source = if board.is_board_empty() {
            MoveSource::Opening
        } else {
            MoveSource::Heuristic
        };

        MoveResult {
            best_move: Some(pos),
            score: selection.score,
            source,
            time_ms: elapsed_ms(start),
            candidates: selection.considered,
            reasoning: None,
            fallback_reason: None,
        }
    }

    /// Turn an advisor outcome into a move.
    ///
    /// The proposal is accepted only if it targets an empty cell on `board`;
    /// every other case yields the local move marked as [`MoveSource::Fallback`].
    pub fn resolve_advice(
        &mut self,
        board: &Board,
        color: Stone,
        outcome: AdvisorOutcome,
        elapsed: Duration,
    ) -> MoveResult {
        let time_ms = elapsed.as_millis() as u64;

        let accepted = outcome.and_then(|reply| {
            let pos = reply.validate(board)?;
            Ok((pos, reply.reasoning))
        });

        match accepted {
            Ok((pos, reasoning)) => {
                info!(%pos, ?color, "advisor move accepted");
                MoveResult::advised(pos, reasoning, time_ms)
            }
            Err(err) => {
                warn!(error = %err, ?color, "advisor failed, using local AI");
                let mut result = self.get_move_with_stats(board, color);
                if result.best_move.is_some() {
                    result.source = MoveSource::Fallback;
                }
                result.time_ms += time_ms;
                result.fallback_reason = Some(err.to_string());
                result
            }
        }
    }

    /// Ask `advisor` synchronously and resolve its answer
    pub fn consult(
        &mut self,
        advisor: &dyn MoveAdvisor,
        board: &Board,
        color: Stone,
        difficulty: &str,
    ) -> MoveResult {
        let start = Instant::now();
        let request = AdvisorRequest::new(*board, color, difficulty);
        let outcome = advisor.request_move(&request);
        self.resolve_advice(board, color, outcome, start.elapsed())
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
