//! Gomoku (five-in-a-row) on a 15x15 board
//!
//! A human plays against either a local single-ply heuristic AI or an
//! external model advisor that falls back to the local AI on any failure.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection
//! - [`eval`]: Single-move heuristic evaluation
//! - [`search`]: Candidate generation and local move selection
//! - [`advisor`]: External move advisor seam
//! - [`engine`]: AI engine combining local play and advisor fallback
//! - [`game`]: Turn, outcome and undo state machine
//! - [`config`]: Runtime settings
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Controller, Outcome, Pos};
//!
//! let mut game = Controller::new();
//! let mut engine = AIEngine::with_seed(42);
//!
//! game.place(Pos::new(7, 7)).unwrap();
//! let reply = engine.get_move(game.board(), game.current_player()).unwrap();
//! assert_eq!(game.place(reply), Ok(Outcome::InProgress));
//! ```
//!
//! # Move Selection
//!
//! 1. Empty board: play the center
//! 2. Otherwise score every empty cell next to a stone for attack and defense
//! 3. Bonus for completing five, smaller bonus for stopping an open four
//! 4. Break ties at random

pub mod advisor;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Stone, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, MoveSource};
pub use error::{AdvisorError, GameError};
pub use game::{Controller, Outcome};
