//! Move evaluation

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_move, line_pattern};
pub use patterns::{LinePattern, PatternScore};
