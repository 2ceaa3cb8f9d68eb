//! Local move search: candidate generation and single-ply selection

pub mod candidates;
pub mod selector;

pub use candidates::candidate_moves;
pub use selector::{
    score_candidates, select_move, select_with_score, ScoredMove, Selection, BLOCK_BONUS,
    WIN_BONUS,
};
