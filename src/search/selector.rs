//! Local move selector
//!
//! One ply only: every candidate is scored once for attack and once for
//! defense, and the best combined score wins. The opponent's reply is never
//! simulated.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate_move, PatternScore};

use super::candidates::candidate_moves;

/// Added when the opponent would reach an open four or better here
pub const BLOCK_BONUS: i32 = 5_000;
/// Added when our own stone here completes five
pub const WIN_BONUS: i32 = 200_000;

/// Attack and defense scores for one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub pos: Pos,
    pub offense: i32,
    pub defense: i32,
    pub total: i32,
}

impl ScoredMove {
    fn new(board: &Board, pos: Pos, color: Stone) -> Self {
        let offense = evaluate_move(board, pos, color);
        let defense = evaluate_move(board, pos, color.opponent());

        let mut total = offense + defense;
        if defense >= PatternScore::OPEN_FOUR {
            total += BLOCK_BONUS;
        }
        if offense >= PatternScore::FIVE {
            total += WIN_BONUS;
        }

        Self { pos, offense, defense, total }
    }
}

/// Best score and every candidate that reaches it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub score: i32,
    pub best: Vec<Pos>,
    /// Number of candidates scored
    pub considered: usize,
}

/// Score all candidates for `color` and keep the tied best.
///
/// Returns `None` when the board has no empty cell.
pub fn score_candidates(board: &Board, color: Stone) -> Option<Selection> {
    let candidates = candidate_moves(board);
    if candidates.is_empty() {
        return None;
    }

    let considered = candidates.len();
    let mut score = i32::MIN;
    let mut best = Vec::new();

    for scored in candidates.into_iter().map(|pos| ScoredMove::new(board, pos, color)) {
        if scored.total > score {
            score = scored.total;
            best.clear();
            best.push(scored.pos);
        } else if scored.total == score {
            best.push(scored.pos);
        }
    }

    Some(Selection { score, best, considered })
}

/// Pick the move for `color`, breaking ties uniformly with `rng`.
///
/// An empty board always yields the center without scoring.
pub fn select_move<R: Rng + ?Sized>(board: &Board, color: Stone, rng: &mut R) -> Option<Pos> {
    select_with_score(board, color, rng).map(|(pos, _)| pos)
}

/// Like [`select_move`] but also returns the winning score and candidate count.
pub fn select_with_score<R: Rng + ?Sized>(
    board: &Board,
    color: Stone,
    rng: &mut R,
) -> Option<(Pos, Selection)> {
    if board.is_board_empty() {
        let selection = Selection {
            score: 0,
            best: vec![Pos::center()],
            considered: 1,
        };
        return Some((Pos::center(), selection));
    }

    let selection = score_candidates(board, color)?;
    let pos = *selection.best.choose(rng)?;
    debug!(
        %pos,
        score = selection.score,
        ties = selection.best.len(),
        considered = selection.considered,
        "local move selected"
    );
    Some((pos, selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn board_with(cells: &[((u8, u8), Stone)]) -> Board {
        let mut board = Board::new();
        for &((x, y), stone) in cells {
            board.place_stone(Pos::new(x, y), stone).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_plays_center() {
        let board = Board::new();
        for seed in 0..5 {
            let mut rng = SmallRng::seed_from_u64(seed);
            assert_eq!(select_move(&board, Stone::Black, &mut rng), Some(Pos::new(7, 7)));
        }
    }

    #[test]
    fn test_must_block_open_four() {
        let b = Stone::Black;
        let board = board_with(&[((7, 7), b), ((7, 8), b), ((7, 9), b), ((7, 10), b)]);

        let selection = score_candidates(&board, Stone::White).unwrap();
        let mut best = selection.best.clone();
        best.sort();
        assert!(
            best.iter().all(|p| *p == Pos::new(7, 6) || *p == Pos::new(7, 11)),
            "White must block at an end, got {best:?}"
        );

        for seed in 0..10 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let pos = select_move(&board, Stone::White, &mut rng).unwrap();
            assert!(pos == Pos::new(7, 6) || pos == Pos::new(7, 11), "seed {seed}: {pos}");
        }
    }

    #[test]
    fn test_closed_four_beats_open_three() {
        // Black closed four on row 2, blocked on the left by White.
        // White also has an unrelated open three far away.
        let b = Stone::Black;
        let w = Stone::White;
        let board = board_with(&[
            ((0, 2), w),
            ((1, 2), b),
            ((2, 2), b),
            ((3, 2), b),
            ((4, 2), b),
            ((10, 12), w),
            ((11, 12), w),
            ((12, 12), w),
        ]);

        // White to move must block the five rather than extend its three
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(select_move(&board, w, &mut rng), Some(Pos::new(5, 2)));

        // Black to move completes the five
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(select_move(&board, b, &mut rng), Some(Pos::new(5, 2)));
    }

    #[test]
    fn test_prefers_own_win_over_block() {
        let b = Stone::Black;
        let w = Stone::White;
        let board = board_with(&[
            ((3, 3), w),
            ((4, 3), w),
            ((5, 3), w),
            ((6, 3), w),
            ((3, 10), b),
            ((4, 10), b),
            ((5, 10), b),
            ((6, 10), b),
        ]);

        let selection = score_candidates(&board, w).unwrap();
        assert!(selection.score >= WIN_BONUS);
        assert!(
            selection.best.iter().all(|p| p.y == 3),
            "White should finish its own row: {:?}",
            selection.best
        );
    }

    #[test]
    fn test_never_returns_occupied_cell() {
        let mut board = Board::new();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut color = Stone::Black;

        for _ in 0..60 {
            let pos = select_move(&board, color, &mut rng).unwrap();
            assert!(board.is_empty(pos), "{pos} is occupied");
            board.place_stone(pos, color).unwrap();
            color = color.opponent();
        }
    }

    #[test]
    fn test_tie_break_picks_from_best_set() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black).unwrap();

        let selection = score_candidates(&board, Stone::White).unwrap();
        assert_eq!(selection.considered, 8);
        // Orthogonal neighbours sit closer to the center than diagonal ones
        let mut best = selection.best.clone();
        best.sort();
        assert_eq!(
            best,
            vec![Pos::new(7, 6), Pos::new(6, 7), Pos::new(8, 7), Pos::new(7, 8)]
        );

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let pos = select_move(&board, Stone::White, &mut rng).unwrap();
            assert!(selection.best.contains(&pos));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for pos in (0..TOTAL_CELLS).map(Pos::from_index) {
            board.place_stone(pos, Stone::Black).unwrap();
        }
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(select_move(&board, Stone::White, &mut rng), None);
    }

    #[test]
    fn test_scored_move_bonuses() {
        let b = Stone::Black;
        let board = board_with(&[((2, 2), b), ((3, 2), b), ((4, 2), b)]);

        // Black open three at (5, 2) becomes an open four for Black;
        // from White's view that is a defense >= open four
        let scored = ScoredMove::new(&board, Pos::new(5, 2), Stone::White);
        assert!(scored.defense >= PatternScore::OPEN_FOUR);
        assert_eq!(scored.total, scored.offense + scored.defense + BLOCK_BONUS);
    }
}
