//! Single-move heuristic evaluation
//!
//! Scores how valuable it would be for a color to put a stone on one cell.
//! Each of the four lines through the cell is scanned up to four steps each
//! way. A half-scan stops at the first cell that is not a friendly stone; an
//! empty stop is an open end, an enemy stone or the board edge is a block.
//! The cell itself is never inspected, so occupancy is the caller's concern.

use crate::board::{Board, Pos, Stone};
use crate::rules::DIRECTIONS;

use super::patterns::{LinePattern, PatternScore};

/// How far each half-scan looks
const SCAN_REACH: i32 = 4;

/// Evaluate placing `color` at `pos`.
///
/// Sums the line scores over all four directions and adds a small center
/// bias. Pure: the board is never mutated.
#[must_use]
pub fn evaluate_move(board: &Board, pos: Pos, color: Stone) -> i32 {
    let lines: i32 = DIRECTIONS
        .iter()
        .map(|&(dx, dy)| line_pattern(board, pos, dx, dy, color).score())
        .sum();

    lines + PatternScore::CENTER_BIAS - pos.center_distance()
}

/// Classify the line through `pos` along `(dx, dy)`
pub fn line_pattern(board: &Board, pos: Pos, dx: i32, dy: i32, color: Stone) -> LinePattern {
    let (ahead, open_ahead) = half_scan(board, pos, dx, dy, color);
    let (behind, open_behind) = half_scan(board, pos, -dx, -dy, color);

    LinePattern {
        length: ahead + behind + 1,
        open_ends: u32::from(open_ahead) + u32::from(open_behind),
    }
}

/// Count friendly stones walking away from `pos`; report whether the walk
/// ended on an empty cell.
fn half_scan(board: &Board, pos: Pos, dx: i32, dy: i32, color: Stone) -> (u32, bool) {
    let mut count = 0;
    for k in 1..=SCAN_REACH {
        match pos.offset(dx, dy, k).map(|p| board.get(p)) {
            Some(s) if s == color => count += 1,
            Some(Stone::Empty) => return (count, true),
            // Edge or opposing stone
            _ => return (count, false),
        }
    }
    (count, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[((u8, u8), Stone)]) -> Board {
        let mut board = Board::new();
        for &((x, y), stone) in cells {
            board.place_stone(Pos::new(x, y), stone).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_is_center_bias_only() {
        let board = Board::new();
        assert_eq!(evaluate_move(&board, Pos::center(), Stone::Black), 20);
        assert_eq!(evaluate_move(&board, Pos::new(0, 0), Stone::Black), 6);
    }

    #[test]
    fn test_open_four_line() {
        let b = Stone::Black;
        let board = board_with(&[((4, 7), b), ((5, 7), b), ((6, 7), b)]);
        let pattern = line_pattern(&board, Pos::new(7, 7), 1, 0, b);
        assert_eq!(pattern, LinePattern { length: 4, open_ends: 2 });

        // Open four plus center bias; the other three lines are singletons
        assert_eq!(evaluate_move(&board, Pos::new(7, 7), b), 10_000 + 20);
    }

    #[test]
    fn test_blocked_end() {
        let b = Stone::Black;
        let board = board_with(&[((4, 7), Stone::White), ((5, 7), b), ((6, 7), b)]);
        let pattern = line_pattern(&board, Pos::new(7, 7), 1, 0, b);
        assert_eq!(pattern, LinePattern { length: 3, open_ends: 1 });
    }

    #[test]
    fn test_board_edge_blocks() {
        let w = Stone::White;
        let board = board_with(&[((0, 3), w), ((1, 3), w)]);
        let pattern = line_pattern(&board, Pos::new(2, 3), 1, 0, w);
        assert_eq!(pattern, LinePattern { length: 3, open_ends: 1 });
    }

    #[test]
    fn test_completing_five_scores_five() {
        let b = Stone::Black;
        let board = board_with(&[((7, 7), b), ((7, 8), b), ((7, 9), b), ((7, 10), b)]);
        assert!(evaluate_move(&board, Pos::new(7, 11), b) >= PatternScore::FIVE);
        assert!(evaluate_move(&board, Pos::new(7, 6), b) >= PatternScore::FIVE);
    }

    #[test]
    fn test_gap_stops_scan() {
        // X X _ [X]: the gap is an open end, stones beyond it do not count
        let b = Stone::Black;
        let board = board_with(&[((2, 5), b), ((3, 5), b)]);
        let pattern = line_pattern(&board, Pos::new(5, 5), 1, 0, b);
        assert_eq!(pattern, LinePattern { length: 1, open_ends: 2 });
    }

    #[test]
    fn test_scan_reach_is_four() {
        // Five friendly stones behind the candidate: only four are seen,
        // and the fifth step never happens so that end is not open
        let w = Stone::White;
        let board = board_with(&[((1, 0), w), ((2, 0), w), ((3, 0), w), ((4, 0), w), ((5, 0), w)]);
        let pattern = line_pattern(&board, Pos::new(6, 0), 1, 0, w);
        assert_eq!(pattern.length, 5);
        assert_eq!(pattern.open_ends, 1);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let board = board_with(&[
            ((6, 6), Stone::Black),
            ((7, 7), Stone::White),
            ((8, 6), Stone::Black),
        ]);
        let before = board;
        let first = evaluate_move(&board, Pos::new(7, 6), Stone::Black);
        let second = evaluate_move(&board, Pos::new(7, 6), Stone::Black);
        assert_eq!(first, second);
        assert_eq!(board, before);
    }

    #[test]
    fn test_longer_run_scores_higher() {
        let b = Stone::Black;
        let mut scores = Vec::new();
        for len in 1..=4u8 {
            let cells: Vec<_> = (0..len).map(|i| ((4 + i, 10), b)).collect();
            let board = board_with(&cells);
            scores.push(evaluate_move(&board, Pos::new(4 + len, 10), b));
        }
        assert!(
            scores.windows(2).all(|w| w[0] <= w[1]),
            "open run scores should not decrease: {scores:?}"
        );
    }
}
