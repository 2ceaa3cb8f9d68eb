//! Win condition checking
//!
//! A game is won by the move that completes five or more stones in an
//! unbroken line through the placed cell. Overlines count.

use crate::board::{Board, Pos, Stone};

/// Direction vectors `(dx, dy)` for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal down
    (1, -1), // Diagonal up
];

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Count consecutive `color` stones from `pos` along `(dx, dy)`, excluding `pos`.
#[inline]
fn run_length(board: &Board, pos: Pos, dx: i32, dy: i32, color: Stone) -> usize {
    (1..)
        .map_while(|k| pos.offset(dx, dy, k))
        .take_while(|&p| board.get(p) == color)
        .count()
}

/// Check whether the stone just placed at `pos` completes five in a row.
///
/// The cell at `pos` must already hold `color`.
#[inline]
pub fn check_win(board: &Board, pos: Pos, color: Stone) -> bool {
    debug_assert_eq!(board.get(pos), color, "check_win called on a cell not owned by {color:?}");
    if color == Stone::Empty {
        return false;
    }

    DIRECTIONS.iter().any(|&(dx, dy)| {
        1 + run_length(board, pos, dx, dy, color) + run_length(board, pos, -dx, -dy, color)
            >= WIN_LENGTH
    })
}

/// Find the full winning run through `pos`, ordered from one end to the other.
///
/// Returns every stone of the run, so overlines yield more than five cells.
pub fn find_winning_line(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if color == Stone::Empty || board.get(pos) != color {
        return None;
    }

    for &(dx, dy) in &DIRECTIONS {
        let back = run_length(board, pos, -dx, -dy, color) as i32;
        let forward = run_length(board, pos, dx, dy, color) as i32;

        if (back + forward + 1) as usize >= WIN_LENGTH {
            let line = (-back..=forward)
                .filter_map(|k| pos.offset(dx, dy, k))
                .collect();
            return Some(line);
        }
    }

    None
}

/// Check if the board has no empty cell left
#[inline]
pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(x, y) in cells {
            board.place_stone(Pos::new(x, y), stone).unwrap();
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for x in 3..8 {
            board.place_stone(Pos::new(x, 9), Stone::Black).unwrap();
        }
        for x in 3..8 {
            assert!(check_win(&board, Pos::new(x, 9), Stone::Black), "x={x}");
        }
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for y in 0..5 {
            board.place_stone(Pos::new(4, y), Stone::White).unwrap();
        }
        assert!(check_win(&board, Pos::new(4, 2), Stone::White));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(2 + i, 2 + i), Stone::Black).unwrap();
        }
        assert!(check_win(&board, Pos::new(4, 4), Stone::Black));
    }

    #[test]
    fn test_diagonal_up_five() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(5 + i, 10 - i), Stone::White).unwrap();
        }
        assert!(check_win(&board, Pos::new(9, 6), Stone::White));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for x in 0..6 {
            board.place_stone(Pos::new(x, 0), Stone::Black).unwrap();
        }
        assert!(check_win(&board, Pos::new(5, 0), Stone::Black));
        assert_eq!(find_winning_line(&board, Pos::new(2, 0), Stone::Black).unwrap().len(), 6);
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for x in 0..4 {
            board.place_stone(Pos::new(x, 6), Stone::Black).unwrap();
        }
        assert!(!check_win(&board, Pos::new(3, 6), Stone::Black));
        assert!(find_winning_line(&board, Pos::new(3, 6), Stone::Black).is_none());
    }

    #[test]
    fn test_removing_interior_stone_breaks_win() {
        let cells = [(3, 7), (4, 7), (5, 7), (6, 7), (7, 7)];

        let mut full = Board::new();
        place_all(&mut full, &cells, Stone::Black);
        assert!(check_win(&full, Pos::new(7, 7), Stone::Black));

        // Same row without the interior stone at (5, 7)
        let mut gapped = Board::new();
        place_all(&mut gapped, &[(3, 7), (4, 7), (6, 7), (7, 7)], Stone::Black);
        assert!(!check_win(&gapped, Pos::new(7, 7), Stone::Black));
    }

    #[test]
    fn test_opponent_stone_interrupts_line() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 3), (1, 3), (3, 3), (4, 3), (5, 3)], Stone::Black);
        board.place_stone(Pos::new(2, 3), Stone::White).unwrap();
        assert!(!check_win(&board, Pos::new(3, 3), Stone::Black));
        assert!(!check_win(&board, Pos::new(2, 3), Stone::White));
    }

    #[test]
    fn test_five_at_board_edge() {
        let mut board = Board::new();
        for y in 10..15 {
            board.place_stone(Pos::new(14, y), Stone::White).unwrap();
        }
        assert!(check_win(&board, Pos::new(14, 14), Stone::White));
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(14 - i, i), Stone::Black).unwrap();
        }
        assert!(check_win(&board, Pos::new(14, 0), Stone::Black));
    }

    #[test]
    fn test_winning_line_is_ordered() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(3 + i, 8 - i), Stone::Black).unwrap();
        }
        let line = find_winning_line(&board, Pos::new(5, 6), Stone::Black).unwrap();
        let expected: Vec<Pos> = (0..5).map(|i| Pos::new(3 + i, 8 - i)).collect();
        assert_eq!(line, expected);
    }

    #[test]
    fn test_symmetric_under_rotation_and_color_swap() {
        let cells = [(2, 3), (3, 4), (4, 5), (5, 6), (6, 7)];
        let n = BOARD_SIZE as u8 - 1;

        let mut board = Board::new();
        place_all(&mut board, &cells, Stone::Black);

        // 180 degree rotation with colors swapped
        let rotated: Vec<(u8, u8)> = cells.iter().map(|&(x, y)| (n - x, n - y)).collect();
        let mut mirror = Board::new();
        place_all(&mut mirror, &rotated, Stone::White);

        for (&(x, y), &(rx, ry)) in cells.iter().zip(&rotated) {
            assert_eq!(
                check_win(&board, Pos::new(x, y), Stone::Black),
                check_win(&mirror, Pos::new(rx, ry), Stone::White)
            );
        }
        assert!(check_win(&mirror, Pos::new(n - 6, n - 7), Stone::White));
    }

    #[test]
    fn test_full_board_detection() {
        let mut board = Board::new();
        assert!(!is_board_full(&board));
        for pos in (0..crate::board::TOTAL_CELLS).map(Pos::from_index) {
            board.place_stone(pos, Stone::Black).unwrap();
        }
        assert!(is_board_full(&board));
    }
}
