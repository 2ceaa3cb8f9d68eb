use super::*;
use crate::error::GameError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(3, 11);
    assert_eq!(pos.x, 3);
    assert_eq!(pos.y, 11);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::center();
    assert_eq!(pos, Pos::new(7, 7));
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, pos);

    // Row-major: x varies fastest
    assert_eq!(Pos::from_index(16), Pos::new(1, 1));
    assert_eq!(Pos::new(14, 0).to_index(), 14);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
    assert_eq!(Pos::try_new(15, 3), None);
    assert_eq!(Pos::try_new(2, 3), Some(Pos::new(2, 3)));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
    assert_eq!(CENTER, 7);
}

#[test]
fn test_pos_display() {
    assert_eq!(Pos::new(0, 0).to_string(), "A1");
    assert_eq!(Pos::center().to_string(), "H8");
    assert_eq!(Pos::new(14, 14).to_string(), "O15");
}

#[test]
fn test_pos_neighbors() {
    assert_eq!(Pos::center().neighbors().count(), 8);
    assert_eq!(Pos::new(0, 0).neighbors().count(), 3);
    assert_eq!(Pos::new(0, 7).neighbors().count(), 5);
    assert!(Pos::new(0, 0).neighbors().all(|p| p != Pos::new(0, 0)));
}

#[test]
fn test_center_distance() {
    assert_eq!(Pos::center().center_distance(), 0);
    assert_eq!(Pos::new(0, 0).center_distance(), 14);
    assert_eq!(Pos::new(8, 6).center_distance(), 2);
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new();
    assert!(board.is_board_empty());

    board.place_stone(Pos::new(2, 5), Stone::Black).unwrap();
    board.place_stone(Pos::new(5, 2), Stone::White).unwrap();

    assert_eq!(board.get(Pos::new(2, 5)), Stone::Black);
    assert_eq!(board.get(Pos::new(5, 2)), Stone::White);
    assert_eq!(board.get(Pos::new(5, 5)), Stone::Empty);
    assert_eq!(board.stone_count(), 2);
    assert_eq!(board.get_xy(-1, 4), None);
}

#[test]
fn test_place_on_occupied_rejected() {
    let mut board = Board::new();
    let pos = Pos::new(4, 4);
    board.place_stone(pos, Stone::Black).unwrap();
    let before = board;

    assert_eq!(board.place_stone(pos, Stone::White), Err(GameError::Occupied(pos)));
    assert_eq!(board, before, "Rejected placement must not change the board");
}

#[test]
fn test_place_empty_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.place_stone(Pos::new(1, 1), Stone::Empty),
        Err(GameError::EmptyStone)
    );
    assert!(board.is_board_empty());
}

#[test]
fn test_bitboard_iteration_order() {
    let mut board = Board::new();
    board.place_stone(Pos::new(14, 14), Stone::Black).unwrap();
    board.place_stone(Pos::new(3, 0), Stone::White).unwrap();
    board.place_stone(Pos::new(0, 9), Stone::Black).unwrap();

    let occupied: Vec<Pos> = board.occupied().iter_ones().collect();
    assert_eq!(occupied, vec![Pos::new(3, 0), Pos::new(0, 9), Pos::new(14, 14)]);
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    for (i, pos) in (0..TOTAL_CELLS).map(Pos::from_index).enumerate() {
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        board.place_stone(pos, stone).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}
