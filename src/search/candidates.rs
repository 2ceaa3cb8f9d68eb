//! Candidate move generation
//!
//! Only empty cells touching an existing stone (8-neighbourhood) are worth
//! scoring. An empty board has a single candidate: the center.

use tracing::warn;

use crate::board::{Bitboard, Board, Pos};

/// Empty cells adjacent to any stone, deduplicated, in row-major order.
///
/// Falls back to every empty cell if no such neighbour exists. Returns the
/// center alone on an empty board and nothing on a full one.
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    let mut near = Bitboard::new();
    for stone in board.occupied().iter_ones() {
        for n in stone.neighbors().filter(|&n| board.is_empty(n)) {
            near.set(n);
        }
    }

    // Degenerate: no stone has an empty neighbour
    if near.is_empty() {
        let all: Vec<Pos> = board.empty_cells().collect();
        if !all.is_empty() {
            warn!(empty = all.len(), "no cell next to a stone is empty, scanning whole board");
        }
        return all;
    }

    near.iter_ones().collect()
}
