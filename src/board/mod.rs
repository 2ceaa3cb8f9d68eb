//! Board representation for Gomoku

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Center coordinate on both axes
pub const CENTER: u8 = (BOARD_SIZE / 2) as u8;

/// Cell state. `Black` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Marker used in the text encoding of the board
    pub fn symbol(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Empty => "Empty",
            Stone::Black => "Black",
            Stone::White => "White",
        }
    }
}

/// Position on the board. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    /// Checked constructor for untrusted coordinates
    #[inline]
    pub fn try_new(x: i32, y: i32) -> Option<Self> {
        Self::is_valid(x, y).then(|| Self { x: x as u8, y: y as u8 })
    }

    /// The exact center cell
    #[inline]
    pub const fn center() -> Self {
        Self { x: CENTER, y: CENTER }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// Step `k` cells along `(dx, dy)`, or `None` when that leaves the board
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, k: i32) -> Option<Pos> {
        Self::try_new(i32::from(self.x) + dx * k, i32::from(self.y) + dy * k)
    }

    /// Manhattan distance to the center cell
    #[inline]
    pub fn center_distance(self) -> i32 {
        (i32::from(self.x) - i32::from(CENTER)).abs() + (i32::from(self.y) - i32::from(CENTER)).abs()
    }

    /// All 8-directional neighbours that lie on the board
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        (-1i32..=1)
            .flat_map(|dy| (-1i32..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(move |(dx, dy)| self.offset(dx, dy, 1))
    }
}

/// Column letter plus 1-based row, e.g. `H8` for the center
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.x) as char, self.y + 1)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// A recorded placement. Immutable once made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
    /// 1-based turn number
    pub turn: u32,
}
