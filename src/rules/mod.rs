//! Game rules for freestyle Gomoku
//!
//! Five or more in a row wins. A full board with no winner is a draw.

pub mod win;

pub use win::{check_win, find_winning_line, is_board_full, DIRECTIONS, WIN_LENGTH};
