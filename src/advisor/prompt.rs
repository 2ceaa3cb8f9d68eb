//! Text rendering of the board for a language-model advisor

use std::fmt::Write;

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

/// Render the board with column letters and 1-based row numbers.
///
/// ```text
///    A B C ...
///  1 . . X ...
///  2 . O . ...
/// ```
pub fn board_to_text(board: &Board) -> String {
    let mut s = String::with_capacity((BOARD_SIZE + 1) * (BOARD_SIZE * 2 + 4));

    let header: Vec<String> = (0..BOARD_SIZE as u8)
        .map(|x| ((b'A' + x) as char).to_string())
        .collect();
    let _ = writeln!(s, "   {}", header.join(" "));

    for y in 0..BOARD_SIZE as u8 {
        let _ = write!(s, "{:>2} ", y + 1);
        for x in 0..BOARD_SIZE as u8 {
            s.push(board.get(Pos::new(x, y)).symbol());
            s.push(' ');
        }
        s.push('\n');
    }
    s
}

fn side_label(stone: Stone) -> String {
    format!("{} ({})", stone.symbol(), stone.name())
}

/// Build the full request prompt for `color` to move
pub fn build_prompt(board: &Board, color: Stone, difficulty: &str) -> String {
    let last = BOARD_SIZE - 1;
    let last_col = (b'A' + last as u8) as char;
    format!(
        "You are a Gomoku (five-in-a-row) grandmaster.\n\
         The board is {size}x{size}. Difficulty: {difficulty}.\n\
         \n\
         Current board:\n\
         {board}\n\
         You are playing {me}. Your opponent is {them}.\n\
         \n\
         Pick the single best empty cell for your next move:\n\
         1. Complete five in a row if you can.\n\
         2. Block the opponent's immediate five.\n\
         3. Build open fours or double threes.\n\
         4. Take the center early.\n\
         \n\
         Reply with JSON only: {{\"x\": <0-{last}, column A-{last_col}>, \
         \"y\": <0-{last}, row 1-{size}>, \"reasoning\": \"<short explanation>\"}}",
        size = BOARD_SIZE,
        board = board_to_text(board),
        me = side_label(color),
        them = side_label(color.opponent()),
    )
}
