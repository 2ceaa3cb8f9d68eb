//! Pattern scores for single-move evaluation
//!
//! A line through a candidate cell is classified by its length (the run of
//! friendly stones it would join plus the new stone) and by how many of its
//! two ends are empty.

/// Pattern scores used by the move evaluator
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row, regardless of open ends
    pub const FIVE: i32 = 100_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i32 = 1_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 1_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 100;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 100;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 10;

    /// Base of the center bias: `CENTER_BIAS - manhattan distance to center`
    pub const CENTER_BIAS: i32 = 20;
}

/// Line shape seen from one candidate cell in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePattern {
    /// Friendly stones in the line, counting the candidate itself
    pub length: u32,
    /// Empty cells directly beyond each end of the run (0..=2)
    pub open_ends: u32,
}

impl LinePattern {
    /// Score contribution of this line
    pub fn score(self) -> i32 {
        match (self.length, self.open_ends) {
            (len, _) if len >= 5 => PatternScore::FIVE,
            (_, 0) => 0,
            (4, open) if open >= 2 => PatternScore::OPEN_FOUR,
            (4, _) => PatternScore::CLOSED_FOUR,
            (3, open) if open >= 2 => PatternScore::OPEN_THREE,
            (3, _) => PatternScore::CLOSED_THREE,
            (2, open) if open >= 2 => PatternScore::OPEN_TWO,
            (2, _) => PatternScore::CLOSED_TWO,
            _ => 0,
        }
    }
}
