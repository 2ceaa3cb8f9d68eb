//! Game controller: board, turn and outcome as one state machine
//!
//! Commands are [`Controller::place`], [`Controller::undo`] and
//! [`Controller::new_game`]. Every accepted placement first pushes a snapshot
//! of the pre-move state, so undo is a plain restore.

use tracing::{debug, info};

use crate::board::{Board, Move, Pos, Stone};
use crate::error::GameError;
use crate::rules::{check_win, find_winning_line, is_board_full};

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Stone),
    Drawn,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(self) -> Option<Stone> {
        match self {
            Outcome::Won(stone) => Some(stone),
            _ => None,
        }
    }
}

/// State before a placement
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    board: Board,
    current: Stone,
    outcome: Outcome,
    move_count: usize,
}

/// Owns the single board/turn/outcome triple of a game
#[derive(Debug, Clone)]
pub struct Controller {
    board: Board,
    current: Stone,
    outcome: Outcome,
    moves: Vec<Move>,
    winning_line: Option<Vec<Pos>>,
    history: Vec<Snapshot>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Fresh game, Black to move
    pub fn new() -> Self {
        Self::with_position(Board::new(), Stone::Black)
    }

    /// Start from an arbitrary position with `to_move` on turn
    pub fn with_position(board: Board, to_move: Stone) -> Self {
        debug_assert_ne!(to_move, Stone::Empty);
        Self {
            board,
            current: to_move,
            outcome: Outcome::InProgress,
            moves: Vec::new(),
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Discard the current game and start over
    pub fn new_game(&mut self) {
        info!("new game");
        *self = Self::new();
    }

    /// Place the current player's stone at `pos`.
    ///
    /// On success returns the resulting outcome. Rejections leave all state
    /// untouched.
    pub fn place(&mut self, pos: Pos) -> Result<Outcome, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }

        let before = self.snapshot();
        let color = self.current;
        self.board.place_stone(pos, color)?;
        self.history.push(before);

        let turn = self.moves.len() as u32 + 1;
        self.moves.push(Move { pos, stone: color, turn });
        debug!(%pos, ?color, turn, "stone placed");

        if check_win(&self.board, pos, color) {
            self.winning_line = find_winning_line(&self.board, pos, color);
            self.outcome = Outcome::Won(color);
            info!(?color, turn, "five in a row");
        } else if is_board_full(&self.board) {
            self.outcome = Outcome::Drawn;
            info!(turn, "board full, draw");
        } else {
            self.current = color.opponent();
        }

        Ok(self.outcome)
    }

    /// Place at raw coordinates, rejecting anything off the board
    pub fn place_xy(&mut self, x: i32, y: i32) -> Result<Outcome, GameError> {
        let pos = Pos::try_new(x, y).ok_or(GameError::OutOfBounds { x, y })?;
        self.place(pos)
    }

    /// Step back `steps` placements. With fewer snapshots than that the game
    /// restarts. Returns how many placements were removed.
    pub fn undo(&mut self, steps: usize) -> usize {
        if steps == 0 || self.history.is_empty() {
            return 0;
        }
        if self.history.len() < steps {
            let removed = self.history.len();
            self.new_game();
            return removed;
        }

        let keep = self.history.len() - steps;
        let snapshot = self.history[keep];
        self.history.truncate(keep);

        self.board = snapshot.board;
        self.current = snapshot.current;
        self.outcome = snapshot.outcome;
        self.moves.truncate(snapshot.move_count);
        self.winning_line = None;

        debug!(steps, remaining = self.moves.len(), "undo");
        steps
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            current: self.current,
            outcome: self.outcome,
            move_count: self.moves.len(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player on turn (the winner, once the game is won)
    pub fn current_player(&self) -> Stone {
        self.current
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Full run of the winning line, if the game is won
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// Number of snapshots available to undo
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
