//! Game state management for the Gomoku GUI

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::advisor::{AdvisorRequest, AdvisorTask, MoveAdvisor};
use crate::config::{AiMode, Settings};
use crate::engine::{AIEngine, MoveResult};
use crate::game::{Controller, Outcome};
use crate::{Pos, Stone};

/// AI computation state
pub enum AiState {
    Idle,
    /// Local move is ready once the pause has elapsed
    Pausing { ready_at: Instant, start_time: Instant },
    /// Waiting on the external advisor
    Consulting { task: AdvisorTask },
}

/// Session state: the controller plus who plays the computer side
pub struct GameState {
    pub game: Controller,
    pub ai_mode: AiMode,
    pub human_color: Stone,
    pub ai_state: AiState,
    pub last_ai_result: Option<MoveResult>,
    /// Advisor's reasoning for its last move
    pub analysis: Option<String>,
    pub message: Option<String>,
    pub move_timer: MoveTimer,
    pub zoom: f32,

    engine: AIEngine,
    advisor: Arc<dyn MoveAdvisor>,
    local_delay: Duration,
    advisor_timeout: Duration,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

impl GameState {
    pub fn new(settings: &Settings, advisor: Arc<dyn MoveAdvisor>) -> Self {
        let engine = match settings.seed {
            Some(seed) => AIEngine::with_seed(seed),
            None => AIEngine::new(),
        };

        Self {
            game: Controller::new(),
            ai_mode: settings.ai_mode,
            human_color: settings.human_color,
            ai_state: AiState::Idle,
            last_ai_result: None,
            analysis: None,
            message: None,
            move_timer: MoveTimer::default(),
            zoom: settings.zoom,
            engine,
            advisor,
            local_delay: settings.local_delay,
            advisor_timeout: settings.advisor_timeout,
        }
    }

    /// Start a new game, abandoning any pending AI request
    pub fn reset(&mut self) {
        self.game.new_game();
        self.ai_state = AiState::Idle;
        self.last_ai_result = None;
        self.analysis = None;
        self.message = None;
        self.move_timer = MoveTimer::default();
    }

    /// New game with the human on the other color
    pub fn switch_sides(&mut self, human_color: Stone) {
        self.human_color = human_color;
        self.reset();
    }

    pub fn is_human_turn(&self) -> bool {
        self.game.current_player() == self.human_color
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.game.is_over() && !self.is_human_turn()
    }

    pub fn is_ai_thinking(&self) -> bool {
        !matches!(self.ai_state, AiState::Idle)
    }

    /// Attempt to place the human's stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game.is_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.game.place(pos).map_err(|e| e.to_string())?;
        self.message = None;
        self.move_timer.start();
        Ok(())
    }

    /// Begin the AI's turn if it is due
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let now = Instant::now();
        self.analysis = None;

        self.ai_state = if self.ai_mode.is_local() {
            AiState::Pausing {
                ready_at: now + self.local_delay,
                start_time: now,
            }
        } else {
            let request = AdvisorRequest::new(
                *self.game.board(),
                self.game.current_player(),
                self.ai_mode.tag(),
            );
            AiState::Consulting {
                task: AdvisorTask::spawn(Arc::clone(&self.advisor), request, self.advisor_timeout),
            }
        };
        debug!(mode = %self.ai_mode, "AI turn started");
    }

    /// Check if the AI has finished thinking and play its move
    pub fn check_ai_result(&mut self) {
        let board = *self.game.board();
        let color = self.game.current_player();

        let result = match &self.ai_state {
            AiState::Idle => return,
            AiState::Pausing { ready_at, start_time } => {
                if Instant::now() < *ready_at {
                    return;
                }
                let mut result = self.engine.get_move_with_stats(&board, color);
                result.time_ms = start_time.elapsed().as_millis() as u64;
                result
            }
            AiState::Consulting { task } => {
                let Some(outcome) = task.poll() else {
                    return;
                };
                let elapsed = task.elapsed();
                self.engine.resolve_advice(&board, color, outcome, elapsed)
            }
        };

        self.ai_state = AiState::Idle;
        self.move_timer.set_ai_time(Duration::from_millis(result.time_ms));

        match result.best_move {
            Some(pos) => match self.game.place(pos) {
                Ok(_) => {
                    self.analysis = result.reasoning.clone();
                    self.move_timer.start();
                }
                Err(err) => {
                    warn!(error = %err, %pos, "AI produced an unplayable move");
                    self.message = Some(format!("AI error: {err}"));
                }
            },
            None => self.message = Some("AI could not find a move".to_string()),
        }
        self.last_ai_result = Some(result);
    }

    /// Take back the last human move and the AI reply to it
    pub fn undo(&mut self) {
        if self.is_ai_thinking() || self.game.history_len() == 0 {
            return;
        }
        self.game.undo(2);
        self.analysis = None;
        self.message = None;
        self.move_timer.start();
    }

    pub fn status_text(&self) -> String {
        match self.game.outcome() {
            Outcome::Won(stone) if stone == self.human_color => "You win!".to_string(),
            Outcome::Won(stone) => format!("{} wins", stone.name()),
            Outcome::Drawn => "Draw".to_string(),
            Outcome::InProgress if self.is_ai_thinking() => "AI thinking...".to_string(),
            Outcome::InProgress if self.is_human_turn() => "Your turn".to_string(),
            Outcome::InProgress => "AI to move".to_string(),
        }
    }
}
