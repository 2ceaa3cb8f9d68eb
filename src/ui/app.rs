//! Main application for the Gomoku GUI

use std::sync::Arc;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::{BoardScene, BoardView};
use super::game_state::GameState;
use super::theme::*;
use crate::advisor::MoveAdvisor;
use crate::config::{AiMode, Settings};
use crate::engine::MoveSource;
use crate::game::Outcome;
use crate::Stone;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: &Settings, advisor: Arc<dyn MoveAdvisor>) -> Self {
        Self {
            state: GameState::new(settings, advisor),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (play Black)").clicked() {
                        self.state.switch_sides(Stone::Black);
                        ui.close_menu();
                    }
                    if ui.button("New Game (play White)").clicked() {
                        self.state.switch_sides(Stone::White);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} - You: {}",
                        self.state.ai_mode.label(),
                        self.state.human_color.name()
                    ));
                });
            });
        });
    }

    /// Render the side panel with controls and game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new("five in a row").size(11.0).color(TEXT_MUTED));
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_controls_card(ui);

                if let Some(analysis) = &self.state.analysis {
                    ui.add_space(10.0);
                    Self::render_analysis_card(ui, analysis);
                }

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    ui.label(RichText::new(format!("⚠ {msg}")).size(11.0).color(STATUS_BUSY));
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.game.current_player();
            let (symbol, accent) = match turn {
                Stone::White => ("○", WHITE_STONE),
                _ => ("●", BLACK_STONE_HIGHLIGHT),
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(symbol).size(28.0).color(accent));
                ui.vertical(|ui| {
                    ui.label(RichText::new(turn.name().to_uppercase()).size(16.0).strong().color(TEXT_PRIMARY));
                    let color = if self.state.is_ai_thinking() { STATUS_BUSY } else { STATUS_OK };
                    ui.label(RichText::new(self.state.status_text()).size(12.0).color(color));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "Move #{}  ·  {:.1}s",
                    self.state.game.moves().len(),
                    self.state.move_timer.elapsed().as_secs_f32()
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    /// Opponent selector, zoom, undo and new game
    fn render_controls_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("OPPONENT").size(10.0).color(TEXT_MUTED));

            let thinking = self.state.is_ai_thinking();
            ui.add_enabled_ui(!thinking, |ui| {
                egui::ComboBox::from_id_salt("ai_mode")
                    .selected_text(self.state.ai_mode.label())
                    .show_ui(ui, |ui| {
                        for mode in AiMode::ALL {
                            ui.selectable_value(&mut self.state.ai_mode, mode, mode.label());
                        }
                    });
            });

            ui.add_space(8.0);
            ui.add(egui::Slider::new(&mut self.state.zoom, ZOOM_RANGE).text("Zoom"));

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.add_enabled(!thinking, egui::Button::new("↩ Undo")).clicked() {
                    self.state.undo();
                }
                if ui.button("🔄 New Game").clicked() {
                    self.state.reset();
                }
            });
        });
    }

    fn render_analysis_card(ui: &mut egui::Ui, analysis: &str) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MODEL ANALYSIS").size(10.0).color(TEXT_MUTED));
            ui.add_space(4.0);
            ui.label(RichText::new(analysis).size(11.0).color(TEXT_PRIMARY));
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            let source = match result.source {
                MoveSource::Opening => "Opening",
                MoveSource::Heuristic => "Heuristic",
                MoveSource::Model => "Model",
                MoveSource::Fallback => "Fallback",
            };
            ui.label(RichText::new(source).size(11.0).strong().color(STATUS_OK));
            ui.label(
                RichText::new(format!(
                    "Score {}  ·  {} candidates  ·  {}ms",
                    result.score, result.candidates, result.time_ms
                ))
                .size(10.0)
                .color(TEXT_SECONDARY),
            );
            if let Some(pos) = result.best_move {
                ui.label(RichText::new(format!("→ {pos}")).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
            if let Some(reason) = &result.fallback_reason {
                ui.label(RichText::new(reason).size(10.0).color(TEXT_MUTED));
            }
        });
    }

    /// Render the board and the game-over banner
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            if let Outcome::Won(_) | Outcome::Drawn = self.state.game.outcome() {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.state.status_text()).size(24.0).strong().color(WIN_HIGHLIGHT));
                    if ui.button("Play Again").clicked() {
                        self.state.reset();
                    }
                });
            }

            let scene = BoardScene {
                board: self.state.game.board(),
                current_turn: self.state.game.current_player(),
                last_move: self.state.game.last_move().map(|m| m.pos),
                winning_line: self.state.game.winning_line(),
                interactive: !self.state.game.is_over() && !self.state.is_ai_thinking(),
                zoom: self.state.zoom,
            };
            let clicked = self.board_view.show(ui, &scene);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
