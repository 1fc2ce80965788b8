//! Main application for the GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel};

use crate::game::{move_label, GameState};
use crate::Player;
use super::board_view::BoardView;
use super::theme::*;

/// Main application: one game plus its board view
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self::with_state(GameState::new())
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self::with_state(state)
    }

    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn new_game(&mut self) {
        tracing::info!("New game");
        self.state = GameState::new();
    }

    /// Step the pointer one snapshot back or forward
    fn step(&mut self, forward: bool) {
        let pointer = self.state.pointer();
        let target = if forward {
            pointer + 1
        } else {
            match pointer.checked_sub(1) {
                Some(target) => target,
                None => return,
            }
        };
        if target < self.state.history_length() {
            self.state.jump_to(target);
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Back (←)").clicked() {
                        self.step(false);
                        ui.close_menu();
                    }
                    if ui.button("Forward (→)").clicked() {
                        self.step(true);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "Move {} of {}",
                        self.state.pointer(),
                        self.state.history_length() - 1
                    ));
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(8.0);
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_history_card(ui);
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Status line: winner or next player
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = if self.state.current_winner().is_won() {
                WIN_HIGHLIGHT
            } else {
                match self.state.current_player_to_move() {
                    Player::X => TEXT_PRIMARY,
                    Player::O => STATUS_PLAYING,
                }
            };
            ui.label(RichText::new(self.state.status_line()).size(18.0).strong().color(color));
        });
    }

    /// One button per recorded snapshot
    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;

        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("HISTORY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
                for n in 0..self.state.history_length() {
                    let current = n == self.state.pointer();
                    let text = RichText::new(format!("{}. {}", n + 1, move_label(n))).size(12.0);
                    let text = if current {
                        text.strong().color(TEXT_PRIMARY)
                    } else {
                        text.color(TEXT_SECONDARY)
                    };

                    let button = egui::Button::new(text).fill(if current { CARD_ACTIVE } else { CARD_BG });
                    if ui.add(button).clicked() {
                        clicked = Some(n);
                    }
                }
            });
        });

        if let Some(n) = clicked {
            self.state.jump_to(n);
        }
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let snapshot = self.state.current_snapshot().clone();
            let winning_line = self.state.winning_line();
            let last_move = self.state.last_move().map(|(pos, _)| pos);

            let clicked = self.board_view.show(
                ui,
                &snapshot,
                self.state.current_player_to_move(),
                last_move,
                winning_line.as_ref().map(|line| line.positions.as_slice()),
            );

            if let Some(pos) = clicked {
                self.state.apply_move(pos.to_index());
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, back, forward) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });

        if new_game {
            self.new_game();
        }
        if back {
            self.step(false);
        }
        if forward {
            self.step(true);
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_inside_history() {
        let mut app = GomokuApp::default();
        app.step(false);
        assert_eq!(app.state().pointer(), 0);

        app.state.apply_move(0);
        app.state.apply_move(1);
        app.step(false);
        assert_eq!(app.state().pointer(), 1);
        app.step(true);
        app.step(true);
        assert_eq!(app.state().pointer(), 2);
        assert_eq!(app.state().history_length(), 3);
    }

    #[test]
    fn test_new_game_resets() {
        let mut state = GameState::new();
        state.apply_move(10);
        let mut app = GomokuApp::with_state(state);
        app.new_game();
        assert_eq!(app.state(), &GameState::new());
    }
}
