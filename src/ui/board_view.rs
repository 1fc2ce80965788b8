//! Board rendering for the GUI

use crate::{Board, Player, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked position, if any.
    ///
    /// Every click on a grid point is reported; deciding whether it is a
    /// legal move is left to the game state.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        to_move: Player,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(2.0 * BOARD_MARGIN + 1.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));

        // Preview only where a mark could actually go
        if let Some(pos) = hovered {
            if winning_line.is_none() && board.is_empty(pos) {
                self.draw_hover_preview(&painter, pos, to_move);
            }
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (A-O across, 0-14 down, matching cell indices)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..BOARD_SIZE {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;

            let pos = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
        }

        for row in 0..BOARD_SIZE {
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;

            let pos = Pos2::new(self.board_rect.min.x + 12.0, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, row.to_string(), font.clone(), GRID_LINE);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (pos, player) in board.marks() {
            self.draw_mark(painter, pos, player);
        }
    }

    /// Draw a single mark: dark stone for X, light stone for O
    fn draw_mark(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARK_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match player {
            Player::X => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, X_MARK);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, X_MARK_HIGHLIGHT);
            }
            Player::O => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, O_MARK);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, O_MARK_SHADOW));
            }
        }

        let label_color = match player {
            Player::X => O_MARK,
            Player::O => X_MARK,
        };
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            player.to_string(),
            egui::FontId::proportional(radius),
            label_color,
        );
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos) + Vec2::new(self.cell_size * 0.3, -self.cell_size * 0.3);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in line {
            let center = self.board_to_screen(*pos);
            let radius = self.cell_size * MARK_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, to_move: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARK_RADIUS_RATIO;

        let color = match to_move {
            Player::X => HOVER_PREVIEW_X,
            Player::O => HOVER_PREVIEW_O,
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col() as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row() as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 30.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(2.0 * BOARD_MARGIN + 14.0 * 30.0)),
        }
    }

    #[test]
    fn test_screen_board_roundtrip_corners() {
        let view = view();
        for pos in [Pos::new(0, 0), Pos::new(0, 14), Pos::new(14, 0), Pos::new(7, 9)] {
            assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        }
    }

    #[test]
    fn test_screen_to_board_snaps_to_nearest_point() {
        let view = view();
        let near = view.board_to_screen(Pos::new(3, 4)) + Vec2::new(12.0, -12.0);
        assert_eq!(view.screen_to_board(near), Some(Pos::new(3, 4)));
    }

    #[test]
    fn test_screen_to_board_outside() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(1.0, 1.0)), None);
        let past_edge = view.board_to_screen(Pos::new(14, 14)) + Vec2::new(20.0, 0.0);
        assert_eq!(view.screen_to_board(past_edge), None);
    }
}
