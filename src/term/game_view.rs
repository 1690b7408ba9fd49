//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::GameSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, Position};

const BORDER_TOP_LEFT: char = '┌';
const BORDER_TOP_RIGHT: char = '┐';
const BORDER_BOTTOM_LEFT: char = '└';
const BORDER_BOTTOM_RIGHT: char = '┘';
const BORDER_HORIZONTAL: char = '─';
const BORDER_VERTICAL: char = '│';

const SNAKE_HEAD_CHAR: char = '●';
const SNAKE_BODY_CHAR: char = '○';
const FOOD_CHAR: char = '★';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view for the Snake game.
///
/// One board cell maps to one terminal cell; the board is centered in the
/// viewport with the score/help lines directly underneath.
pub struct GameView {
    border: CellStyle,
    snake_body: CellStyle,
    snake_head: CellStyle,
    food: CellStyle,
    text: CellStyle,
    overlay: CellStyle,
    warning: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            border: CellStyle::plain(Rgb::new(160, 160, 160)),
            snake_body: CellStyle::plain(Rgb::new(100, 220, 120)),
            snake_head: CellStyle::bold(Rgb::new(140, 255, 160)),
            food: CellStyle::bold(Rgb::new(240, 200, 80)),
            text: CellStyle::plain(Rgb::new(200, 200, 200)),
            overlay: CellStyle::bold(Rgb::new(255, 255, 255)),
            warning: CellStyle::plain(Rgb::new(220, 120, 80)),
        }
    }
}

impl GameView {
    /// Render one full frame.
    ///
    /// All three statuses produce a frame; Paused and GameOver add an overlay
    /// line across the board. `input_warning` surfaces a degraded input
    /// source without interrupting play.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        input_warning: bool,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_w = snap.width.max(0) as u16;
        let board_h = snap.height.max(0) as u16;
        // HUD: one blank line, score, controls.
        let total_h = board_h + 3;

        let start_x = viewport.width.saturating_sub(board_w) / 2;
        let start_y = viewport.height.saturating_sub(total_h) / 2;

        self.draw_border(&mut fb, start_x, start_y, board_w, board_h);
        self.draw_entities(&mut fb, snap, start_x, start_y);
        self.draw_hud(&mut fb, snap, start_x, start_y + board_h + 1, input_warning);

        match snap.status {
            GameStatus::Running => {}
            GameStatus::Paused => {
                self.draw_overlay(&mut fb, start_x, start_y, board_w, board_h, "PAUSED - press P to resume");
            }
            GameStatus::GameOver => {
                self.draw_overlay(&mut fb, start_x, start_y, board_w, board_h, "GAME OVER - press R to restart");
            }
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, BORDER_TOP_LEFT, self.border);
        fb.put_char(x + w - 1, y, BORDER_TOP_RIGHT, self.border);
        fb.put_char(x, y + h - 1, BORDER_BOTTOM_LEFT, self.border);
        fb.put_char(x + w - 1, y + h - 1, BORDER_BOTTOM_RIGHT, self.border);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, BORDER_HORIZONTAL, self.border);
            fb.put_char(x + dx, y + h - 1, BORDER_HORIZONTAL, self.border);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, BORDER_VERTICAL, self.border);
            fb.put_char(x + w - 1, y + dy, BORDER_VERTICAL, self.border);
        }
    }

    fn draw_entities(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, start_x: u16, start_y: u16) {
        let put = |fb: &mut FrameBuffer, pos: Position, ch: char, style: CellStyle| {
            if pos.x < 0 || pos.y < 0 {
                return;
            }
            fb.put_char(
                start_x + pos.x as u16,
                start_y + pos.y as u16,
                ch,
                style,
            );
        };

        put(fb, snap.food, FOOD_CHAR, self.food);

        // Tail first so the head glyph wins if the board is in a transient
        // overlapping state (it never is after a committed tick).
        for (i, &pos) in snap.snake.iter().enumerate().rev() {
            if i == 0 {
                put(fb, pos, SNAKE_HEAD_CHAR, self.snake_head);
            } else {
                put(fb, pos, SNAKE_BODY_CHAR, self.snake_body);
            }
        }
    }

    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        y: u16,
        input_warning: bool,
    ) {
        fb.put_str(start_x, y, &format!("Score: {}", snap.score), self.text);
        fb.put_str(
            start_x,
            y + 1,
            "Arrows/WASD move  P pause  Q quit",
            self.text,
        );
        if input_warning {
            fb.put_str(start_x, y + 2, "warning: input device not responding", self.warning);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let mid_y = y + h / 2;
        let text_w = text.chars().count() as u16;
        let text_x = x + w.saturating_sub(text_w) / 2;
        fb.put_str(text_x, mid_y, text, self.overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn snapshot_10x8() -> GameSnapshot {
        GameSnapshot {
            width: 10,
            height: 8,
            snake: vec![
                Position::new(5, 4),
                Position::new(4, 4),
                Position::new(3, 4),
            ],
            food: Position::new(7, 2),
            direction: Direction::Right,
            score: 20,
            status: GameStatus::Running,
            episode_id: 0,
            tick_count: 12,
        }
    }

    /// Viewport exactly as tall as board + HUD, so start_x = start_y = 0.
    fn viewport() -> Viewport {
        Viewport::new(10, 11)
    }

    #[test]
    fn border_frames_the_board() {
        let fb = GameView::default().render(&snapshot_10x8(), viewport(), false);

        assert_eq!(fb.get(0, 0).unwrap().ch, BORDER_TOP_LEFT);
        assert_eq!(fb.get(9, 0).unwrap().ch, BORDER_TOP_RIGHT);
        assert_eq!(fb.get(0, 7).unwrap().ch, BORDER_BOTTOM_LEFT);
        assert_eq!(fb.get(9, 7).unwrap().ch, BORDER_BOTTOM_RIGHT);
        assert_eq!(fb.get(4, 0).unwrap().ch, BORDER_HORIZONTAL);
        assert_eq!(fb.get(0, 3).unwrap().ch, BORDER_VERTICAL);
    }

    #[test]
    fn snake_and_food_glyphs_land_on_their_cells() {
        let fb = GameView::default().render(&snapshot_10x8(), viewport(), false);

        assert_eq!(fb.get(5, 4).unwrap().ch, SNAKE_HEAD_CHAR);
        assert_eq!(fb.get(4, 4).unwrap().ch, SNAKE_BODY_CHAR);
        assert_eq!(fb.get(3, 4).unwrap().ch, SNAKE_BODY_CHAR);
        assert_eq!(fb.get(7, 2).unwrap().ch, FOOD_CHAR);
    }

    #[test]
    fn hud_shows_the_score() {
        let fb = GameView::default().render(&snapshot_10x8(), viewport(), false);
        assert!(fb.row_text(9).contains("Score: 20"));
    }

    #[test]
    fn paused_and_game_over_frames_carry_overlays() {
        let view = GameView::default();
        let mut snap = snapshot_10x8();
        // Overlay is wider than the board; widen the viewport so the text
        // survives clipping.
        let wide = Viewport::new(40, 11);

        snap.status = GameStatus::Paused;
        let fb = view.render(&snap, wide, false);
        let overlay_row = fb.row_text(4);
        assert!(overlay_row.contains("PAUSED"), "{:?}", overlay_row);

        snap.status = GameStatus::GameOver;
        let fb = view.render(&snap, wide, false);
        let overlay_row = fb.row_text(4);
        assert!(overlay_row.contains("GAME OVER"), "{:?}", overlay_row);
    }

    #[test]
    fn running_frame_has_no_overlay() {
        let fb = GameView::default().render(&snapshot_10x8(), Viewport::new(40, 11), false);
        for y in 0..11 {
            let row = fb.row_text(y);
            assert!(!row.contains("PAUSED"));
            assert!(!row.contains("GAME OVER"));
        }
    }

    #[test]
    fn input_warning_line_appears_when_raised() {
        let view = GameView::default();
        let snap = snapshot_10x8();
        let wide = Viewport::new(50, 12);

        let without = view.render(&snap, wide, false);
        let with = view.render(&snap, wide, true);

        let all_rows = |fb: &FrameBuffer| -> String {
            (0..fb.height()).map(|y| fb.row_text(y)).collect()
        };
        assert!(!all_rows(&without).contains("warning"));
        assert!(all_rows(&with).contains("warning: input device"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let fb = GameView::default().render(&snapshot_10x8(), Viewport::new(4, 3), false);
        assert_eq!(fb.width(), 4);
        assert_eq!(fb.height(), 3);
    }
}
