//! Views: map kernel snapshots into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CodeBreakerSnapshot, TileMergeSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Digit, GameStatus, Tile, BOARD_SIZE, CODE_LENGTH, MAX_ATTEMPTS};

const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const DIM: CellStyle = CellStyle::fg(Rgb::new(120, 120, 120));
const TITLE: CellStyle = CellStyle::fg(Rgb::new(237, 194, 46)).bold();
const GOOD: CellStyle = CellStyle::fg(Rgb::new(88, 166, 255)).bold();
const BAD: CellStyle = CellStyle::fg(Rgb::new(255, 74, 74)).bold();

/// Format with thousands separators (`1234567` -> `1,234,567`)
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Background/foreground for a tile value
pub fn tile_style(value: Tile) -> CellStyle {
    let (bg, dark_text) = match value {
        0 => (Rgb::new(205, 193, 180), true),
        2 => (Rgb::new(238, 228, 218), true),
        4 => (Rgb::new(237, 224, 200), true),
        8 => (Rgb::new(242, 177, 121), false),
        16 => (Rgb::new(245, 149, 99), false),
        32 => (Rgb::new(246, 124, 95), false),
        64 => (Rgb::new(246, 94, 59), false),
        128 => (Rgb::new(237, 207, 114), false),
        256 => (Rgb::new(237, 204, 97), false),
        512 => (Rgb::new(237, 200, 80), false),
        1024 => (Rgb::new(237, 197, 63), false),
        2048 => (Rgb::new(237, 194, 46), false),
        _ => (Rgb::new(60, 58, 50), false),
    };
    let fg = if dark_text {
        Rgb::new(119, 110, 101)
    } else {
        Rgb::new(249, 246, 242)
    };
    CellStyle::fg(fg).with_bg(bg).bold()
}

/// Renders the 2048 game.
pub struct TileView {
    /// Tile width in terminal columns.
    cell_w: u16,
}

impl Default for TileView {
    fn default() -> Self {
        Self { cell_w: 7 }
    }
}

impl TileView {
    pub fn width(&self) -> u16 {
        (self.cell_w + 1) * BOARD_SIZE as u16 + 3
    }

    pub fn height(&self) -> u16 {
        BOARD_SIZE as u16 * 2 + 8
    }

    pub fn render(&self, snap: &TileMergeSnapshot, best: u64) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.width().max(48), self.height());
        self.render_into(snap, best, &mut fb);
        fb
    }

    pub fn render_into(&self, snap: &TileMergeSnapshot, best: u64, fb: &mut FrameBuffer) {
        fb.clear();
        fb.put_str(1, 0, "2048", TITLE);

        let x = fb.put_str(1, 1, "Score ", DIM);
        let x = fb.put_str(x, 1, &group_thousands(snap.score), TEXT);
        let x = fb.put_str(x + 2, 1, "Best ", DIM);
        let x = fb.put_str(x, 1, &group_thousands(best.max(snap.score)), TEXT);
        let x = fb.put_str(x + 2, 1, "Moves ", DIM);
        fb.put_str(x, 1, &snap.moves.to_string(), TEXT);

        let top = 3u16;
        for row in 0..BOARD_SIZE {
            let y = top + row as u16 * 2;
            for col in 0..BOARD_SIZE {
                let x = 1 + col as u16 * (self.cell_w + 1);
                let value = snap.grid[row][col];
                let style = tile_style(value);
                fb.fill_rect(x, y, self.cell_w, 1, style);
                if value != 0 {
                    let label = value.to_string();
                    let pad = self.cell_w.saturating_sub(label.len() as u16) / 2;
                    fb.put_str(x + pad, y, &label, style);
                }
            }
        }

        let status_y = top + BOARD_SIZE as u16 * 2;
        match (snap.status, snap.locked, snap.paused) {
            (GameStatus::Lost, _, _) => {
                fb.put_str(1, status_y, "Game over. No moves left, press r to try again.", BAD);
            }
            (GameStatus::Won, true, _) => {
                fb.put_str(1, status_y, "2048 reached! No moves left, r to restart.", GOOD);
            }
            (_, _, true) => {
                fb.put_str(1, status_y, "Paused. Press space to resume.", DIM);
            }
            (GameStatus::Won, false, false) => {
                fb.put_str(1, status_y, "Congratulations! You reached 2048!", GOOD);
            }
            (GameStatus::InProgress, _, false) => {}
        }

        fb.put_str(1, status_y + 2, "arrows/wasd/drag move  space pause", DIM);
        fb.put_str(1, status_y + 3, "r restart  q quit", DIM);
    }
}

/// Renders the Mastermind game.
#[derive(Default)]
pub struct CodeView;

impl CodeView {
    pub fn width(&self) -> u16 {
        48
    }

    pub fn height(&self) -> u16 {
        MAX_ATTEMPTS as u16 + 10
    }

    /// Render the game plus the guess being typed (`slots`, focused `cursor`)
    pub fn render(
        &self,
        snap: &CodeBreakerSnapshot,
        slots: &[Option<Digit>; CODE_LENGTH],
        cursor: usize,
        message: &str,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.width(), self.height());
        fb.put_str(1, 0, "Mastermind", TITLE);

        let attempt = snap.attempt_number.min(MAX_ATTEMPTS);
        fb.put_str(1, 1, &format!("Attempt {} of {}", attempt, MAX_ATTEMPTS), TEXT);

        for (i, record) in snap.history.iter().enumerate() {
            let y = 3 + i as u16;
            let x = fb.put_str(1, y, &format!("{:>2}. ", i + 1), DIM);
            let x = fb.put_str(x, y, &digits_text(&record.guess), TEXT);
            let x = fb.put_str(x + 2, y, &"●".repeat(record.feedback.exact as usize), TEXT);
            fb.put_str(x, y, &"○".repeat(record.feedback.partial as usize), TEXT);
        }

        let entry_y = 4 + MAX_ATTEMPTS as u16;
        if snap.playable() {
            let mut x = 1;
            for (i, slot) in slots.iter().enumerate() {
                let label = match slot {
                    Some(d) => format!("[{}]", d),
                    None => "[_]".to_string(),
                };
                let style = if i == cursor { TEXT.bold() } else { DIM };
                x = fb.put_str(x, entry_y, &label, style) + 1;
            }
        }

        let (line, style) = match (snap.status, snap.revealed_secret) {
            (GameStatus::Won, _) => ("Congratulations! You cracked the code!".to_string(), GOOD),
            (GameStatus::Lost, Some(secret)) => {
                (format!("Defeat! The code was: {}", digits_text(&secret)), BAD)
            }
            _ => (message.to_string(), TEXT),
        };
        fb.put_str(1, entry_y + 2, &line, style);

        let help = if snap.playable() {
            "0-9 type  backspace erase  enter check  q quit"
        } else {
            "r play again  q quit"
        };
        fb.put_str(1, entry_y + 4, help, DIM);
        fb
    }
}

fn digits_text(code: &[Digit; CODE_LENGTH]) -> String {
    code.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CodeBreaker, SimpleRng, TileMergeGame};

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn tile_view_shows_values_and_score() {
        let game = TileMergeGame::from_grid(
            [[2, 0, 0, 0], [0, 2048, 0, 0], [0; 4], [0; 4]],
            SimpleRng::new(1),
        )
        .unwrap();
        let fb = TileView::default().render(&game.snapshot(), 5120);
        let text = fb.to_text();
        assert!(text.contains("Score 0"));
        assert!(text.contains("Best 5,120"));
        assert!(text.contains("2048"));
        assert!(text.contains("Congratulations"));
    }

    #[test]
    fn tile_view_reports_loss() {
        let game = TileMergeGame::from_grid(
            [
                [2, 4, 2, 4],
                [4, 2, 4, 2],
                [2, 4, 2, 4],
                [4, 2, 4, 2],
            ],
            SimpleRng::new(1),
        )
        .unwrap();
        let text = TileView::default().render(&game.snapshot(), 0).to_text();
        assert!(text.contains("Game over"));
    }

    #[test]
    fn tile_view_reports_locked_win() {
        let game = TileMergeGame::from_grid(
            [
                [2048, 4, 2, 4],
                [4, 2, 4, 2],
                [2, 4, 2, 4],
                [4, 2, 4, 2],
            ],
            SimpleRng::new(1),
        )
        .unwrap();
        let snap = game.snapshot();
        assert_eq!(snap.status, GameStatus::Won);
        assert!(!snap.playable());

        let text = TileView::default().render(&snap, 0).to_text();
        assert!(text.contains("No moves left"));
        assert!(!text.contains("Congratulations"));
    }

    #[test]
    fn code_view_shows_history_and_entry() {
        let mut game = CodeBreaker::with_secret(&[1, 2, 3, 4], SimpleRng::new(1)).unwrap();
        game.score_guess(&[1, 3, 2, 5]).unwrap();

        let slots = [Some(4), None, None, None];
        let text = CodeView.render(&game.snapshot(), &slots, 1, "Enter 4 digits").to_text();
        assert!(text.contains("Attempt 2 of 10"));
        assert!(text.contains(" 1. 1 3 2 5  ●○○"));
        assert!(text.contains("[4] [_] [_] [_]"));
        assert!(text.contains("Enter 4 digits"));
    }

    #[test]
    fn code_view_reveals_secret_on_loss() {
        let mut game = CodeBreaker::with_secret(&[9, 8, 7, 6], SimpleRng::new(1)).unwrap();
        for _ in 0..MAX_ATTEMPTS {
            game.score_guess(&[0, 0, 0, 0]).unwrap();
        }
        let text = CodeView
            .render(&game.snapshot(), &[None; CODE_LENGTH], 0, "")
            .to_text();
        assert!(text.contains("Defeat! The code was: 9 8 7 6"));
        assert!(text.contains("Attempt 10 of 10"));
        assert!(text.contains("r play again"));
    }
}
