//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Color;

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Top-left corner and size of the bordered playfield, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for the playfield and score panel.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Where the playfield frame lands for `snap` in `viewport` (centered).
    pub fn layout(&self, snap: &SessionSnapshot, viewport: Viewport) -> Layout {
        let frame_w = snap.width as u16 * self.cell_w + 2;
        let frame_h = snap.height as u16 * self.cell_h + 2;
        Layout {
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        draw_border(fb, layout, border);

        for y in 0..snap.height as i32 {
            for x in 0..snap.width as i32 {
                match snap.visible_cell(x, y) {
                    Some(color) => self.draw_block(fb, layout, x as u16, y as u16, color),
                    None => self.draw_empty(fb, layout, x as u16, y as u16),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        if !snap.playable() {
            draw_game_over(fb, layout, snap.final_score.unwrap_or(snap.score));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        self.fill_cell_rect(fb, layout, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, y: u16, color: Color) {
        let style = CellStyle::new(color_rgb(color), PLAYFIELD_BG).bold();
        self.fill_cell_rect(fb, layout, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.frame_x + 1 + cell_x * self.cell_w;
        let py = layout.frame_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout
            .frame_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = layout.frame_y;
        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        let help = value.dim();
        for line in ["←→↓ move", "↑ rotate", "q quit"] {
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }
}

/// Terminal color for a block color.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Magenta => Rgb::new(200, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: Layout, style: CellStyle) {
    let Layout {
        frame_x: x,
        frame_y: y,
        frame_w: w,
        frame_h: h,
    } = layout;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// "GAME OVER" centered on the playfield with the final score below it.
fn draw_game_over(fb: &mut FrameBuffer, layout: Layout, final_score: u32) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);

    let title = "GAME OVER";
    let title_x = centered_x(layout, title.chars().count() as u16);
    fb.put_str(title_x, mid_y, title, style);

    let digits = final_score.checked_ilog10().unwrap_or(0) as u16 + 1;
    let score_x = centered_x(layout, 6 + digits);
    let score_y = mid_y.saturating_add(1);
    fb.put_str(score_x, score_y, "SCORE ", style);
    fb.put_u32(score_x.saturating_add(6), score_y, final_score, style);
}

fn centered_x(layout: Layout, text_w: u16) -> u16 {
    layout
        .frame_x
        .saturating_add(layout.frame_w.saturating_sub(text_w) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PieceKind;
    use crate::core::{PieceGenerator, Session, SessionConfig};

    fn find_text(fb: &FrameBuffer, needle: &str) -> Option<(u16, u16)> {
        (0..fb.height()).find_map(|y| {
            fb.row_text(y)
                .find(needle)
                .map(|byte_idx| (fb.row_text(y)[..byte_idx].chars().count() as u16, y))
        })
    }

    #[test]
    fn layout_is_centered() {
        let view = GameView::default();
        let snap = SessionSnapshot::default();
        let layout = view.layout(&snap, Viewport::new(80, 24));
        assert_eq!(layout.frame_w, 22);
        assert_eq!(layout.frame_h, 22);
        assert_eq!(layout.frame_x, 29);
        assert_eq!(layout.frame_y, 1);
    }

    #[test]
    fn renders_active_piece_two_columns_per_cell() {
        let session = Session::with_generator(
            SessionConfig::default(),
            PieceGenerator::sequence([PieceKind::O]),
        );
        let snap = session.snapshot();
        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(80, 24));
        let layout = view.layout(&snap, Viewport::new(80, 24));

        // O at column 4, row 0.
        let px = layout.frame_x + 1 + 4 * 2;
        let py = layout.frame_y + 1;
        for dx in 0..4 {
            let cell = fb.get(px + dx, py).unwrap();
            assert_eq!(cell.ch, '█');
            assert_eq!(cell.style.fg, color_rgb(Color::Yellow));
        }
        assert_eq!(fb.get(px - 1, py).unwrap().ch, '·');
    }

    #[test]
    fn side_panel_shows_counters() {
        let mut snap = SessionSnapshot::default();
        snap.score = 1200;
        snap.level = 3;
        snap.lines = 12;
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));

        let (x, y) = find_text(&fb, "SCORE").unwrap();
        assert!(fb.row_text(y + 1)[..].contains("1200"));
        assert!(find_text(&fb, "LEVEL").is_some());
        assert!(find_text(&fb, "LINES").is_some());
        assert!(x > 50);
    }

    #[test]
    fn game_over_overlay_shows_final_score() {
        let mut snap = SessionSnapshot::default();
        snap.game_over = true;
        snap.final_score = Some(300);
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));

        let (_, y) = find_text(&fb, "GAME OVER").unwrap();
        assert!(fb.row_text(y + 1).contains("SCORE 300"));
    }

    #[test]
    fn running_session_has_no_overlay() {
        let snap = SessionSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        assert!(find_text(&fb, "GAME OVER").is_none());
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = SessionSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
