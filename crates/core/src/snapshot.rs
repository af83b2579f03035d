use crate::pieces::{ActivePiece, PieceCells};
use crate::types::{Cell, Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
    pub rotation: usize,
    pub color: Color,
    /// Board coordinates `(x, y)` of the piece's blocks; rows may be negative.
    pub cells: PieceCells,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            rotation: value.rotation,
            color: value.color(),
            cells: value.occupied_cells(),
        }
    }
}

/// Read-only view of a session for renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major locked cells, `width * height` entries.
    pub board: Vec<Cell>,
    /// `None` while the session is over.
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
    /// Score recorded when the last game ended, until the next restart.
    pub final_score: Option<u32>,
}

impl SessionSnapshot {
    pub fn empty(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            board: vec![None; width as usize * height as usize],
            active: None,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
            final_score: None,
        }
    }

    /// Locked cell at (x, y); out-of-range coordinates read as empty.
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }

    /// What a renderer should draw at (x, y): the active piece over the locked board.
    pub fn visible_cell(&self, x: i32, y: i32) -> Cell {
        if let Some(active) = &self.active {
            if active.cells.contains(&(x, y)) {
                return Some(active.color);
            }
        }
        self.cell(x, y)
    }

    /// False once the game is over; the board is frozen until the restart.
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::empty(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playable_until_game_over() {
        let mut snap = SessionSnapshot::default();
        assert!(snap.playable());
        snap.game_over = true;
        assert!(!snap.playable());
    }

    #[test]
    fn visible_cell_prefers_active_piece() {
        let mut snap = SessionSnapshot::empty(4, 4);
        snap.board[4 + 1] = Some(Color::Red);
        assert_eq!(snap.visible_cell(1, 1), Some(Color::Red));
        assert_eq!(snap.visible_cell(-1, 0), None);

        let piece = ActivePiece::spawn(PieceKind::O, 4);
        snap.active = Some(ActiveSnapshot::from(piece));
        assert_eq!(snap.visible_cell(1, 1), Some(Color::Yellow));
    }
}
