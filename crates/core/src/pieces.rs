//! Pieces module - tetromino shape catalog and the active piece
//!
//! Every kind owns an ordered list of rotation states. A rotation state is a
//! bitmap of its own dimensions (rows x columns, 1 = occupied); states of one
//! kind do not share dimensions. Rotation simply steps through the list, there
//! are no wall kicks.

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind};

/// Rotation state bitmap, rows top to bottom.
pub type Bitmap = &'static [&'static [u8]];

/// Board coordinates `(x, y)` of the four blocks of a piece.
pub type PieceCells = ArrayVec<(i32, i32), 4>;

const I_STATES: &[Bitmap] = &[
    &[&[1, 1, 1, 1]],
    &[&[1], &[1], &[1], &[1]],
];

const J_STATES: &[Bitmap] = &[
    &[&[1, 0, 0], &[1, 1, 1]],
    &[&[1, 1], &[1, 0], &[1, 0]],
    &[&[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1], &[0, 1], &[1, 1]],
];

const L_STATES: &[Bitmap] = &[
    &[&[0, 0, 1], &[1, 1, 1]],
    &[&[1, 1], &[0, 1], &[0, 1]],
    &[&[1, 1, 1], &[1, 0, 0]],
    &[&[1, 0], &[1, 0], &[1, 1]],
];

const O_STATES: &[Bitmap] = &[&[&[1, 1], &[1, 1]]];

const S_STATES: &[Bitmap] = &[
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0], &[1, 1], &[0, 1]],
];

const T_STATES: &[Bitmap] = &[
    &[&[0, 1, 0], &[1, 1, 1]],
    &[&[1, 0], &[1, 1], &[1, 0]],
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1], &[1, 1], &[0, 1]],
];

const Z_STATES: &[Bitmap] = &[
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1], &[1, 1], &[1, 0]],
];

/// All rotation states of a kind, in rotation order.
pub fn rotation_states(kind: PieceKind) -> &'static [Bitmap] {
    match kind {
        PieceKind::I => I_STATES,
        PieceKind::J => J_STATES,
        PieceKind::L => L_STATES,
        PieceKind::O => O_STATES,
        PieceKind::S => S_STATES,
        PieceKind::T => T_STATES,
        PieceKind::Z => Z_STATES,
    }
}

/// Number of rotation states (1 for O, 2 for I/S/Z, 4 for J/L/T).
pub fn rotation_count(kind: PieceKind) -> usize {
    rotation_states(kind).len()
}

/// Get the bitmap for a kind and rotation index (index taken modulo the state count).
pub fn get_shape(kind: PieceKind, rotation: usize) -> Bitmap {
    let states = rotation_states(kind);
    states[rotation % states.len()]
}

/// Offsets `(dx, dy)` of every set bit in a bitmap.
pub fn bitmap_offsets(bitmap: Bitmap) -> impl Iterator<Item = (i32, i32)> {
    bitmap.iter().enumerate().flat_map(|(dy, row)| {
        row.iter()
            .enumerate()
            .filter(|(_, &bit)| bit == 1)
            .map(move |(dx, _)| (dx as i32, dy as i32))
    })
}

/// Spawn column: the board's center minus half the width of rotation state 0.
pub fn spawn_x(kind: PieceKind, board_width: u8) -> i32 {
    let columns = get_shape(kind, 0)[0].len() as i32;
    board_width as i32 / 2 - columns / 2
}

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Column of the bitmap's left edge
    pub x: i32,
    /// Row of the bitmap's top edge
    pub y: i32,
    /// Index into the kind's rotation states, always `< rotation_count(kind)`
    pub rotation: usize,
}

impl ActivePiece {
    /// Create a piece at the spawn position: centered, row 0, rotation 0
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        Self {
            kind,
            x: spawn_x(kind, board_width),
            y: 0,
            rotation: 0,
        }
    }

    pub fn shape(&self) -> Bitmap {
        get_shape(self.kind, self.rotation)
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Board coordinates of every occupied cell.
    pub fn occupied_cells(&self) -> PieceCells {
        bitmap_offsets(self.shape())
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Copy translated by `(dx, dy)`.
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy with the rotation index advanced by `steps` (negative steps go back).
    pub fn rotated(&self, steps: i32) -> Self {
        let count = rotation_count(self.kind) as i32;
        let rotation = (self.rotation as i32 + steps).rem_euclid(count) as usize;
        Self { rotation, ..*self }
    }
}
