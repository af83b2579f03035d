//! Placement rules - the single legality predicate behind movement, rotation and spawning.

use crate::board::Board;
use crate::pieces::{bitmap_offsets, get_shape, ActivePiece};
use crate::types::PieceKind;

/// Check whether `kind` in rotation state `rotation` fits with its bitmap's top-left at (x, y).
///
/// A block fails when its column is outside the board, its row is at or below
/// the bottom edge, or its board cell is occupied. Blocks above the top edge
/// (row < 0) are allowed.
pub fn can_place(board: &Board, kind: PieceKind, rotation: usize, x: i32, y: i32) -> bool {
    let width = board.width() as i32;
    let height = board.height() as i32;

    bitmap_offsets(get_shape(kind, rotation)).all(|(dx, dy)| {
        let col = x + dx;
        let row = y + dy;
        if col < 0 || col >= width || row >= height {
            return false;
        }
        row < 0 || board.is_empty(col, row)
    })
}

/// [`can_place`] for an existing piece value.
pub fn fits(board: &Board, piece: &ActivePiece) -> bool {
    can_place(board, piece.kind, piece.rotation, piece.x, piece.y)
}
