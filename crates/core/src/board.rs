//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! color of a locked block. Cells live in one flat row-major buffer; line clears
//! are block moves of whole rows inside that buffer.
//!
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom, row 0 at the top).

use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff (x, y) is inside the board and unoccupied.
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Lock cells onto the board with the given color.
    ///
    /// Every cell must be in bounds and empty. The whole set is validated first;
    /// on failure nothing is written and `false` is returned.
    pub fn lock(&mut self, cells: &[(i32, i32)], color: Color) -> bool {
        if !cells.iter().all(|&(x, y)| self.is_empty(x, y)) {
            return false;
        }
        for &(x, y) in cells {
            self.set(x, y, Some(color));
        }
        true
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Scans bottom to top keeping a write cursor: surviving rows are copied down
    /// to the cursor, full rows are skipped, and the rows left above the cursor
    /// are blanked. Rows below the cursor are never revisited, so stacked and
    /// non-contiguous full rows are all removed in one pass.
    pub fn clear_completed_lines(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut cleared = 0;

        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i32, color: Color) {
        for x in 0..board.width() as i32 {
            board.set(x, y, Some(color));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_is_empty_respects_bounds() {
        let mut board = Board::new(4, 3);
        assert!(board.is_empty(0, 0));
        assert!(board.is_empty(3, 2));
        assert!(!board.is_empty(4, 0));
        assert!(!board.is_empty(0, -1));

        board.set(1, 1, Some(Color::Red));
        assert!(!board.is_empty(1, 1));
    }

    #[test]
    fn test_lock_is_all_or_nothing() {
        let mut board = Board::default();
        board.set(5, 5, Some(Color::Blue));

        // Second cell overlaps: nothing is written.
        assert!(!board.lock(&[(4, 5), (5, 5)], Color::Red));
        assert_eq!(board.get(4, 5), Some(None));

        assert!(board.lock(&[(4, 5), (4, 6)], Color::Red));
        assert_eq!(board.get(4, 5), Some(Some(Color::Red)));
        assert_eq!(board.get(4, 6), Some(Some(Color::Red)));
    }

    #[test]
    fn test_clear_non_contiguous_rows() {
        let mut board = Board::new(3, 5);
        fill_row(&mut board, 4, Color::Cyan);
        board.set(0, 3, Some(Color::Red));
        fill_row(&mut board, 2, Color::Cyan);
        board.set(2, 1, Some(Color::Green));

        assert_eq!(board.clear_completed_lines(), 2);

        // Surviving rows keep their order and sink to the bottom.
        assert_eq!(board.row(4), Some(&[Some(Color::Red), None, None][..]));
        assert_eq!(board.row(3), Some(&[None, None, Some(Color::Green)][..]));
        assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
        assert!(board.row(2).unwrap().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_clear_whole_board() {
        let mut board = Board::new(2, 3);
        for y in 0..3 {
            fill_row(&mut board, y, Color::Yellow);
        }
        assert_eq!(board.clear_completed_lines(), 3);
        assert!(board.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_rows_iterates_top_to_bottom() {
        let mut board = Board::new(2, 2);
        board.set(1, 1, Some(Color::Orange));
        let rows: Vec<&[Cell]> = board.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1], Some(Color::Orange));
    }
}
