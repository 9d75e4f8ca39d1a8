//! Playfield module - the locked-cell grid
//!
//! 10x20 visible cells plus 2 hidden staging rows above row 0, stored as a
//! flat row-major array for cache locality and zero allocation. Rows carry
//! signed indices: -2 and -1 address the hidden rows, 0..19 the visible
//! playfield, with row 0 at the top.
//!
//! Hidden rows stay empty for the whole life of a game: locking into them
//! is the top-out condition and never writes, and the line-clear shift
//! never moves them. Row 0 therefore comes out clear after a shift, because
//! it is refilled from hidden row -1.

use blockfall_types::{Cell, BOARD_COLS, BOARD_ROWS, HIDDEN_ROWS};

/// Rows actually stored, hidden rows included.
const STORED_ROWS: usize = BOARD_ROWS + HIDDEN_ROWS;

/// Total number of stored cells.
const GRID_SIZE: usize = STORED_ROWS * BOARD_COLS;

/// The playfield grid - 10 columns x 20 visible rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfield {
    /// Flat array of cells, row-major order ((row + HIDDEN_ROWS) * COLS + col)
    cells: [Cell; GRID_SIZE],
}

impl Playfield {
    /// Create a new empty playfield
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from signed (row, col) coordinates.
    /// Returns None outside the stored range (rows -2..20, cols 0..10).
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < -(HIDDEN_ROWS as i8)
            || row >= BOARD_ROWS as i8
            || col < 0
            || col >= BOARD_COLS as i8
        {
            return None;
        }
        Some((row + HIDDEN_ROWS as i8) as usize * BOARD_COLS + col as usize)
    }

    /// Playfield width in cells.
    pub fn cols(&self) -> usize {
        BOARD_COLS
    }

    /// Visible playfield height in cells.
    pub fn rows(&self) -> usize {
        BOARD_ROWS
    }

    /// Get cell at (row, col).
    /// Returns None if outside the stored range.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col).
    /// Returns false if outside the stored range.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within the stored range and holding a locked cell.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Every cell of a visible row is occupied. Hidden rows never qualify.
    pub fn is_row_complete(&self, row: i8) -> bool {
        if row < 0 {
            return false;
        }
        match Self::index(row, 0) {
            Some(start) => self.cells[start..start + BOARD_COLS]
                .iter()
                .all(|cell| cell.is_some()),
            None => false,
        }
    }

    /// Shift every row above `row` down one step, through `row` itself:
    /// row r receives row r-1 for r from `row` down to 0. Row 0 receives
    /// hidden row -1, which is empty by invariant, so the vacated top row
    /// comes out clear. Hidden rows themselves never move.
    pub fn shift_down_through(&mut self, row: i8) {
        if row < 0 || row >= BOARD_ROWS as i8 {
            return;
        }
        for r in (0..=row).rev() {
            if let (Some(src), Some(dst)) = (Self::index(r - 1, 0), Self::index(r, 0)) {
                self.cells.copy_within(src..src + BOARD_COLS, dst);
            }
        }
    }

    /// Encode the visible rows as u8: 0 for empty, `PieceKind::code()`
    /// otherwise. Writes into caller storage, no allocation.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_COLS]; BOARD_ROWS]) {
        for row in 0..BOARD_ROWS {
            let start = (row + HIDDEN_ROWS) * BOARD_COLS;
            for col in 0..BOARD_COLS {
                out[row][col] = match self.cells[start + col] {
                    Some(kind) => kind.code(),
                    None => 0,
                };
            }
        }
    }

    /// Get a reference to the internal cells array, hidden rows first.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}
