//! Collision validation - pure bounds and occupancy predicate

use blockfall_types::{BOARD_COLS, BOARD_ROWS};

use crate::catalog::ShapeMatrix;
use crate::playfield::Playfield;

/// True when every set cell of `matrix`, placed with its top-left corner at
/// (row, col), stays inside the side and bottom walls and overlaps nothing.
///
/// Cells above row 0 are exempt from the occupancy test - the hidden
/// staging rows hold nothing by invariant - but still respect the column
/// walls. A single violation short-circuits to false.
pub fn is_valid_move(matrix: &ShapeMatrix, row: i8, col: i8, field: &Playfield) -> bool {
    for (r, c) in matrix.set_cells() {
        let cell_row = row + r as i8;
        let cell_col = col + c as i8;
        if cell_col < 0 || cell_col >= BOARD_COLS as i8 || cell_row >= BOARD_ROWS as i8 {
            return false;
        }
        if cell_row >= 0 && field.is_occupied(cell_row, cell_col) {
            return false;
        }
    }
    true
}
