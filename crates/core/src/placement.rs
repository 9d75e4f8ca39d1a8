//! Placement engine - locking pieces and collapsing completed rows

use blockfall_types::BOARD_ROWS;

use crate::piece::ActivePiece;
use crate::playfield::Playfield;

/// Commit `piece` into `field` and collapse any completed rows.
///
/// Returns the number of rows cleared, or `None` when any set cell would
/// land above row 0 - the top-out condition. On top-out the field is left
/// byte-for-byte untouched.
pub fn lock(field: &mut Playfield, piece: &ActivePiece) -> Option<u32> {
    // Top-out check before any write.
    for (r, _) in piece.matrix.set_cells() {
        if piece.row + (r as i8) < 0 {
            return None;
        }
    }
    for (r, c) in piece.matrix.set_cells() {
        field.set(piece.row + r as i8, piece.col + c as i8, Some(piece.kind));
    }

    Some(clear_completed_rows(field))
}

/// Bottom-up sweep over the visible rows. A completed row triggers an
/// in-place downward shift and the scan index does NOT advance - the row
/// shifted in may itself be complete - so stacked completed rows collapse
/// in one pass.
fn clear_completed_rows(field: &mut Playfield) -> u32 {
    let mut cleared = 0;
    let mut row = BOARD_ROWS as i8 - 1;
    while row >= 0 {
        if field.is_row_complete(row) {
            field.shift_down_through(row);
            cleared += 1;
        } else {
            row -= 1;
        }
    }
    cleared
}
