//! Active piece - the one currently falling

use blockfall_types::{PieceKind, BOARD_COLS};

use crate::catalog::{shape_of, ShapeMatrix};

/// The currently falling piece: kind, current rotation matrix, and the
/// playfield offset of the matrix's top-left corner.
///
/// Exactly one exists per session; it is replaced wholesale when a piece
/// locks, never recycled across spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    /// Row of the matrix's top-left corner; negative while staging above
    /// the visible playfield.
    pub row: i8,
    pub col: i8,
}

impl ActivePiece {
    /// Spawn a piece in its staging position above the visible playfield.
    ///
    /// Horizontally centered on the bounding box. I enters at row -1 (its
    /// occupied row sits one lower inside the 4x4 box), everything else at
    /// row -2, so every kind first shows up in the same visible row.
    pub fn spawn(kind: PieceKind) -> Self {
        let matrix = shape_of(kind);
        let half_width = (matrix.size() + 1) / 2;
        let col = (BOARD_COLS / 2) as i8 - half_width as i8;
        let row = if kind == PieceKind::I { -1 } else { -2 };
        Self {
            kind,
            matrix,
            row,
            col,
        }
    }
}
