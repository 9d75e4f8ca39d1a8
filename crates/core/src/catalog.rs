//! Piece catalog - shape matrices, colors, and rotation
//!
//! Shapes are hand-authored binary matrices: I uses a 4x4 bounding box,
//! O a 2x2, the rest 3x3. A [`ShapeMatrix`] is always the base shape of a
//! kind or one of its four 90-degree-step rotations.

use blockfall_types::PieceKind;

/// Backing storage edge, sized for the largest bounding box (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square binary shape matrix with a fixed 4x4 backing store.
///
/// Only the leading `size` x `size` region is meaningful. Padding cells are
/// always zero, so whole-value comparison and hashing stay valid across
/// rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Bounding box edge length (2, 3, or 4).
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Value at local (row, col); 1 marks an occupied cell.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Iterate occupied cells as local (row, col) offsets.
    pub fn set_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |row| {
            (0..n).filter_map(move |col| (self.cells[row][col] != 0).then_some((row, col)))
        })
    }

    /// Clockwise quarter turn: `out[i][j] = self[N - j][i]` with `N = size - 1`.
    ///
    /// The pivot is fixed at the bounding box center; the position on the
    /// playfield does not change with the rotation.
    pub fn rotated(&self) -> Self {
        let n = self.size();
        let mut out = Self {
            size: self.size,
            cells: [[0; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
        };
        for i in 0..n {
            for j in 0..n {
                out.cells[i][j] = self.cells[n - 1 - j][i];
            }
        }
        out
    }
}

const I_SHAPE: ShapeMatrix = ShapeMatrix {
    size: 4,
    cells: [
        [0, 0, 0, 0],
        [1, 1, 1, 1],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

const J_SHAPE: ShapeMatrix = ShapeMatrix {
    size: 3,
    cells: [
        [1, 0, 0, 0],
        [1, 1, 1, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

const L_SHAPE: ShapeMatrix = ShapeMatrix {
    size: 3,
    cells: [
        [0, 0, 1, 0],
        [1, 1, 1, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

const O_SHAPE: ShapeMatrix = ShapeMatrix {
    size: 2,
    cells: [
        [1, 1, 0, 0],
        [1, 1, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

const S_SHAPE: ShapeMatrix = ShapeMatrix {
    size: 3,
    cells: [
        [0, 1, 1, 0],
        [1, 1, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

const T_SHAPE: ShapeMatrix = ShapeMatrix {
    size: 3,
    cells: [
        [0, 1, 0, 0],
        [1, 1, 1, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

const Z_SHAPE: ShapeMatrix = ShapeMatrix {
    size: 3,
    cells: [
        [1, 1, 0, 0],
        [0, 1, 1, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
};

/// Base shape matrix for a piece kind.
pub fn shape_of(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Display color key for a piece kind.
pub fn color_of(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::I => "cyan",
        PieceKind::J => "blue",
        PieceKind::L => "orange",
        PieceKind::O => "yellow",
        PieceKind::S => "green",
        PieceKind::T => "purple",
        PieceKind::Z => "red",
    }
}
