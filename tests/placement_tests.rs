//! Placement tests - locking, line clears, and the top-out condition

use blockfall::core::placement::lock;
use blockfall::core::{shape_of, ActivePiece, Playfield};
use blockfall::types::PieceKind;

fn piece_at(kind: PieceKind, row: i8, col: i8) -> ActivePiece {
    ActivePiece {
        kind,
        matrix: shape_of(kind),
        row,
        col,
    }
}

fn fill_row_except(field: &mut Playfield, row: i8, open: &[i8]) {
    for col in 0..10 {
        if !open.contains(&col) {
            field.set(row, col, Some(PieceKind::I));
        }
    }
}

#[test]
fn test_lock_writes_every_set_cell() {
    let mut field = Playfield::new();
    let piece = piece_at(PieceKind::T, 17, 3);
    assert_eq!(lock(&mut field, &piece), Some(0));

    assert_eq!(field.get(17, 4), Some(Some(PieceKind::T)));
    assert_eq!(field.get(18, 3), Some(Some(PieceKind::T)));
    assert_eq!(field.get(18, 4), Some(Some(PieceKind::T)));
    assert_eq!(field.get(18, 5), Some(Some(PieceKind::T)));
    // Empty cells of the bounding box stay empty.
    assert_eq!(field.get(17, 3), Some(None));
    assert_eq!(field.get(17, 5), Some(None));
}

#[test]
fn test_single_clear_exact_board() {
    let mut field = Playfield::new();
    fill_row_except(&mut field, 19, &[0, 1]);
    // A landmark two rows up, to watch the shift move it.
    field.set(17, 9, Some(PieceKind::Z));

    assert_eq!(lock(&mut field, &piece_at(PieceKind::O, 18, 0)), Some(1));

    // Cell-by-cell: row 19 is the former row 18 (the O's top half), row 18
    // is the former row 17 (the landmark), everything above is empty.
    for col in 0..10 {
        let bottom = if col < 2 { Some(PieceKind::O) } else { None };
        assert_eq!(field.get(19, col), Some(bottom), "row 19 col {}", col);

        let above = if col == 9 { Some(PieceKind::Z) } else { None };
        assert_eq!(field.get(18, col), Some(above), "row 18 col {}", col);
    }
    for row in 0..18 {
        for col in 0..10 {
            assert_eq!(field.get(row, col), Some(None), "({}, {})", row, col);
        }
    }
}

#[test]
fn test_double_clear_shifts_by_two() {
    let mut field = Playfield::new();
    fill_row_except(&mut field, 18, &[0, 1]);
    fill_row_except(&mut field, 19, &[0, 1]);
    field.set(16, 4, Some(PieceKind::S));
    field.set(17, 4, Some(PieceKind::S));

    assert_eq!(lock(&mut field, &piece_at(PieceKind::O, 18, 0)), Some(2));

    // The two-cell landmark dropped by two rows; nothing else remains.
    for row in 0..20 {
        for col in 0..10 {
            let expected = if col == 4 && (row == 18 || row == 19) {
                Some(PieceKind::S)
            } else {
                None
            };
            assert_eq!(field.get(row, col), Some(expected), "({}, {})", row, col);
        }
    }
}

#[test]
fn test_separated_double_clear_collapses_in_one_pass() {
    let mut field = Playfield::new();
    // Complete rows 17 and 19, with a partial row between them.
    fill_row_except(&mut field, 17, &[]);
    field.set(18, 0, Some(PieceKind::J));
    fill_row_except(&mut field, 19, &[]);

    // Lock a piece far away so the board state is what drives the sweep.
    assert_eq!(lock(&mut field, &piece_at(PieceKind::O, 0, 0)), Some(2));

    // The partial row is all that remains at the bottom.
    assert_eq!(field.get(19, 0), Some(Some(PieceKind::J)));
    for col in 1..10 {
        assert_eq!(field.get(19, col), Some(None));
    }
    for row in 2..19 {
        for col in 0..10 {
            assert_eq!(field.get(row, col), Some(None), "({}, {})", row, col);
        }
    }
}

#[test]
fn test_top_out_returns_none_and_preserves_board() {
    let mut field = Playfield::new();
    fill_row_except(&mut field, 19, &[3]);
    fill_row_except(&mut field, 18, &[5]);
    let before = field.clone();

    // T at its spawn position has a set cell in hidden row -1.
    let piece = ActivePiece::spawn(PieceKind::T);
    assert_eq!(lock(&mut field, &piece), None);
    assert_eq!(field, before);
}

#[test]
fn test_partially_hidden_lock_is_still_top_out() {
    let mut field = Playfield::new();
    let before = field.clone();

    // S at row -1: top row of set cells at -1, bottom row at 0. One hidden
    // cell is enough to end the game; nothing is written.
    let piece = piece_at(PieceKind::S, -1, 3);
    assert_eq!(lock(&mut field, &piece), None);
    assert_eq!(field, before);
}

#[test]
fn test_lock_entirely_in_visible_rows_near_top() {
    let mut field = Playfield::new();
    // I is one row tall; at row -1 its occupied row is row 0. Legal.
    let piece = piece_at(PieceKind::I, -1, 3);
    assert_eq!(lock(&mut field, &piece), Some(0));
    for col in 3..7 {
        assert_eq!(field.get(0, col), Some(Some(PieceKind::I)));
    }
}

#[test]
fn test_clearing_top_row_leaves_it_empty() {
    let mut field = Playfield::new();
    fill_row_except(&mut field, 0, &[0, 1]);

    assert_eq!(lock(&mut field, &piece_at(PieceKind::O, 0, 0)), Some(1));

    for col in 0..10 {
        assert_eq!(field.get(0, col), Some(None), "col {}", col);
    }
    // The O's bottom half survives on row 1.
    assert_eq!(field.get(1, 0), Some(Some(PieceKind::O)));
    assert_eq!(field.get(1, 1), Some(Some(PieceKind::O)));
}
