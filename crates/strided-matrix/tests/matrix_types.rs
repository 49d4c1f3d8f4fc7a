//! Integration tests for construction, access, views and transposition.

use strided_matrix::{Matrix, MatrixError};

fn two_by_three() -> Matrix {
    Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn filled_sets_every_cell() {
    for &(rows, columns) in &[(0, 0), (1, 1), (3, 2), (4, 7)] {
        let m = Matrix::filled(rows, columns, 2.5).unwrap();
        assert_eq!(m.dims(), (rows, columns));
        for r in 0..rows {
            for c in 0..columns {
                assert_eq!(m.get(r, c).unwrap(), 2.5);
            }
        }
    }
}

#[test]
fn new_is_zeroed() {
    let m = Matrix::new(2, 2).unwrap();
    assert_eq!(m.to_vec(), vec![0.0; 4]);
}

#[test]
fn from_vec_length_mismatch_errors() {
    let err = Matrix::from_vec(2, 3, vec![1.0; 5]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::ShapeMismatch {
            operation: "from_vec",
            expected: vec![6],
            actual: vec![5],
        }
    );
}

#[test]
fn from_rows_builds_row_major() {
    let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_eq!(m.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn from_rows_ragged_errors() {
    let result = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    assert!(matches!(result, Err(MatrixError::ShapeMismatch { .. })));
}

// ---------------------------------------------------------------------------
// Element access
// ---------------------------------------------------------------------------

#[test]
fn get_and_set_round_trip() {
    let mut m = two_by_three();
    assert_eq!(m.get(1, 2).unwrap(), 6.0);
    m.set(1, 2, 60.0).unwrap();
    assert_eq!(m.get(1, 2).unwrap(), 60.0);
    assert_eq!(m[(1, 2)], 60.0);
    m[(0, 0)] = -1.0;
    assert_eq!(m.get(0, 0).unwrap(), -1.0);
}

#[test]
fn out_of_range_access_errors() {
    let mut m = two_by_three();
    for &(r, c) in &[(2, 0), (0, 3), (5, 5)] {
        assert!(matches!(
            m.get(r, c),
            Err(MatrixError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            m.set(r, c, 0.0),
            Err(MatrixError::IndexOutOfRange { .. })
        ));
    }
    // Column 3 of row 0 would alias row 1 in the buffer; it must still fail.
    assert!(m.get(0, 3).is_err());
}

#[test]
fn empty_matrix_rejects_all_access() {
    let mut m = Matrix::new(0, 0).unwrap();
    assert!(m.get(0, 0).is_err());
    assert!(m.set(0, 0, 1.0).is_err());
    assert!(m.view_row(0).is_err());
    assert!(m.view_column(0).is_err());
}

#[test]
fn unchecked_access_matches_checked() {
    let mut m = two_by_three();
    unsafe {
        assert_eq!(m.get_unchecked(1, 1), 5.0);
        m.set_unchecked(1, 1, 50.0);
    }
    assert_eq!(m.get(1, 1).unwrap(), 50.0);
}

#[test]
#[should_panic(expected = "out of range")]
fn index_operator_panics_out_of_range() {
    let m = two_by_three();
    let _ = m[(0, 3)];
}

// ---------------------------------------------------------------------------
// Views and copies
// ---------------------------------------------------------------------------

#[test]
fn view_row_and_column() {
    let m = two_by_three();
    assert_eq!(m.view_row(1).unwrap(), vec![4.0, 5.0, 6.0]);
    assert_eq!(m.view_column(2).unwrap(), vec![3.0, 6.0]);
    assert_eq!(m.row(0), vec![1.0, 2.0, 3.0]);
}

#[test]
fn views_are_detached() {
    let m = two_by_three();
    let mut row = m.view_row(0).unwrap();
    row[0] = 100.0;
    assert_eq!(m.get(0, 0).unwrap(), 1.0);
}

#[test]
fn copy_is_independent() {
    let m = two_by_three();
    let mut copy = m.copy();
    assert_eq!(copy, m);
    copy.set(0, 0, 42.0).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), 1.0);
}

#[test]
fn copy_keeps_strides() {
    let mut m = two_by_three();
    m.transpose_in_place();
    let copy = m.copy();
    assert_eq!(copy.strides(), m.strides());
    assert_eq!(copy.get(2, 1).unwrap(), 6.0);
}

// ---------------------------------------------------------------------------
// Transpose
// ---------------------------------------------------------------------------

#[test]
fn transpose_swaps_coordinates() {
    let m = two_by_three();
    let t = m.transpose();
    assert_eq!(t.rows(), m.columns());
    assert_eq!(t.columns(), m.rows());
    for r in 0..m.rows() {
        for c in 0..m.columns() {
            assert_eq!(t.get(c, r).unwrap(), m.get(r, c).unwrap());
        }
    }
    // The original is untouched.
    assert_eq!(m.dims(), (2, 3));
}

#[test]
fn transposed_views_walk_strides() {
    let t = two_by_three().transpose();
    assert_eq!(t.view_row(0).unwrap(), vec![1.0, 4.0]);
    assert_eq!(t.view_column(1).unwrap(), vec![4.0, 5.0, 6.0]);
    assert_eq!(
        t.to_array(),
        vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]
    );
    // The raw buffer is not reordered.
    assert_eq!(t.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn double_transpose_is_identity() {
    let m = two_by_three();
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn logical_equality_ignores_layout() {
    let t = two_by_three().transpose();
    let explicit = Matrix::from_rows(&[vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]).unwrap();
    assert_eq!(t, explicit);
    assert_ne!(t.strides(), explicit.strides());
}

// ---------------------------------------------------------------------------
// Fill, aggregates and text
// ---------------------------------------------------------------------------

#[test]
fn sum_of_ones() {
    let m = Matrix::filled(3, 3, 1.0).unwrap();
    assert_eq!(m.sum(), 9.0);
}

#[test]
fn assign_indexed_passes_flat_index() {
    let mut m = Matrix::new(2, 2).unwrap();
    m.assign_indexed(|v, i| v + i as f64);
    assert_eq!(m.to_vec(), vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn assign_chains() {
    let mut m = Matrix::new(2, 2).unwrap();
    let total = m.assign(3.0).assign_with(|v| v * 2.0).sum();
    assert_eq!(total, 24.0);
}

#[test]
fn shape_and_display() {
    let m = two_by_three();
    assert_eq!(m.shape(), "2 x 3 matrix");
    assert_eq!(m.to_string(), "1 2 3\n4 5 6");
    assert_eq!(m.transpose().to_string(), "1 4\n2 5\n3 6");
    assert_eq!(Matrix::new(0, 0).unwrap().to_string(), "");
}
