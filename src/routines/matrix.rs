//! In-place matrix routines.

use crate::error::RoutineError;

/// Returns the column count, rejecting ragged rows.
fn column_count(matrix: &[Vec<i64>]) -> Result<usize, RoutineError> {
    let expected = matrix.first().map_or(0, Vec::len);
    for (row, values) in matrix.iter().enumerate() {
        if values.len() != expected {
            return Err(RoutineError::RaggedMatrix {
                row,
                found: values.len(),
                expected,
            });
        }
    }
    Ok(expected)
}

/// Rotates an N×N matrix 90° clockwise in place.
///
/// Works layer by layer from the outside in, cycling four cells at a time
/// (left to top, bottom to left, right to bottom, top to right).
///
/// # Errors
///
/// Returns [`RoutineError::RaggedMatrix`] or [`RoutineError::NotSquare`] if
/// the input is not a square matrix.
///
/// # Examples
///
/// ```
/// use linkchain::routines::rotate_matrix;
///
/// let mut m = vec![vec![1, 2], vec![3, 4]];
/// rotate_matrix(&mut m).unwrap();
/// assert_eq!(m, vec![vec![3, 1], vec![4, 2]]);
/// ```
pub fn rotate_matrix(matrix: &mut [Vec<i64>]) -> Result<(), RoutineError> {
    let n = matrix.len();
    let cols = column_count(matrix)?;
    if cols != n {
        return Err(RoutineError::NotSquare { rows: n, cols });
    }

    for layer in 0..n / 2 {
        let first = layer;
        let last = n - 1 - layer;
        for i in first..last {
            let offset = i - first;
            let top = matrix[first][i];
            matrix[first][i] = matrix[last - offset][first];
            matrix[last - offset][first] = matrix[last][last - offset];
            matrix[last][last - offset] = matrix[i][last];
            matrix[i][last] = top;
        }
    }

    Ok(())
}

/// Zeroes the entire row and column of every cell that holds zero.
///
/// Zero positions are recorded before any cell is cleared, so cleared cells
/// never spread further.
///
/// # Errors
///
/// Returns [`RoutineError::RaggedMatrix`] if rows differ in width.
pub fn zero_matrix(matrix: &mut [Vec<i64>]) -> Result<(), RoutineError> {
    let cols = column_count(matrix)?;

    let mut zero_rows = vec![false; matrix.len()];
    let mut zero_cols = vec![false; cols];
    for (r, row) in matrix.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            if value == 0 {
                zero_rows[r] = true;
                zero_cols[c] = true;
            }
        }
    }

    for (r, row) in matrix.iter_mut().enumerate() {
        for (c, value) in row.iter_mut().enumerate() {
            if zero_rows[r] || zero_cols[c] {
                *value = 0;
            }
        }
    }

    Ok(())
}
