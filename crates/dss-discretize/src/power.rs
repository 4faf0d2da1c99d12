//! Memoized table of matrix powers.

use crate::error::{DiscretizeError, DiscretizeResult};
use nalgebra::DMatrix;

/// Compute the powers `A^0 .. A^order` of a square matrix.
///
/// Entry 0 is the identity; entry `i` is entry `i-1` right-multiplied by
/// `a`. The table is scoped to one discretization call; there is no
/// process-wide cache.
pub fn power_table(a: &DMatrix<f64>, order: usize) -> DiscretizeResult<Vec<DMatrix<f64>>> {
    if !a.is_square() {
        return Err(DiscretizeError::NotSquare {
            name: "A",
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }

    let n = a.nrows();
    let mut table = Vec::with_capacity(order + 1);
    table.push(DMatrix::identity(n, n));
    for i in 1..=order {
        // Strict sequential dependency: A^i = A^(i-1) * A
        let next = &table[i - 1] * a;
        table.push(next);
    }
    Ok(table)
}
