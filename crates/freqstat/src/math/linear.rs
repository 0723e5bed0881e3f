//! Small dense linear systems.
//!
//! The parabola fit reduces to a 3×3 system of normal equations. It is solved
//! by Gaussian elimination with partial pivoting; a pivot that vanishes
//! relative to the largest entry of the matrix marks the system as singular.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::math::numeric::{is_negligible, to_float};

/// Solve `a · v = b` for a square system, returning `None` when singular.
pub fn solve<T: Float, const N: usize>(mut a: [[T; N]; N], mut b: [T; N]) -> Option<[T; N]> {
    let norm = a
        .iter()
        .flat_map(|row| row.iter())
        .fold(T::zero(), |acc, v| acc.max(v.abs()));
    if !norm.is_finite() || norm == T::zero() {
        return None;
    }
    let scale = norm * to_float::<T, _>(N);

    for col in 0..N {
        // Pivot on the largest remaining entry in this column
        let pivot = (col..N).max_by(|&i, &j| {
            a[i][col]
                .abs()
                .partial_cmp(&a[j][col].abs())
                .unwrap_or(Ordering::Equal)
        })?;
        if is_negligible(a[pivot][col], scale) {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..N {
            let factor = a[row][col] / a[col][col];
            for k in col..N {
                a[row][k] = a[row][k] - factor * a[col][k];
            }
            b[row] = b[row] - factor * b[col];
        }
    }

    // Back substitution
    let mut v = [T::zero(); N];
    for row in (0..N).rev() {
        let mut acc = b[row];
        for k in (row + 1)..N {
            acc = acc - a[row][k] * v[k];
        }
        v[row] = acc / a[row][row];
    }

    if v.iter().all(|c| c.is_finite()) {
        Some(v)
    } else {
        None
    }
}
