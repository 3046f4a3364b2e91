//! Determinant-sign oracle (fraction-free Bareiss elimination).

use nalgebra::DMatrix;

use super::scalar::{RingElement, Sign};

/// Exact sign of `det(m)` for a square matrix over an integral domain.
///
/// Fraction-free elimination: after step `k`, every active entry is a
/// `(k+1)`-minor of the original matrix and the division by the previous
/// pivot is exact, so integer and rational inputs never round. Row swaps
/// during pivoting flip the tracked parity. The empty matrix has
/// determinant 1.
pub fn sign_of_determinant<T: RingElement>(mut m: DMatrix<T>) -> Sign {
    let n = m.nrows();
    debug_assert_eq!(n, m.ncols(), "determinant of a non-square matrix");
    if n == 0 {
        return Sign::Positive;
    }
    let mut odd_swaps = false;
    let mut prev = T::one();
    for k in 0..n - 1 {
        // Pivot: first row at or below k with a nonzero entry in column k.
        let pivot = (k..n).find(|&r| !Sign::of(&m[(r, k)]).is_zero());
        let Some(pivot) = pivot else {
            return Sign::Zero;
        };
        if pivot != k {
            m.swap_rows(pivot, k);
            odd_swaps = !odd_swaps;
        }
        for i in k + 1..n {
            for j in k + 1..n {
                let num = m[(k, k)].clone() * m[(i, j)].clone()
                    - m[(i, k)].clone() * m[(k, j)].clone();
                m[(i, j)] = num / prev.clone();
            }
            m[(i, k)] = T::zero();
        }
        prev = m[(k, k)].clone();
    }
    let sign = Sign::of(&m[(n - 1, n - 1)]);
    if odd_swaps {
        -sign
    } else {
        sign
    }
}
