//! General `R x C` matrix over `f32`.
//!
//! # Convention
//! - Storage is `data[row][col]`
//! - Vectors are **column vectors** on the right: `M * v`
//! - Products chain **right-to-left**: `A * B * v` applies B first, then A

use std::ops::Mul;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const R: usize, const C: usize> {
    data: [[f32; C]; R],
}

impl<const R: usize, const C: usize> Matrix<R, C> {
    pub const fn new(data: [[f32; C]; R]) -> Self {
        Self { data }
    }

    pub const fn zeros() -> Self {
        Self::new([[0.0; C]; R])
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }

    /// Set element at [row][col].
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row][col] = value;
    }

    pub fn row(&self, row: usize) -> [f32; C] {
        self.data[row]
    }

    pub fn transpose(&self) -> Matrix<C, R> {
        let mut result = Matrix::<C, R>::zeros();
        for row in 0..R {
            for col in 0..C {
                result.data[col][row] = self.data[row][col];
            }
        }
        result
    }
}

impl<const N: usize> Matrix<N, N> {
    pub fn identity() -> Self {
        let mut result = Self::zeros();
        for i in 0..N {
            result.data[i][i] = 1.0;
        }
        result
    }

    /// Computes the inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// Returns `None` if the matrix is singular (a pivot vanishes).
    pub fn inverse(&self) -> Option<Self> {
        let mut m = self.data;
        let mut inv = Self::identity().data;

        for col in 0..N {
            // Largest remaining entry in this column keeps the elimination stable.
            let mut pivot = col;
            for row in col + 1..N {
                if m[row][col].abs() > m[pivot][col].abs() {
                    pivot = row;
                }
            }

            let pivot_value = m[pivot][col];
            if pivot_value.abs() < f32::EPSILON || !pivot_value.is_finite() {
                return None;
            }

            m.swap(col, pivot);
            inv.swap(col, pivot);

            let inv_pivot = 1.0 / pivot_value;
            for k in 0..N {
                m[col][k] *= inv_pivot;
                inv[col][k] *= inv_pivot;
            }

            for row in 0..N {
                if row == col {
                    continue;
                }
                let factor = m[row][col];
                if factor == 0.0 {
                    continue;
                }
                for k in 0..N {
                    m[row][k] -= factor * m[col][k];
                    inv[row][k] -= factor * inv[col][k];
                }
            }
        }

        Some(Self::new(inv))
    }
}

/// Matrix product: `(R x C) * (C x K) -> (R x K)`.
impl<const R: usize, const C: usize, const K: usize> Mul<Matrix<C, K>> for Matrix<R, C> {
    type Output = Matrix<R, K>;

    fn mul(self, rhs: Matrix<C, K>) -> Self::Output {
        let mut result = Matrix::<R, K>::zeros();
        for row in 0..R {
            for col in 0..K {
                let mut sum = 0.0;
                for i in 0..C {
                    sum += self.data[row][i] * rhs.data[i][col];
                }
                result.data[row][col] = sum;
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_matrix_eq<const R: usize, const C: usize>(a: &Matrix<R, C>, b: &Matrix<R, C>) {
        for row in 0..R {
            for col in 0..C {
                assert_abs_diff_eq!(a.get(row, col), b.get(row, col), epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn non_square_product_has_outer_dimensions() {
        let a = Matrix::<2, 3>::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::<3, 1>::new([[1.0], [0.0], [-1.0]]);
        let c: Matrix<2, 1> = a * b;
        assert_eq!(c, Matrix::new([[-2.0], [-2.0]]));
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let a = Matrix::<2, 3>::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.row(0), [1.0, 4.0]);
        assert_eq!(t.row(2), [3.0, 6.0]);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn identity_is_neutral() {
        let a = Matrix::<3, 3>::new([[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]]);
        assert_eq!(a * Matrix::identity(), a);
        assert_eq!(Matrix::identity() * a, a);
    }

    #[test]
    fn product_is_not_commutative() {
        let a = Matrix::<2, 2>::new([[1.0, 2.0], [0.0, 1.0]]);
        let b = Matrix::<2, 2>::new([[1.0, 0.0], [3.0, 1.0]]);
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn inverse_round_trips_to_identity() {
        let a = Matrix::<4, 4>::new([
            [4.0, 7.0, 2.0, 0.0],
            [3.0, 6.0, 1.0, 2.0],
            [2.0, 5.0, 3.0, 1.0],
            [0.0, 1.0, 2.0, 5.0],
        ]);
        let inv = a.inverse().expect("matrix is invertible");
        assert_matrix_eq(&(a * inv), &Matrix::identity());
        assert_matrix_eq(&(inv * a), &Matrix::identity());
    }

    #[test]
    fn inverse_needs_pivoting() {
        // Zero in the top-left corner; elimination without row swaps would fail.
        let a = Matrix::<3, 3>::new([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 2.0]]);
        let inv = a.inverse().expect("permutation-scale matrix is invertible");
        assert_matrix_eq(&(a * inv), &Matrix::identity());
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let a = Matrix::<3, 3>::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert!(a.inverse().is_none());
        assert!(Matrix::<4, 4>::zeros().inverse().is_none());
    }
}
