//! The matrix operations a [`MatrixGaussian`](crate::MatrixGaussian) needs from its backend.
use approx::RelativeEq;
use nalgebra::DMatrix;

const SYMMETRY_EPS: f64 = 1e-12;
const SYMMETRY_MAX_RELATIVE: f64 = 1e-9;

/// Dense real matrix backend
///
/// Read-only operations must be safe to call concurrently for the
/// distribution built on top to be shared across threads.
pub trait MatrixOps: Clone {
    /// Number of rows
    fn num_rows(&self) -> usize;
    /// Number of columns
    fn num_cols(&self) -> usize;

    /// `(rows, columns)`
    fn dims(&self) -> (usize, usize) {
        (self.num_rows(), self.num_cols())
    }

    /// Build a `nrows x ncols` matrix from entries laid out row after row
    fn from_row_major(nrows: usize, ncols: usize, entries: &[f64]) -> Self;

    /// `self + rhs`
    fn add_mat(&self, rhs: &Self) -> Self;
    /// `self - rhs`
    fn sub_mat(&self, rhs: &Self) -> Self;
    /// Matrix product `self * rhs`
    fn mul_mat(&self, rhs: &Self) -> Self;
    /// `self^T`
    fn transposed(&self) -> Self;

    /// Sum of the diagonal of a square matrix
    fn trace(&self) -> f64;
    /// Determinant of a square matrix
    fn det(&self) -> f64;

    /// `None` if the matrix is singular
    fn inverse(&self) -> Option<Self>;

    /// Lower triangular `L` with `L * L^T == self`, `None` unless
    /// positive-definite
    fn cholesky_lower(&self) -> Option<Self>;

    /// Square and equal to its transpose up to rounding
    fn is_symmetric(&self) -> bool;
}

impl MatrixOps for DMatrix<f64> {
    fn num_rows(&self) -> usize {
        self.nrows()
    }

    fn num_cols(&self) -> usize {
        self.ncols()
    }

    fn from_row_major(nrows: usize, ncols: usize, entries: &[f64]) -> Self {
        DMatrix::from_row_slice(nrows, ncols, entries)
    }

    fn add_mat(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn sub_mat(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn mul_mat(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn transposed(&self) -> Self {
        self.transpose()
    }

    fn trace(&self) -> f64 {
        self.diagonal().sum()
    }

    fn det(&self) -> f64 {
        self.determinant()
    }

    fn inverse(&self) -> Option<Self> {
        self.clone().try_inverse()
    }

    fn cholesky_lower(&self) -> Option<Self> {
        self.clone().cholesky().map(|chol| chol.l())
    }

    fn is_symmetric(&self) -> bool {
        self.is_square()
            && self.relative_eq(&self.transpose(), SYMMETRY_EPS, SYMMETRY_MAX_RELATIVE)
    }
}
