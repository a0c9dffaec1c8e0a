use crate::error::MatrixGaussianError;
use crate::linalg::MatrixOps;
use crate::sampler::{NormalSource, StandardNormals};
use log::debug;
use nalgebra::DMatrix;
use rand::{distributions::Distribution, Rng};
use statrs::distribution::Normal;
use statrs::statistics::{MeanN, Mode, VarianceN};
use std::f64::consts::PI;

/// Matrix normal distribution `MN(M, U, V)` over `n x p` real matrices.
///
/// `location` (`M`) is the `n x p` mean, `u_scale` (`U`) the `n x n`
/// covariance between rows and `v_scale` (`V`) the `p x p` covariance
/// between columns. Both scales must be symmetric positive-definite.
///
/// The inverses and Cholesky factors of both scales, and the log of the
/// normalizing constant, are computed once in [`MatrixGaussian::new`] and
/// never again.
#[derive(Debug, Clone)]
pub struct MatrixGaussian<M = DMatrix<f64>> {
    location: M,
    u_scale: M,
    v_scale: M,

    u_scale_inv: M,
    v_scale_inv: M,
    // lower factor of U
    u_scale_sqrt: M,
    // transposed lower factor of V, i.e. upper triangular
    v_scale_sqrt: M,
    log_denom: f64,

    norm: Normal,
}

impl<M: MatrixOps> MatrixGaussian<M> {
    /// # Errors
    ///
    /// `InvalidParameterShape` if `u_scale` is not `n x n` or `v_scale` is
    /// not `p x p` for an `n x p` location, `NotPositiveDefinite` if either
    /// scale is asymmetric, singular or has no Cholesky factor.
    pub fn new(location: M, u_scale: M, v_scale: M) -> Result<Self, MatrixGaussianError> {
        let (n, p) = location.dims();
        check_shape("u_scale", &u_scale, n)?;
        check_shape("v_scale", &v_scale, p)?;

        let (u_scale_inv, u_scale_sqrt) = factorize("u_scale", &u_scale)?;
        let (v_scale_inv, v_lower) = factorize("v_scale", &v_scale)?;
        let v_scale_sqrt = v_lower.transposed();

        let (nf, pf) = (n as f64, p as f64);
        let log_denom = nf * pf / 2.0 * (2.0 * PI).ln()
            + nf / 2.0 * v_scale.det().ln()
            + pf / 2.0 * u_scale.det().ln();
        debug!("matrix normal over {n}x{p} matrices, log normalizer {log_denom}");

        Ok(Self {
            location,
            u_scale,
            v_scale,
            u_scale_inv,
            v_scale_inv,
            u_scale_sqrt,
            v_scale_sqrt,
            log_denom,
            norm: Normal::new(0.0, 1.0)?,
        })
    }

    /// Log of the density at `value`
    ///
    /// ```text
    /// -1/2 tr[V^-1 (X - M)^T U^-1 (X - M)] - np/2 ln(2π) - n/2 ln|V| - p/2 ln|U|
    /// ```
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `value` is not the shape of `location`.
    pub fn ln_density(&self, value: &M) -> Result<f64, MatrixGaussianError> {
        if value.dims() != self.location.dims() {
            return Err(MatrixGaussianError::DimensionMismatch {
                expected: self.location.dims(),
                found: value.dims(),
            });
        }
        let x_minus_m = value.sub_mat(&self.location);
        let big_trace = self
            .v_scale_inv
            .mul_mat(&x_minus_m.transposed())
            .mul_mat(&self.u_scale_inv)
            .mul_mat(&x_minus_m)
            .trace();
        Ok(-0.5 * big_trace - self.log_denom)
    }

    /// Density at `value`. Underflows to `0` (or overflows to `inf`) far from
    /// the mean; prefer [`ln_density`](Self::ln_density) for comparisons.
    ///
    /// # Errors
    ///
    /// Same as [`ln_density`](Self::ln_density).
    pub fn density(&self, value: &M) -> Result<f64, MatrixGaussianError> {
        self.ln_density(value).map(f64::exp)
    }

    /// Draw one matrix, taking `n * p` values from `source`.
    ///
    /// The draws fill `Z` row by row and the result is
    /// `M + L_U Z L_V^T` with `L_U L_U^T = U` and `L_V L_V^T = V`. Since
    /// `Z` has i.i.d. standard normal entries, `L_U Z L_V^T` is
    /// `MN(0, L_U L_U^T, L_V L_V^T)`.
    pub fn sample_with<S: NormalSource + ?Sized>(&self, source: &mut S) -> M {
        let (n, p) = self.location.dims();
        let z: Vec<f64> = (0..n * p).map(|_| source.draw()).collect();
        let z = M::from_row_major(n, p, &z);
        self.location
            .add_mat(&self.u_scale_sqrt.mul_mat(&z.mul_mat(&self.v_scale_sqrt)))
    }

    /// Mean, `n x p`
    pub fn location(&self) -> &M {
        &self.location
    }

    /// Row covariance, `n x n`
    pub fn u_scale(&self) -> &M {
        &self.u_scale
    }

    /// Column covariance, `p x p`
    pub fn v_scale(&self) -> &M {
        &self.v_scale
    }

    /// Lower Cholesky factor of `u_scale`
    pub fn u_scale_sqrt(&self) -> &M {
        &self.u_scale_sqrt
    }

    /// Upper Cholesky factor of `v_scale`, the transpose of its lower factor
    pub fn v_scale_sqrt(&self) -> &M {
        &self.v_scale_sqrt
    }

    /// Log of the normalizing constant, so that
    /// `ln_density(location) == -ln_normalizer()`
    pub fn ln_normalizer(&self) -> f64 {
        self.log_denom
    }

    /// `(n, p)`, the shape of every value of the distribution
    pub fn shape(&self) -> (usize, usize) {
        self.location.dims()
    }
}

fn check_shape<M: MatrixOps>(
    param: &'static str,
    scale: &M,
    dim: usize,
) -> Result<(), MatrixGaussianError> {
    if scale.dims() != (dim, dim) {
        return Err(MatrixGaussianError::InvalidParameterShape {
            param,
            expected: (dim, dim),
            found: scale.dims(),
        });
    }
    Ok(())
}

/// Inverse and lower Cholesky factor of a scale matrix
fn factorize<M: MatrixOps>(param: &'static str, scale: &M) -> Result<(M, M), MatrixGaussianError> {
    let not_pd = || MatrixGaussianError::NotPositiveDefinite { param };
    if !scale.is_symmetric() {
        return Err(not_pd());
    }
    let lower = scale.cholesky_lower().ok_or_else(not_pd)?;
    let inv = scale.inverse().ok_or_else(not_pd)?;
    Ok((inv, lower))
}

impl<M: MatrixOps> Distribution<M> for MatrixGaussian<M> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> M {
        let mut source = StandardNormals::new(rng, self.norm);
        self.sample_with(&mut source)
    }
}

impl MeanN<DMatrix<f64>> for MatrixGaussian<DMatrix<f64>> {
    fn mean(&self) -> Option<DMatrix<f64>> {
        Some(self.location.clone())
    }
}

impl Mode<DMatrix<f64>> for MatrixGaussian<DMatrix<f64>> {
    fn mode(&self) -> DMatrix<f64> {
        self.location.clone()
    }
}

/// Covariance of `vec(X)`, the columns of `X` stacked on top of each other
/// (nalgebra's storage order): `V ⊗ U`, of size `np x np`.
impl VarianceN<DMatrix<f64>> for MatrixGaussian<DMatrix<f64>> {
    fn variance(&self) -> Option<DMatrix<f64>> {
        Some(self.v_scale.kronecker(&self.u_scale))
    }
}
