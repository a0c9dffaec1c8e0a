//! Positional, dynamically typed parameters for callers that treat every
//! distribution as "a list of values".
//!
//! The order is always `(location, u_scale, v_scale)`. Each entry is checked
//! before it reaches the typed [`MatrixGaussian`] API.
use crate::distributions::MatrixGaussian;
use crate::error::MatrixGaussianError;
use nalgebra::DMatrix;
use rand::{distributions::Distribution, Rng};

const NUM_PARAMS: usize = 3;

/// A parameter or value as seen by a generic caller
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A scalar
    Real(f64),
    /// A dense matrix
    Matrix(DMatrix<f64>),
}

impl ParamValue {
    fn as_matrix(&self, index: usize) -> Result<&DMatrix<f64>, MatrixGaussianError> {
        match self {
            ParamValue::Matrix(m) => Ok(m),
            ParamValue::Real(_) => Err(MatrixGaussianError::ParameterType {
                index,
                expected: "matrix",
            }),
        }
    }
}

impl From<DMatrix<f64>> for ParamValue {
    fn from(m: DMatrix<f64>) -> Self {
        ParamValue::Matrix(m)
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Real(x)
    }
}

impl MatrixGaussian<DMatrix<f64>> {
    /// Build from `[location, u_scale, v_scale]`
    ///
    /// # Errors
    ///
    /// `ParameterCount` unless exactly three parameters are given,
    /// `ParameterType` if one of them is not a matrix, then everything
    /// [`MatrixGaussian::new`] can return.
    pub fn from_params(params: &[ParamValue]) -> Result<Self, MatrixGaussianError> {
        let [location, u_scale, v_scale] = params else {
            return Err(MatrixGaussianError::ParameterCount {
                expected: NUM_PARAMS,
                found: params.len(),
            });
        };
        Self::new(
            location.as_matrix(0)?.clone(),
            u_scale.as_matrix(1)?.clone(),
            v_scale.as_matrix(2)?.clone(),
        )
    }

    /// [`ln_density`](Self::ln_density) of an untyped value
    ///
    /// # Errors
    ///
    /// `ParameterType` if `value` is not a matrix, else as `ln_density`.
    pub fn ln_density_of(&self, value: &ParamValue) -> Result<f64, MatrixGaussianError> {
        self.ln_density(value.as_matrix(0)?)
    }

    /// [`density`](Self::density) of an untyped value
    ///
    /// # Errors
    ///
    /// `ParameterType` if `value` is not a matrix, else as `density`.
    pub fn density_of(&self, value: &ParamValue) -> Result<f64, MatrixGaussianError> {
        self.density(value.as_matrix(0)?)
    }

    /// One draw, wrapped for a generic caller
    pub fn sample_value<R: Rng + ?Sized>(&self, rng: &mut R) -> ParamValue {
        ParamValue::Matrix(self.sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn params() -> Vec<ParamValue> {
        vec![
            DMatrix::from_row_slice(1, 2, &[0.0, 1.0]).into(),
            DMatrix::from_element(1, 1, 2.0).into(),
            DMatrix::from_row_slice(2, 2, &[1.0, 0.2, 0.2, 1.0]).into(),
        ]
    }

    #[test]
    fn builds_from_three_matrices() {
        let mg = MatrixGaussian::from_params(&params()).unwrap();
        assert_eq!(mg.shape(), (1, 2));
        assert_eq!(mg.u_scale(), &DMatrix::from_element(1, 1, 2.0));
    }

    #[test]
    fn rejects_wrong_count() {
        let mut ps = params();
        ps.pop();
        assert!(matches!(
            MatrixGaussian::from_params(&ps),
            Err(MatrixGaussianError::ParameterCount { expected: 3, found: 2 })
        ));
        ps.push(ParamValue::Real(1.0));
        ps.push(ParamValue::Real(1.0));
        assert!(matches!(
            MatrixGaussian::from_params(&ps),
            Err(MatrixGaussianError::ParameterCount { found: 4, .. })
        ));
    }

    #[test]
    fn rejects_scalar_parameter() {
        let mut ps = params();
        ps[1] = ParamValue::Real(2.0);
        assert!(matches!(
            MatrixGaussian::from_params(&ps),
            Err(MatrixGaussianError::ParameterType { index: 1, .. })
        ));
    }

    #[test]
    fn shape_errors_pass_through() {
        let mut ps = params();
        ps.swap(1, 2);
        assert!(matches!(
            MatrixGaussian::from_params(&ps),
            Err(MatrixGaussianError::InvalidParameterShape { param: "u_scale", .. })
        ));
    }

    #[test]
    fn untyped_queries_delegate() {
        let mg = MatrixGaussian::from_params(&params()).unwrap();
        let x = DMatrix::from_row_slice(1, 2, &[0.5, 0.5]);
        assert_eq!(
            mg.ln_density_of(&x.clone().into()).unwrap(),
            mg.ln_density(&x).unwrap()
        );
        assert_eq!(mg.density_of(&x.clone().into()).unwrap(), mg.density(&x).unwrap());
        assert!(matches!(
            mg.ln_density_of(&ParamValue::Real(0.5)),
            Err(MatrixGaussianError::ParameterType { .. })
        ));

        let mut rng = StdRng::seed_from_u64(3);
        match mg.sample_value(&mut rng) {
            ParamValue::Matrix(m) => assert_eq!(m.shape(), (1, 2)),
            other => panic!("expected a matrix, got {other:?}"),
        }
    }
}
