//! JSON description of a parameterization.
//!
//! Matrices are written row by row:
//!
//! ```json
//! {
//!   "location": [[0.0, 1.0]],
//!   "u_scale": [[2.0]],
//!   "v_scale": [[1.0, 0.2], [0.2, 1.0]]
//! }
//! ```
use crate::distributions::MatrixGaussian;
use crate::error::MatrixGaussianError;
use log::info;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// `location`, `u_scale` and `v_scale` as nested rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixGaussianConfig {
    /// `n x p` mean
    pub location: Vec<Vec<f64>>,
    /// `n x n` row covariance
    pub u_scale: Vec<Vec<f64>>,
    /// `p x p` column covariance
    pub v_scale: Vec<Vec<f64>>,
}

impl MatrixGaussianConfig {
    /// # Errors
    ///
    /// `Json` if `json` does not describe a config.
    pub fn from_json_str(json: &str) -> Result<Self, MatrixGaussianError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// `Io` if the file cannot be read, `Json` if it is not a config.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, MatrixGaussianError> {
        let path = path.as_ref();
        info!("reading parameters from {}", path.display());
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// `Json` if serialization fails.
    pub fn to_json_string(&self) -> Result<String, MatrixGaussianError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and precompute the distribution
    ///
    /// # Errors
    ///
    /// `RaggedRows` for a malformed matrix literal, otherwise anything
    /// [`MatrixGaussian::new`] returns.
    pub fn build(&self) -> Result<MatrixGaussian, MatrixGaussianError> {
        MatrixGaussian::new(
            rows_to_matrix("location", &self.location)?,
            rows_to_matrix("u_scale", &self.u_scale)?,
            rows_to_matrix("v_scale", &self.v_scale)?,
        )
    }
}

impl From<&MatrixGaussian> for MatrixGaussianConfig {
    fn from(mg: &MatrixGaussian) -> Self {
        Self {
            location: matrix_to_rows(mg.location()),
            u_scale: matrix_to_rows(mg.u_scale()),
            v_scale: matrix_to_rows(mg.v_scale()),
        }
    }
}

fn rows_to_matrix(
    param: &'static str,
    rows: &[Vec<f64>],
) -> Result<DMatrix<f64>, MatrixGaussianError> {
    let ncols = rows.first().map_or(0, Vec::len);
    if ncols == 0 {
        return Err(MatrixGaussianError::RaggedRows { param, row: 0 });
    }
    if let Some(row) = rows.iter().position(|r| r.len() != ncols) {
        return Err(MatrixGaussianError::RaggedRows { param, row });
    }
    let entries: Vec<f64> = rows.iter().flatten().copied().collect();
    Ok(DMatrix::from_row_slice(rows.len(), ncols, &entries))
}

fn matrix_to_rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    m.row_iter().map(|r| r.iter().copied().collect()).collect()
}
