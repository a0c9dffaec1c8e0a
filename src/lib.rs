//! The matrix-variate normal distribution `MN(M, U, V)`.
//!
//! ```
//! use matrix_normal::MatrixGaussian;
//! use nalgebra::DMatrix;
//! use rand::{distributions::Distribution, rngs::StdRng, SeedableRng};
//!
//! let mg = MatrixGaussian::new(
//!     DMatrix::zeros(2, 3),
//!     DMatrix::from_row_slice(2, 2, &[2.0, 0.5, 0.5, 1.0]),
//!     DMatrix::identity(3, 3),
//! )
//! .unwrap();
//!
//! let x = mg.sample(&mut StdRng::seed_from_u64(1));
//! assert!(mg.ln_density(&x).unwrap() <= -mg.ln_normalizer());
//! ```
#![warn(
    rust_2018_idioms,
    rust_2021_compatibility,
    missing_debug_implementations,
    missing_docs
)]

pub mod config;
mod distributions;
mod error;
pub mod linalg;
pub mod params;
pub mod sampler;

pub use config::MatrixGaussianConfig;
pub use distributions::MatrixGaussian;
pub use error::MatrixGaussianError;
pub use linalg::MatrixOps;
pub use params::ParamValue;
pub use sampler::{NormalSource, StandardNormals};
