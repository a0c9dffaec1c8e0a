use thiserror::Error;

/// An error enum for building and querying a [`MatrixGaussian`](crate::MatrixGaussian)
#[derive(Debug, Error)]
pub enum MatrixGaussianError {
    /// A scale matrix does not match the shape of `location`
    #[error("{param} is {}x{}, expected {}x{} to match location", .found.0, .found.1, .expected.0, .expected.1)]
    InvalidParameterShape {
        /// Which scale parameter was rejected
        param: &'static str,
        /// Shape implied by `location`
        expected: (usize, usize),
        /// Shape that was passed in
        found: (usize, usize),
    },

    /// A scale matrix is not symmetric positive-definite
    #[error("{param} is not symmetric positive-definite")]
    NotPositiveDefinite {
        /// Which scale parameter was rejected
        param: &'static str,
    },

    /// The queried value does not have the shape of `location`
    #[error("value is {}x{}, distribution is over {}x{} matrices", .found.0, .found.1, .expected.0, .expected.1)]
    DimensionMismatch {
        /// Shape of `location`
        expected: (usize, usize),
        /// Shape of the queried value
        found: (usize, usize),
    },

    /// Wrong number of positional parameters
    #[error("expected {expected} parameters, got {found}")]
    ParameterCount {
        /// Arity of the distribution
        expected: usize,
        /// Number of parameters received
        found: usize,
    },

    /// A positional parameter has the wrong kind
    #[error("parameter {index} must be a {expected}")]
    ParameterType {
        /// Position in the parameter list
        index: usize,
        /// Kind of value required at that position
        expected: &'static str,
    },

    /// A row-major matrix literal has rows of different lengths, or no columns
    #[error("{param}: row {row} does not match the width of the first row")]
    RaggedRows {
        /// Parameter the literal belongs to
        param: &'static str,
        /// First offending row
        row: usize,
    },

    /// This error comes directly from `statrs::StatsError`
    #[error(transparent)]
    Stats(#[from] statrs::StatsError),

    /// Malformed configuration
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
