//! Error types for GLCM feature extraction

use polars::prelude::PolarsError;
use thiserror::Error;

/// Main error type for texture feature extraction
#[derive(Error, Debug)]
pub enum GlcmError {
    #[error("No unsigned integer type available to represent {n_bins} intensity bins")]
    UnsupportedBinCount { n_bins: u128 },

    #[error("Shape mismatch: expected ({}, {}), got ({}, {})", expected.0, expected.1, actual.0, actual.1)]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unknown GLCM property: '{0}'")]
    UnknownProperty(String),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for GLCM operations
pub type Result<T> = std::result::Result<T, GlcmError>;

#[cfg(feature = "python")]
impl From<GlcmError> for pyo3::PyErr {
    fn from(err: GlcmError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
