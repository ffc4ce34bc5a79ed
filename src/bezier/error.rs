//! Error types for Bezier basis and curve operations.

use std::fmt;

/// Result type for Bezier basis and curve operations.
pub type BezierResult<T> = Result<T, BezierError>;

/// Errors that can occur during Bezier basis construction or curve evaluation.
#[derive(Debug, Clone)]
pub enum BezierError {
    /// Input tensors have mismatched sizes.
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Invalid parameter value.
    InvalidParameter { parameter: String, message: String },

    /// The weighted basis values of a parameter value sum to zero, so the
    /// rational normalization is undefined there.
    DegenerateWeights { row: usize },

    /// Error from underlying numr operation.
    NumrError(String),
}

impl fmt::Display for BezierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                expected,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Shape mismatch in {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
            Self::DegenerateWeights { row } => {
                write!(
                    f,
                    "Weighted basis values sum to zero at parameter row {}; the rational curve is undefined there",
                    row
                )
            }
            Self::NumrError(msg) => {
                write!(f, "numr error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BezierError {}

impl From<numr::error::Error> for BezierError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}
