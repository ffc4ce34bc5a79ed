//! Error types for the fit loss.

use std::fmt;

use crate::bezier::BezierError;

/// Result type for fit operations.
pub type FitResult<T> = Result<T, FitError>;

/// Errors that can occur while computing the fit loss.
#[derive(Debug, Clone)]
pub enum FitError {
    /// Input tensors have mismatched sizes.
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Input has too few sample points for the requested operation.
    InsufficientData {
        required: usize,
        actual: usize,
        context: String,
    },

    /// All sample points coincide, so the chord-length parameterization is
    /// undefined (zero total path length).
    DegenerateSamples { context: String },

    /// Invalid parameter value.
    InvalidParameter { parameter: String, message: String },

    /// Error from the Bezier basis or curve machinery.
    Bezier(BezierError),

    /// Error from underlying numr operation.
    NumrError(String),
}

impl fmt::Display for FitError {
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
            Self::InsufficientData {
                required,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Insufficient data in {}: need at least {} points, got {}",
                    context, required, actual
                )
            }
            Self::DegenerateSamples { context } => {
                write!(
                    f,
                    "{}: all sample points coincide, chord-length parameterization is undefined",
                    context
                )
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
            Self::Bezier(err) => {
                write!(f, "{}", err)
            }
            Self::NumrError(msg) => {
                write!(f, "numr error: {}", msg)
            }
        }
    }
}

impl std::error::Error for FitError {}

impl From<numr::error::Error> for FitError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}

impl From<BezierError> for FitError {
    fn from(err: BezierError) -> Self {
        Self::Bezier(err)
    }
}
