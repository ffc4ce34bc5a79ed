//! Rational Bezier fit loss.
//!
//! This module measures how well a rational Bezier curve reproduces an
//! ordered sequence of 2D sample points, as one scalar loss per call plus
//! the exact gradients an external optimizer needs:
//!
//! - [`ChordLengthAlgorithms`] - cumulative chord-length parameterization
//!   of the sample points, used when the caller supplies no parameter values
//! - [`BezierFitAlgorithms`] - the loss itself: mean squared fitting error
//!   plus control-point spacing and weight regularizers, with analytic
//!   gradients with respect to the control points and weights

mod cpu;
mod error;
pub mod impl_generic;
mod traits;

#[cfg(feature = "cuda")]
mod cuda;

#[cfg(feature = "wgpu")]
mod wgpu;

pub use error::{FitError, FitResult};
pub use traits::{
    BezierFitAlgorithms, BezierFitLoss, BezierFitOptions, BezierFitValue, ChordLengthAlgorithms,
};
