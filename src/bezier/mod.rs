//! Bezier basis construction and rational curve evaluation.
//!
//! This module provides the polynomial machinery behind the fit loss:
//! the power-to-Bernstein coefficient matrix, power-basis design matrices,
//! and rational Bezier curve evaluation. All operations work across all
//! numr backends (CPU, CUDA, WebGPU).

mod cpu;
mod error;
pub mod impl_generic;
mod traits;

#[cfg(feature = "cuda")]
mod cuda;

#[cfg(feature = "wgpu")]
mod wgpu;

pub use error::{BezierError, BezierResult};
pub use traits::{BezierBasisAlgorithms, RationalBezier, RationalBezierAlgorithms};
