//! bezfit - Differentiable Rational Bezier Curve Fitting
//!
//! bezfit computes a scalar loss measuring how well a rational Bezier curve,
//! given by control points and per-point weights, reproduces an ordered
//! sequence of 2D sample points - together with the exact gradients of that
//! loss with respect to the control points and weights, ready for an external
//! optimizer. Built on numr's tensor primitives, it works across all backends
//! (CPU, CUDA, WebGPU).
//!
//! # Modules
//!
//! - [`bezier`] - Bezier basis construction and rational curve evaluation
//! - [`fit`] - Chord-length parameterization and the fit loss with gradients
//!
//! # Backend Support
//!
//! All algorithms are generic over numr's `Runtime` trait. The same code runs
//! on CPU (default), CUDA (feature `cuda`), and WebGPU (feature `wgpu`). The
//! compute device is chosen explicitly by constructing the matching client;
//! there is no ambient hardware detection.
//!
//! # Example
//!
//! ```ignore
//! use bezfit::fit::{BezierFitAlgorithms, BezierFitLoss, BezierFitOptions};
//! use numr::runtime::cpu::{CpuClient, CpuDevice};
//! use numr::tensor::Tensor;
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//!
//! // A quadratic rational Bezier: 3 control points, 3 weights.
//! let loss = BezierFitLoss::new(&client, 2, BezierFitOptions::default())?;
//!
//! let p = Tensor::from_slice(&[0.0, 0.0, 1.0, 2.0, 2.0, 0.0], &[3, 2], &device);
//! let r = Tensor::from_slice(&[1.0, 1.0, 1.0], &[3], &device);
//! let xy = Tensor::from_slice(&[0.0, 0.0, 1.0, 1.0, 2.0, 0.0], &[3, 2], &device);
//!
//! // One optimization step's worth of loss and gradients.
//! let value = client.bezier_fit_loss(&loss, &p, &r, &xy, None)?;
//! println!("loss = {}", value.loss);
//! ```

pub mod bezier;
pub mod fit;

// Re-export main types for convenience
pub use bezier::{
    BezierBasisAlgorithms, BezierError, BezierResult, RationalBezier, RationalBezierAlgorithms,
};
pub use fit::{
    BezierFitAlgorithms, BezierFitLoss, BezierFitOptions, BezierFitValue, ChordLengthAlgorithms,
    FitError, FitResult,
};

// Re-export numr types that users will commonly need
pub use numr::dtype::DType;
pub use numr::error::{Error, Result};
pub use numr::runtime::{Runtime, RuntimeClient};
pub use numr::tensor::Tensor;
