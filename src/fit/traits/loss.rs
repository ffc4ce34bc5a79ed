//! Fit loss trait and configuration types.

use crate::bezier::impl_generic::basis::bezier_coefficient_matrix_impl;
use crate::fit::error::{FitError, FitResult};
use numr::dtype::DType;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Options for the rational Bezier fit loss.
#[derive(Debug, Clone, Copy)]
pub struct BezierFitOptions {
    /// Weight of the control-point spacing regularizer: the mean squared
    /// distance between consecutive control points. Penalizes spread-out
    /// control polygons.
    pub spacing_penalty: f64,
    /// Weight of the rational-weight regularizer: the mean of the weight
    /// values. Pulls the curve toward a uniform-weight (polynomial) Bezier.
    pub weight_penalty: f64,
}

impl Default for BezierFitOptions {
    fn default() -> Self {
        Self {
            spacing_penalty: 1e-2,
            weight_penalty: 1e-2,
        }
    }
}

/// Loss and gradients from one fit-loss evaluation.
#[derive(Debug, Clone)]
pub struct BezierFitValue<R: Runtime> {
    /// Total loss: `fit_term + spacing_term + weight_term`.
    pub loss: f64,
    /// Mean squared error between fitted and target points.
    pub fit_term: f64,
    /// Control-point spacing regularization term (already scaled).
    pub spacing_term: f64,
    /// Weight regularization term (already scaled).
    pub weight_term: f64,
    /// Fitted curve points at the parameter values, shape [n, 2].
    pub fitted: Tensor<R>,
    /// Parameter values used (supplied or inferred), shape [n].
    pub params: Tensor<R>,
    /// Gradient of the loss with respect to the control points, [d+1, 2].
    pub grad_control_points: Tensor<R>,
    /// Gradient of the loss with respect to the weights, [d+1].
    pub grad_weights: Tensor<R>,
}

/// Precomputed state for the rational Bezier fit loss.
///
/// Holds the power-to-Bernstein coefficient matrix for the configured
/// degree, built once on the device of the client passed to [`new`] and
/// reused unchanged across calls. Everything else (control points, weights,
/// samples, parameter values) is transient per-call input.
///
/// [`new`]: BezierFitLoss::new
#[derive(Debug, Clone)]
pub struct BezierFitLoss<R: Runtime> {
    /// Power-to-Bernstein coefficient matrix, shape [degree + 1, degree + 1].
    coefficients: Tensor<R>,
    /// Polynomial degree of the fitted curve.
    degree: usize,
    /// Regularization weights.
    options: BezierFitOptions,
}

impl<R: Runtime> BezierFitLoss<R> {
    /// Create a fit loss for curves of the given degree.
    ///
    /// # Arguments
    ///
    /// * `client` - Runtime client; the coefficient matrix is placed on its
    ///   device
    /// * `degree` - Polynomial degree of the fitted curve, at least 1
    /// * `options` - Regularization weights, both non-negative
    ///
    /// # Errors
    ///
    /// Returns an error if `degree` is 0 or either regularization weight is
    /// negative.
    pub fn new<C: RuntimeClient<R>>(
        client: &C,
        degree: usize,
        options: BezierFitOptions,
    ) -> FitResult<Self>
    where
        R: Runtime<DType = DType>,
    {
        if degree == 0 {
            return Err(FitError::InvalidParameter {
                parameter: "degree".to_string(),
                message: "degree must be at least 1".to_string(),
            });
        }
        if options.spacing_penalty < 0.0 {
            return Err(FitError::InvalidParameter {
                parameter: "spacing_penalty".to_string(),
                message: format!("must be non-negative, got {}", options.spacing_penalty),
            });
        }
        if options.weight_penalty < 0.0 {
            return Err(FitError::InvalidParameter {
                parameter: "weight_penalty".to_string(),
                message: format!("must be non-negative, got {}", options.weight_penalty),
            });
        }

        let coefficients = bezier_coefficient_matrix_impl(client, degree)?;

        Ok(Self {
            coefficients,
            degree,
            options,
        })
    }

    /// Polynomial degree of the fitted curve.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The precomputed power-to-Bernstein coefficient matrix.
    pub fn coefficients(&self) -> &Tensor<R> {
        &self.coefficients
    }

    /// The configured regularization weights.
    pub fn options(&self) -> &BezierFitOptions {
        &self.options
    }
}

/// Rational Bezier fit loss algorithms.
pub trait BezierFitAlgorithms<R: Runtime> {
    /// Compute the fit loss and its gradients for one optimization step.
    ///
    /// Evaluates the rational Bezier curve defined by `control_points` and
    /// `weights` at the given (or inferred) parameter values, and returns
    ///
    /// - `fit_term`: mean over all n samples and both coordinates of the
    ///   squared difference between fitted and target points,
    /// - `spacing_term`: mean squared distance between consecutive control
    ///   points, scaled by `spacing_penalty`,
    /// - `weight_term`: mean of the weights, scaled by `weight_penalty`,
    ///
    /// with `loss` their sum, together with the exact gradients of `loss`
    /// with respect to `control_points` and `weights` for the caller's
    /// optimizer.
    ///
    /// # Arguments
    ///
    /// * `loss` - Precomputed loss state (degree, coefficient matrix, options)
    /// * `control_points` - Control points, shape [degree + 1, 2]
    /// * `weights` - Non-negative weights, shape [degree + 1]
    /// * `samples` - Target points to approximate, shape [n, 2] with n >= 2
    /// * `params` - Optional explicit parameter values, shape [n]; when
    ///   `None` they are inferred by chord-length parameterization of
    ///   `samples`
    ///
    /// # Errors
    ///
    /// Shape mismatches fail fast before any tensor math. Degenerate input
    /// (coincident samples with inferred parameters, or weighted basis rows
    /// summing to zero) is reported as an error rather than propagating NaN.
    fn bezier_fit_loss(
        &self,
        loss: &BezierFitLoss<R>,
        control_points: &Tensor<R>,
        weights: &Tensor<R>,
        samples: &Tensor<R>,
        params: Option<&Tensor<R>>,
    ) -> FitResult<BezierFitValue<R>>;
}
