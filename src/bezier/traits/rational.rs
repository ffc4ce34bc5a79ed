//! Rational Bezier curve trait definitions.

use crate::bezier::error::BezierResult;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// A rational Bezier curve defined by weighted control points.
///
/// Each control point carries a scalar weight; the weights are normalized
/// into the basis evaluation, which lets the curve represent shapes (exact
/// conics, for instance) that a polynomial Bezier cannot. With all weights
/// equal the curve reduces to the ordinary Bezier curve.
#[derive(Debug, Clone)]
pub struct RationalBezier<R: Runtime> {
    /// Control points, shape [degree + 1, 2].
    pub control_points: Tensor<R>,
    /// Weights for each control point, shape [degree + 1].
    pub weights: Tensor<R>,
    /// Polynomial degree.
    pub degree: usize,
}

/// Rational Bezier curve algorithms.
pub trait RationalBezierAlgorithms<R: Runtime> {
    /// Evaluate the rational Bezier curve at parameter values t.
    ///
    /// Uses the rational blend
    /// `C(t) = sum(w_i * B_i(t) * P_i) / sum(w_i * B_i(t))`,
    /// computed as a row-normalized basis-weight matrix times the control
    /// points.
    ///
    /// # Arguments
    /// * `curve` - The rational Bezier curve
    /// * `params` - 1D tensor of parameter values, shape [n]
    ///
    /// # Returns
    /// Points on the curve, shape [n, 2].
    ///
    /// # Errors
    ///
    /// Returns [`BezierError::DegenerateWeights`] if the weighted basis
    /// values of some parameter value sum to exactly zero, since the
    /// rational normalization is undefined there.
    ///
    /// [`BezierError::DegenerateWeights`]: crate::bezier::BezierError::DegenerateWeights
    fn rational_bezier_evaluate(
        &self,
        curve: &RationalBezier<R>,
        params: &Tensor<R>,
    ) -> BezierResult<Tensor<R>>;
}
