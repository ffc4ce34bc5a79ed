//! Rational Bezier curve evaluation (generic implementation).
//!
//! C(t) = sum(w_i * B_i(t) * P_i) / sum(w_i * B_i(t))
//!
//! computed as the row-normalized basis-weight matrix times the control
//! points, so that many parameter values evaluate in one matmul.

use crate::bezier::error::{BezierError, BezierResult};
use crate::bezier::impl_generic::basis::{
    bernstein_design_matrix_impl, bezier_coefficient_matrix_impl,
};
use crate::bezier::traits::rational::RationalBezier;
use numr::dtype::DType;
use numr::ops::{ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Validate rational Bezier curve parameters.
fn validate_rational_bezier<R: Runtime>(curve: &RationalBezier<R>) -> BezierResult<()> {
    let cp_shape = curve.control_points.shape();
    let expected = curve.degree + 1;

    if cp_shape.len() != 2 || cp_shape[1] != 2 {
        return Err(BezierError::InvalidParameter {
            parameter: "control_points".to_string(),
            message: format!("control points must have shape [n, 2], got {:?}", cp_shape),
        });
    }

    if cp_shape[0] != expected {
        return Err(BezierError::ShapeMismatch {
            expected,
            actual: cp_shape[0],
            context: format!("rational_bezier: degree {} needs {} control points", curve.degree, expected),
        });
    }

    let w_shape = curve.weights.shape();
    if w_shape.len() != 1 || w_shape[0] != expected {
        return Err(BezierError::ShapeMismatch {
            expected,
            actual: if w_shape.is_empty() { 0 } else { w_shape[0] },
            context: "rational_bezier: weights must match number of control points".to_string(),
        });
    }

    Ok(())
}

/// Scale the Bernstein basis columns by the weights and row-normalize:
/// `W = rownorm(basis @ diag(weights))`, shape [n, d+1].
///
/// Returns the normalized blend matrix together with the row sums [n, 1]
/// (the rational denominators), which the loss gradients reuse.
pub(crate) fn rational_blend_matrix<R, C>(
    client: &C,
    basis: &Tensor<R>,
    weights: &Tensor<R>,
) -> BezierResult<(Tensor<R>, Tensor<R>)>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let n = basis.shape()[0];
    let k = basis.shape()[1];

    let weighted = client.matmul(basis, &client.diagflat(weights)?)?; // [n, k]
    let row_sums = client.sum(&weighted, &[1], true)?; // [n, 1]

    // A zero denominator means the rational curve is undefined at that
    // parameter value; report the row instead of dividing into NaN.
    let sums_host: Vec<f64> = row_sums.to_vec();
    if let Some(row) = sums_host.iter().position(|&s| s == 0.0) {
        return Err(BezierError::DegenerateWeights { row });
    }

    let denom = row_sums.broadcast_to(&[n, k])?.contiguous()?;
    let blend = client.div(&weighted, &denom)?;
    Ok((blend, row_sums))
}

/// Evaluate a rational Bezier curve at parameter values t.
pub fn rational_bezier_evaluate_impl<R, C>(
    client: &C,
    curve: &RationalBezier<R>,
    params: &Tensor<R>,
) -> BezierResult<Tensor<R>>
where
    R: Runtime<DType = DType>,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    validate_rational_bezier(curve)?;

    let coefficients = bezier_coefficient_matrix_impl(client, curve.degree)?;
    let basis = bernstein_design_matrix_impl(client, &coefficients, params)?;
    let (blend, _) = rational_blend_matrix(client, &basis, &curve.weights)?;
    Ok(client.matmul(&blend, &curve.control_points)?)
}
