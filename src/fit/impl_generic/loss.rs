//! Rational Bezier fit loss (generic implementation).
//!
//! Forward:
//!
//!   B = T(ts) * M                      per-sample Bernstein basis [n, k]
//!   W = rownorm(B * diag(R))           rational blend matrix      [n, k]
//!   C = W * P                          fitted points              [n, 2]
//!   loss = mean((C - XY)^2)
//!        + spacing_penalty * mean(||P_{j+1} - P_j||^2)
//!        + weight_penalty * mean(R)
//!
//! Backward (reverse mode, derived by hand since every step above is a
//! closed-form tensor expression):
//!
//!   dL/dC = (C - XY) / n
//!   dL/dW = dL/dC * P^T
//!   dL/dA = (dL/dW - rowsum(dL/dW . W)) / s      A = B * diag(R), s = rowsum(A)
//!   dL/dR_j = sum_i dL/dA[i,j] * B[i,j] + weight_penalty / k
//!   dL/dP = W^T * dL/dC + (2 * spacing_penalty / (k-1)) * (D_{j-1} - D_j)
//!
//! where D_j = P_{j+1} - P_j (zero-padded at both ends). The row
//! normalization pullback is the usual softmax-style identity obtained from
//! dW[i,m]/dA[i,j] = (delta_mj - W[i,m]) / s_i.

use crate::bezier::impl_generic::basis::bernstein_design_matrix_impl;
use crate::bezier::impl_generic::rational::rational_blend_matrix;
use crate::fit::error::{FitError, FitResult};
use crate::fit::impl_generic::parameterize::chord_length_params_impl;
use crate::fit::traits::loss::{BezierFitLoss, BezierFitValue};
use numr::dtype::DType;
use numr::ops::{ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

fn validate_inputs<R: Runtime>(
    loss: &BezierFitLoss<R>,
    control_points: &Tensor<R>,
    weights: &Tensor<R>,
    samples: &Tensor<R>,
    params: Option<&Tensor<R>>,
) -> FitResult<(usize, usize)> {
    let k = loss.degree() + 1;

    let cp_shape = control_points.shape();
    if cp_shape.len() != 2 || cp_shape[1] != 2 {
        return Err(FitError::InvalidParameter {
            parameter: "control_points".to_string(),
            message: format!("control points must have shape [n, 2], got {:?}", cp_shape),
        });
    }
    if cp_shape[0] != k {
        return Err(FitError::ShapeMismatch {
            expected: k,
            actual: cp_shape[0],
            context: format!("bezier_fit_loss: degree {} needs {} control points", loss.degree(), k),
        });
    }

    let w_shape = weights.shape();
    if w_shape.len() != 1 || w_shape[0] != k {
        return Err(FitError::ShapeMismatch {
            expected: k,
            actual: if w_shape.is_empty() { 0 } else { w_shape[0] },
            context: "bezier_fit_loss: weights must match number of control points".to_string(),
        });
    }

    let xy_shape = samples.shape();
    if xy_shape.len() != 2 || xy_shape[1] != 2 {
        return Err(FitError::InvalidParameter {
            parameter: "samples".to_string(),
            message: format!("samples must have shape [n, 2], got {:?}", xy_shape),
        });
    }
    let n = xy_shape[0];
    if n < 2 {
        return Err(FitError::InsufficientData {
            required: 2,
            actual: n,
            context: "bezier_fit_loss".to_string(),
        });
    }

    if let Some(ts) = params {
        let ts_shape = ts.shape();
        if ts_shape.len() != 1 || ts_shape[0] != n {
            return Err(FitError::ShapeMismatch {
                expected: n,
                actual: if ts_shape.is_empty() { 0 } else { ts_shape[0] },
                context: "bezier_fit_loss: params must have one value per sample".to_string(),
            });
        }
    }

    Ok((n, k))
}

/// Compute the fit loss and its gradients for one optimization step.
pub fn bezier_fit_loss_impl<R, C>(
    client: &C,
    loss: &BezierFitLoss<R>,
    control_points: &Tensor<R>,
    weights: &Tensor<R>,
    samples: &Tensor<R>,
    params: Option<&Tensor<R>>,
) -> FitResult<BezierFitValue<R>>
where
    R: Runtime<DType = DType>,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let (n, k) = validate_inputs(loss, control_points, weights, samples, params)?;
    let device = client.device();
    let options = loss.options();

    let ts = match params {
        Some(ts) => ts.clone(),
        None => chord_length_params_impl(client, samples)?,
    };

    // Forward pass.
    let basis = bernstein_design_matrix_impl(client, loss.coefficients(), &ts)?; // [n, k]
    let (blend, row_sums) = rational_blend_matrix(client, &basis, weights)?; // [n, k], [n, 1]
    let fitted = client.matmul(&blend, control_points)?; // [n, 2]

    let resid = client.sub(&fitted, samples)?; // [n, 2]
    let resid_sq = client.mul(&resid, &resid)?;
    let sq_per_sample = client.sum(&resid_sq, &[1], false)?; // [n]
    let sq_total: f64 = client.sum(&sq_per_sample, &[0], false)?.item()?;
    let fit_term = sq_total / (2 * n) as f64;

    let gaps = client.sub(
        &control_points.narrow(0, 1, k - 1)?,
        &control_points.narrow(0, 0, k - 1)?,
    )?; // [k-1, 2]
    let gaps_sq = client.mul(&gaps, &gaps)?;
    let gap_sq_dists = client.sum(&gaps_sq, &[1], false)?; // [k-1]
    let gap_total: f64 = client.sum(&gap_sq_dists, &[0], false)?.item()?;
    let spacing_term = options.spacing_penalty * gap_total / (k - 1) as f64;

    let weight_total: f64 = client.sum(weights, &[0], false)?.item()?;
    let weight_term = options.weight_penalty * weight_total / k as f64;

    let total_loss = fit_term + spacing_term + weight_term;

    // Backward pass.
    let grad_fitted = client.mul_scalar(&resid, 1.0 / n as f64)?; // [n, 2]

    // Fit-term gradient w.r.t. the control points: W^T * dL/dC.
    let blend_t = blend.transpose(0, 1)?.contiguous()?;
    let grad_cp_fit = client.matmul(&blend_t, &grad_fitted)?; // [k, 2]

    // Spacing-regularizer gradient: (2 * penalty / (k-1)) * (D_{j-1} - D_j).
    let zero_row = Tensor::<R>::zeros(&[1, 2], DType::F64, device);
    let gaps_before = client.cat(&[&zero_row, &gaps], 0)?; // D_{j-1}, [k, 2]
    let gaps_after = client.cat(&[&gaps, &zero_row], 0)?; // D_j, [k, 2]
    let grad_cp_spacing = client.mul_scalar(
        &client.sub(&gaps_before, &gaps_after)?,
        2.0 * options.spacing_penalty / (k - 1) as f64,
    )?;
    let grad_control_points = client.add(&grad_cp_fit, &grad_cp_spacing)?;

    // Pullback through the rational normalization.
    let cp_t = control_points.transpose(0, 1)?.contiguous()?;
    let grad_blend = client.matmul(&grad_fitted, &cp_t)?; // [n, k]
    let inner = client.sum(&client.mul(&grad_blend, &blend)?, &[1], true)?; // [n, 1]
    let centered = client.sub(&grad_blend, &inner.broadcast_to(&[n, k])?.contiguous()?)?;
    let grad_weighted = client.div(&centered, &row_sums.broadcast_to(&[n, k])?.contiguous()?)?;

    // dL/dR_j = sum_i dL/dA[i,j] * B[i,j], plus the weight regularizer.
    let grad_w_fit = client.sum(&client.mul(&grad_weighted, &basis)?, &[0], false)?; // [k]
    let grad_weights = client.add_scalar(&grad_w_fit, options.weight_penalty / k as f64)?;

    Ok(BezierFitValue {
        loss: total_loss,
        fit_term,
        spacing_term,
        weight_term,
        fitted,
        params: ts,
        grad_control_points,
        grad_weights,
    })
}
