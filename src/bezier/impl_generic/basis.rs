//! Bezier basis matrix construction (generic implementation).
//!
//! The Bernstein polynomial B_{j,d}(t) = C(d,j) * t^j * (1-t)^(d-j) expands
//! in the power basis as
//!
//!   B_{j,d}(t) = sum_{e=j..d} (-1)^(e-j) * C(d,j) * C(d-j, e-j) * t^e
//!
//! Collecting the coefficients for all j gives a fixed (d+1)x(d+1) matrix M
//! with `[t^d, ..., t, 1] * M = [B_0(t), ..., B_d(t)]`. The matrix depends
//! only on the degree, so it is built once from an exact integer Pascal
//! triangle on the host and uploaded to the client's device.

use crate::bezier::error::{BezierError, BezierResult};
use numr::dtype::DType;
use numr::ops::{ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Binomial coefficients C(n, k) for all n up to `max_n`, as a Pascal triangle.
///
/// Entries stay exact in f64 up to degrees far beyond the conditioning limit
/// of the power-basis representation itself.
fn pascal_triangle(max_n: usize) -> Vec<Vec<f64>> {
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(max_n + 1);
    for n in 0..=max_n {
        let mut row = vec![1.0; n + 1];
        for k in 1..n {
            row[k] = rows[n - 1][k - 1] + rows[n - 1][k];
        }
        rows.push(row);
    }
    rows
}

/// Compute the power-to-Bernstein coefficient matrix of degree d.
///
/// Row i corresponds to the power t^(d-i), column j to the Bernstein basis
/// function B_{j,d}.
pub fn bezier_coefficient_matrix_impl<R, C>(client: &C, degree: usize) -> BezierResult<Tensor<R>>
where
    R: Runtime<DType = DType>,
    C: RuntimeClient<R>,
{
    let k = degree + 1;
    let binom = pascal_triangle(degree);

    let mut entries = vec![0.0f64; k * k];
    for i in 0..k {
        let e = degree - i; // exponent of t for this row
        for j in 0..=e {
            // coefficient of t^e in B_{j,d}
            let m = e - j;
            let sign = if m % 2 == 0 { 1.0 } else { -1.0 };
            entries[i * k + j] = sign * binom[degree][j] * binom[degree - j][m];
        }
    }

    Ok(Tensor::<R>::from_slice(&entries, &[k, k], client.device()))
}

/// Construct the [n, d+1] power-basis design matrix for parameter values t.
///
/// Row i is `[t_i^d, t_i^(d-1), ..., t_i, 1]`, built one power column at a
/// time and concatenated along dim 1.
pub fn power_design_matrix_impl<R, C>(
    client: &C,
    params: &Tensor<R>,
    degree: usize,
) -> BezierResult<Tensor<R>>
where
    R: Runtime<DType = DType>,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let shape = params.shape();
    if shape.len() != 1 {
        return Err(BezierError::InvalidParameter {
            parameter: "params".to_string(),
            message: format!("parameter values must be a 1D tensor, got shape {:?}", shape),
        });
    }
    let n = shape[0];
    let device = client.device();

    let mut columns = Vec::with_capacity(degree + 1);
    for exponent in (1..=degree).rev() {
        let col = client.pow_scalar(params, exponent as f64)?;
        columns.push(col.reshape(&[n, 1])?);
    }
    columns.push(Tensor::<R>::ones(&[n, 1], DType::F64, device));

    let refs: Vec<&Tensor<R>> = columns.iter().collect();
    Ok(client.cat(&refs, 1)?)
}

/// Evaluate the Bernstein basis at parameter values t via the coefficient
/// matrix: `T(t) @ M`, shape [n, d+1].
pub fn bernstein_design_matrix_impl<R, C>(
    client: &C,
    coefficients: &Tensor<R>,
    params: &Tensor<R>,
) -> BezierResult<Tensor<R>>
where
    R: Runtime<DType = DType>,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let shape = coefficients.shape();
    if shape.len() != 2 || shape[0] != shape[1] || shape[0] == 0 {
        return Err(BezierError::InvalidParameter {
            parameter: "coefficients".to_string(),
            message: format!(
                "coefficient matrix must be square and non-empty, got shape {:?}",
                shape
            ),
        });
    }
    let degree = shape[0] - 1;

    let t_mat = power_design_matrix_impl(client, params, degree)?;
    Ok(client.matmul(&t_mat, coefficients)?)
}
