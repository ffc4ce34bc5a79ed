//! Chord-length parameterization (generic implementation).
//!
//! t_0 = 0, t_i = (distance traveled up to sample i) / (total path length).

use crate::fit::error::{FitError, FitResult};
use numr::dtype::DType;
use numr::ops::{ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

fn validate_point_sequence<R: Runtime>(
    points: &Tensor<R>,
    min_points: usize,
    context: &str,
) -> FitResult<usize> {
    let shape = points.shape();
    if shape.len() != 2 || shape[1] != 2 {
        return Err(FitError::InvalidParameter {
            parameter: "points".to_string(),
            message: format!("{}: points must have shape [n, 2], got {:?}", context, shape),
        });
    }
    if shape[0] < min_points {
        return Err(FitError::InsufficientData {
            required: min_points,
            actual: shape[0],
            context: context.to_string(),
        });
    }
    Ok(shape[0])
}

/// Euclidean distances between consecutive points: `||p_{i+1} - p_i||`,
/// shape [n - 1].
pub fn consecutive_distances_impl<R, C>(client: &C, points: &Tensor<R>) -> FitResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let n = validate_point_sequence(points, 2, "consecutive_distances")?;

    let head = points.narrow(0, 1, n - 1)?;
    let tail = points.narrow(0, 0, n - 1)?;
    let diffs = client.sub(&head, &tail)?; // [n-1, 2]

    let sq = client.mul(&diffs, &diffs)?;
    let sq_dists = client.sum(&sq, &[1], false)?; // [n-1]
    Ok(client.sqrt(&sq_dists)?)
}

/// Cumulative normalized chord-length parameter values, shape [n].
pub fn chord_length_params_impl<R, C>(client: &C, samples: &Tensor<R>) -> FitResult<Tensor<R>>
where
    R: Runtime<DType = DType>,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let dists = consecutive_distances_impl(client, samples)?;
    let device = client.device();

    let total: f64 = client.sum(&dists, &[0], false)?.item()?;
    if total == 0.0 {
        return Err(FitError::DegenerateSamples {
            context: "chord_length_params".to_string(),
        });
    }

    let normalized = client.div_scalar(&dists, total)?;
    let cumulative = client.cumsum(&normalized, 0)?; // [n-1]

    let zero = Tensor::<R>::zeros(&[1], DType::F64, device);
    Ok(client.cat(&[&zero, &cumulative], 0)?)
}
