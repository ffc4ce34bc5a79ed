//! Chord-length parameterization trait definitions.

use crate::fit::error::FitResult;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Chord-length parameterization of ordered 2D point sequences.
pub trait ChordLengthAlgorithms<R: Runtime> {
    /// Euclidean distances between consecutive points.
    ///
    /// # Arguments
    /// * `points` - Ordered points, shape [n, 2] with n >= 2
    ///
    /// # Returns
    /// Distances `||p_{i+1} - p_i||`, shape [n - 1].
    fn consecutive_distances(&self, points: &Tensor<R>) -> FitResult<Tensor<R>>;

    /// Cumulative normalized chord-length parameter values.
    ///
    /// Assigns each sample point a parameter in [0, 1] proportional to the
    /// distance traveled along the polyline up to that point:
    /// `t_0 = 0`, `t_i = sum(d_1..d_i) / sum(d_1..d_{n-1})`. The result is
    /// monotonically non-decreasing with `t_{n-1} = 1`.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InsufficientData`] for fewer than two samples and
    /// [`FitError::DegenerateSamples`] when every sample coincides (zero
    /// total path length).
    ///
    /// [`FitError::InsufficientData`]: crate::fit::FitError::InsufficientData
    /// [`FitError::DegenerateSamples`]: crate::fit::FitError::DegenerateSamples
    fn chord_length_params(&self, samples: &Tensor<R>) -> FitResult<Tensor<R>>;
}
