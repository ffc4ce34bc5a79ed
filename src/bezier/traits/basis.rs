//! Bezier basis trait definitions.

use crate::bezier::error::BezierResult;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Bezier basis matrix algorithms.
///
/// The Bernstein basis of degree d can be evaluated for many parameter
/// values at once as a matrix product: a power-basis design matrix times a
/// fixed (d+1)x(d+1) coefficient matrix. These operations expose the two
/// factors and their product.
pub trait BezierBasisAlgorithms<R: Runtime> {
    /// Compute the power-to-Bernstein coefficient matrix of degree d.
    ///
    /// Returns the unique [d+1, d+1] matrix `M` such that for any parameter
    /// value t the row vector `[t^d, t^(d-1), ..., t, 1]` multiplied by `M`
    /// yields the Bernstein basis values `[B_{0,d}(t), ..., B_{d,d}(t)]`.
    ///
    /// The entries are signed products of binomial coefficients, built from
    /// an exact integer Pascal triangle; the matrix is exact for small
    /// degrees (up to roughly 10). Conditioning degrades for large degrees,
    /// which is a known limitation of the power-basis form.
    ///
    /// For degree 1 the matrix is `[[-1, 1], [1, 0]]`.
    fn bezier_coefficient_matrix(&self, degree: usize) -> BezierResult<Tensor<R>>;

    /// Construct the power-basis design matrix for parameter values t.
    ///
    /// # Arguments
    /// * `params` - 1D tensor of parameter values, shape [n]
    /// * `degree` - Polynomial degree d
    ///
    /// # Returns
    /// [n, d+1] matrix whose row i is `[t_i^d, t_i^(d-1), ..., t_i, 1]`.
    ///
    /// Values outside [0, 1] extrapolate the polynomial basis; they are not
    /// rejected.
    fn power_design_matrix(&self, params: &Tensor<R>, degree: usize) -> BezierResult<Tensor<R>>;

    /// Evaluate the Bernstein basis at parameter values t.
    ///
    /// Computes `power_design_matrix(t) @ coefficients`, giving the [n, d+1]
    /// matrix of per-sample Bernstein basis values. Each row sums to 1
    /// (partition of unity).
    ///
    /// # Arguments
    /// * `coefficients` - [d+1, d+1] matrix from [`bezier_coefficient_matrix`]
    /// * `params` - 1D tensor of parameter values, shape [n]
    ///
    /// [`bezier_coefficient_matrix`]: BezierBasisAlgorithms::bezier_coefficient_matrix
    fn bernstein_design_matrix(
        &self,
        coefficients: &Tensor<R>,
        params: &Tensor<R>,
    ) -> BezierResult<Tensor<R>>;
}
