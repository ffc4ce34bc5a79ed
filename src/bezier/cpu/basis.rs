//! CPU implementation of the Bezier basis algorithms.

use crate::bezier::error::BezierResult;
use crate::bezier::impl_generic::basis::{
    bernstein_design_matrix_impl, bezier_coefficient_matrix_impl, power_design_matrix_impl,
};
use crate::bezier::traits::basis::BezierBasisAlgorithms;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl BezierBasisAlgorithms<CpuRuntime> for CpuClient {
    fn bezier_coefficient_matrix(&self, degree: usize) -> BezierResult<Tensor<CpuRuntime>> {
        bezier_coefficient_matrix_impl(self, degree)
    }

    fn power_design_matrix(
        &self,
        params: &Tensor<CpuRuntime>,
        degree: usize,
    ) -> BezierResult<Tensor<CpuRuntime>> {
        power_design_matrix_impl(self, params, degree)
    }

    fn bernstein_design_matrix(
        &self,
        coefficients: &Tensor<CpuRuntime>,
        params: &Tensor<CpuRuntime>,
    ) -> BezierResult<Tensor<CpuRuntime>> {
        bernstein_design_matrix_impl(self, coefficients, params)
    }
}
