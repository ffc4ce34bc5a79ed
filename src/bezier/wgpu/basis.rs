use crate::bezier::error::BezierResult;
use crate::bezier::impl_generic::basis::{
    bernstein_design_matrix_impl, bezier_coefficient_matrix_impl, power_design_matrix_impl,
};
use crate::bezier::traits::basis::BezierBasisAlgorithms;
use numr::runtime::wgpu::{WgpuClient, WgpuRuntime};
use numr::tensor::Tensor;

impl BezierBasisAlgorithms<WgpuRuntime> for WgpuClient {
    fn bezier_coefficient_matrix(&self, degree: usize) -> BezierResult<Tensor<WgpuRuntime>> {
        bezier_coefficient_matrix_impl(self, degree)
    }

    fn power_design_matrix(
        &self,
        params: &Tensor<WgpuRuntime>,
        degree: usize,
    ) -> BezierResult<Tensor<WgpuRuntime>> {
        power_design_matrix_impl(self, params, degree)
    }

    fn bernstein_design_matrix(
        &self,
        coefficients: &Tensor<WgpuRuntime>,
        params: &Tensor<WgpuRuntime>,
    ) -> BezierResult<Tensor<WgpuRuntime>> {
        bernstein_design_matrix_impl(self, coefficients, params)
    }
}
