use crate::bezier::error::BezierResult;
use crate::bezier::impl_generic::basis::{
    bernstein_design_matrix_impl, bezier_coefficient_matrix_impl, power_design_matrix_impl,
};
use crate::bezier::traits::basis::BezierBasisAlgorithms;
use numr::runtime::cuda::{CudaClient, CudaRuntime};
use numr::tensor::Tensor;

impl BezierBasisAlgorithms<CudaRuntime> for CudaClient {
    fn bezier_coefficient_matrix(&self, degree: usize) -> BezierResult<Tensor<CudaRuntime>> {
        bezier_coefficient_matrix_impl(self, degree)
    }

    fn power_design_matrix(
        &self,
        params: &Tensor<CudaRuntime>,
        degree: usize,
    ) -> BezierResult<Tensor<CudaRuntime>> {
        power_design_matrix_impl(self, params, degree)
    }

    fn bernstein_design_matrix(
        &self,
        coefficients: &Tensor<CudaRuntime>,
        params: &Tensor<CudaRuntime>,
    ) -> BezierResult<Tensor<CudaRuntime>> {
        bernstein_design_matrix_impl(self, coefficients, params)
    }
}
