use crate::bezier::error::BezierResult;
use crate::bezier::impl_generic::rational::rational_bezier_evaluate_impl;
use crate::bezier::traits::rational::{RationalBezier, RationalBezierAlgorithms};
use numr::runtime::cuda::{CudaClient, CudaRuntime};
use numr::tensor::Tensor;

impl RationalBezierAlgorithms<CudaRuntime> for CudaClient {
    fn rational_bezier_evaluate(
        &self,
        curve: &RationalBezier<CudaRuntime>,
        params: &Tensor<CudaRuntime>,
    ) -> BezierResult<Tensor<CudaRuntime>> {
        rational_bezier_evaluate_impl(self, curve, params)
    }
}
