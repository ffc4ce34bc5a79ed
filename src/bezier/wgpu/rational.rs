use crate::bezier::error::BezierResult;
use crate::bezier::impl_generic::rational::rational_bezier_evaluate_impl;
use crate::bezier::traits::rational::{RationalBezier, RationalBezierAlgorithms};
use numr::runtime::wgpu::{WgpuClient, WgpuRuntime};
use numr::tensor::Tensor;

impl RationalBezierAlgorithms<WgpuRuntime> for WgpuClient {
    fn rational_bezier_evaluate(
        &self,
        curve: &RationalBezier<WgpuRuntime>,
        params: &Tensor<WgpuRuntime>,
    ) -> BezierResult<Tensor<WgpuRuntime>> {
        rational_bezier_evaluate_impl(self, curve, params)
    }
}
