use crate::fit::error::FitResult;
use crate::fit::impl_generic::loss::bezier_fit_loss_impl;
use crate::fit::traits::loss::{BezierFitAlgorithms, BezierFitLoss, BezierFitValue};
use numr::runtime::wgpu::{WgpuClient, WgpuRuntime};
use numr::tensor::Tensor;

impl BezierFitAlgorithms<WgpuRuntime> for WgpuClient {
    fn bezier_fit_loss(
        &self,
        loss: &BezierFitLoss<WgpuRuntime>,
        control_points: &Tensor<WgpuRuntime>,
        weights: &Tensor<WgpuRuntime>,
        samples: &Tensor<WgpuRuntime>,
        params: Option<&Tensor<WgpuRuntime>>,
    ) -> FitResult<BezierFitValue<WgpuRuntime>> {
        bezier_fit_loss_impl(self, loss, control_points, weights, samples, params)
    }
}
