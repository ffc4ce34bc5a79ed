//! CPU implementation of the rational Bezier fit loss.

use crate::fit::error::FitResult;
use crate::fit::impl_generic::loss::bezier_fit_loss_impl;
use crate::fit::traits::loss::{BezierFitAlgorithms, BezierFitLoss, BezierFitValue};
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl BezierFitAlgorithms<CpuRuntime> for CpuClient {
    fn bezier_fit_loss(
        &self,
        loss: &BezierFitLoss<CpuRuntime>,
        control_points: &Tensor<CpuRuntime>,
        weights: &Tensor<CpuRuntime>,
        samples: &Tensor<CpuRuntime>,
        params: Option<&Tensor<CpuRuntime>>,
    ) -> FitResult<BezierFitValue<CpuRuntime>> {
        bezier_fit_loss_impl(self, loss, control_points, weights, samples, params)
    }
}
