use crate::fit::error::FitResult;
use crate::fit::impl_generic::loss::bezier_fit_loss_impl;
use crate::fit::traits::loss::{BezierFitAlgorithms, BezierFitLoss, BezierFitValue};
use numr::runtime::cuda::{CudaClient, CudaRuntime};
use numr::tensor::Tensor;

impl BezierFitAlgorithms<CudaRuntime> for CudaClient {
    fn bezier_fit_loss(
        &self,
        loss: &BezierFitLoss<CudaRuntime>,
        control_points: &Tensor<CudaRuntime>,
        weights: &Tensor<CudaRuntime>,
        samples: &Tensor<CudaRuntime>,
        params: Option<&Tensor<CudaRuntime>>,
    ) -> FitResult<BezierFitValue<CudaRuntime>> {
        bezier_fit_loss_impl(self, loss, control_points, weights, samples, params)
    }
}
