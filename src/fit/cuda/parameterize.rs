use crate::fit::error::FitResult;
use crate::fit::impl_generic::parameterize::{
    chord_length_params_impl, consecutive_distances_impl,
};
use crate::fit::traits::parameterize::ChordLengthAlgorithms;
use numr::runtime::cuda::{CudaClient, CudaRuntime};
use numr::tensor::Tensor;

impl ChordLengthAlgorithms<CudaRuntime> for CudaClient {
    fn consecutive_distances(
        &self,
        points: &Tensor<CudaRuntime>,
    ) -> FitResult<Tensor<CudaRuntime>> {
        consecutive_distances_impl(self, points)
    }

    fn chord_length_params(
        &self,
        samples: &Tensor<CudaRuntime>,
    ) -> FitResult<Tensor<CudaRuntime>> {
        chord_length_params_impl(self, samples)
    }
}
