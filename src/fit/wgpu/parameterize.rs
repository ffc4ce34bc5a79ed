use crate::fit::error::FitResult;
use crate::fit::impl_generic::parameterize::{
    chord_length_params_impl, consecutive_distances_impl,
};
use crate::fit::traits::parameterize::ChordLengthAlgorithms;
use numr::runtime::wgpu::{WgpuClient, WgpuRuntime};
use numr::tensor::Tensor;

impl ChordLengthAlgorithms<WgpuRuntime> for WgpuClient {
    fn consecutive_distances(
        &self,
        points: &Tensor<WgpuRuntime>,
    ) -> FitResult<Tensor<WgpuRuntime>> {
        consecutive_distances_impl(self, points)
    }

    fn chord_length_params(
        &self,
        samples: &Tensor<WgpuRuntime>,
    ) -> FitResult<Tensor<WgpuRuntime>> {
        chord_length_params_impl(self, samples)
    }
}
