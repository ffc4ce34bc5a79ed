//! CPU implementation of chord-length parameterization.

use crate::fit::error::FitResult;
use crate::fit::impl_generic::parameterize::{
    chord_length_params_impl, consecutive_distances_impl,
};
use crate::fit::traits::parameterize::ChordLengthAlgorithms;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl ChordLengthAlgorithms<CpuRuntime> for CpuClient {
    fn consecutive_distances(
        &self,
        points: &Tensor<CpuRuntime>,
    ) -> FitResult<Tensor<CpuRuntime>> {
        consecutive_distances_impl(self, points)
    }

    fn chord_length_params(
        &self,
        samples: &Tensor<CpuRuntime>,
    ) -> FitResult<Tensor<CpuRuntime>> {
        chord_length_params_impl(self, samples)
    }
}
