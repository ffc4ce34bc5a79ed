//! CPU implementation of rational Bezier curve evaluation.

use crate::bezier::error::BezierResult;
use crate::bezier::impl_generic::rational::rational_bezier_evaluate_impl;
use crate::bezier::traits::rational::{RationalBezier, RationalBezierAlgorithms};
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl RationalBezierAlgorithms<CpuRuntime> for CpuClient {
    fn rational_bezier_evaluate(
        &self,
        curve: &RationalBezier<CpuRuntime>,
        params: &Tensor<CpuRuntime>,
    ) -> BezierResult<Tensor<CpuRuntime>> {
        rational_bezier_evaluate_impl(self, curve, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bezier::error::BezierError;
    use numr::runtime::cpu::CpuDevice;
    use numr::runtime::Runtime;

    fn setup() -> (CpuDevice, CpuClient) {
        let device = CpuDevice::new();
        let client = CpuRuntime::default_client(&device);
        (device, client)
    }

    #[test]
    fn test_uniform_weights_reduce_to_polynomial_bezier() {
        let (device, client) = setup();

        // Quadratic with unit weights: must equal the direct Bernstein blend.
        let p = [[0.0f64, 0.0], [1.0, 2.0], [3.0, 1.0]];
        let curve = RationalBezier {
            control_points: Tensor::<CpuRuntime>::from_slice(
                &[0.0f64, 0.0, 1.0, 2.0, 3.0, 1.0],
                &[3, 2],
                &device,
            ),
            weights: Tensor::<CpuRuntime>::from_slice(&[1.0f64, 1.0, 1.0], &[3], &device),
            degree: 2,
        };

        let ts_host = [0.0f64, 0.2, 0.5, 0.7, 1.0];
        let ts = Tensor::<CpuRuntime>::from_slice(&ts_host, &[5], &device);
        let points = client.rational_bezier_evaluate(&curve, &ts).unwrap();
        assert_eq!(points.shape(), &[5, 2]);

        let values: Vec<f64> = points.to_vec();
        for (i, &t) in ts_host.iter().enumerate() {
            let u = 1.0 - t;
            let b = [u * u, 2.0 * t * u, t * t];
            for dim in 0..2 {
                let want: f64 = (0..3).map(|j| b[j] * p[j][dim]).sum();
                assert!((values[i * 2 + dim] - want).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_rational_weights_pull_toward_heavy_point() {
        let (device, client) = setup();

        // At t = 0.5, raising the middle weight moves the curve toward the
        // middle control point relative to the uniform-weight curve.
        let control_points = Tensor::<CpuRuntime>::from_slice(
            &[0.0f64, 0.0, 1.0, 1.0, 2.0, 0.0],
            &[3, 2],
            &device,
        );
        let ts = Tensor::<CpuRuntime>::from_slice(&[0.5f64], &[1], &device);

        let uniform = RationalBezier {
            control_points: control_points.clone(),
            weights: Tensor::<CpuRuntime>::from_slice(&[1.0f64, 1.0, 1.0], &[3], &device),
            degree: 2,
        };
        let heavy = RationalBezier {
            control_points,
            weights: Tensor::<CpuRuntime>::from_slice(&[1.0f64, 4.0, 1.0], &[3], &device),
            degree: 2,
        };

        let y_uniform: Vec<f64> = client.rational_bezier_evaluate(&uniform, &ts).unwrap().to_vec();
        let y_heavy: Vec<f64> = client.rational_bezier_evaluate(&heavy, &ts).unwrap().to_vec();

        assert!((y_uniform[1] - 0.5).abs() < 1e-12);
        assert!(y_heavy[1] > y_uniform[1]);
        assert!(y_heavy[1] < 1.0);
    }

    #[test]
    fn test_endpoint_interpolation() {
        let (device, client) = setup();

        let curve = RationalBezier {
            control_points: Tensor::<CpuRuntime>::from_slice(
                &[-1.0f64, 2.0, 0.5, 0.5, 4.0, -3.0],
                &[3, 2],
                &device,
            ),
            weights: Tensor::<CpuRuntime>::from_slice(&[2.0f64, 0.5, 3.0], &[3], &device),
            degree: 2,
        };

        let ts = Tensor::<CpuRuntime>::from_slice(&[0.0f64, 1.0], &[2], &device);
        let points: Vec<f64> = client.rational_bezier_evaluate(&curve, &ts).unwrap().to_vec();

        // Rational Bezier curves interpolate their endpoints for any
        // positive endpoint weights.
        assert!((points[0] + 1.0).abs() < 1e-12);
        assert!((points[1] - 2.0).abs() < 1e-12);
        assert!((points[2] - 4.0).abs() < 1e-12);
        assert!((points[3] + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_control_point_count_mismatch() {
        let (device, client) = setup();

        let curve = RationalBezier {
            control_points: Tensor::<CpuRuntime>::from_slice(
                &[0.0f64, 0.0, 1.0, 1.0],
                &[2, 2],
                &device,
            ),
            weights: Tensor::<CpuRuntime>::from_slice(&[1.0f64, 1.0], &[2], &device),
            degree: 2,
        };

        let ts = Tensor::<CpuRuntime>::from_slice(&[0.5f64], &[1], &device);
        let err = client.rational_bezier_evaluate(&curve, &ts).unwrap_err();
        assert!(matches!(err, BezierError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_zero_row_sum_is_reported() {
        let (device, client) = setup();

        // With weights [1, 0] the weighted basis at t = 1 is [0, 0].
        let curve = RationalBezier {
            control_points: Tensor::<CpuRuntime>::from_slice(
                &[0.0f64, 0.0, 1.0, 0.0],
                &[2, 2],
                &device,
            ),
            weights: Tensor::<CpuRuntime>::from_slice(&[1.0f64, 0.0], &[2], &device),
            degree: 1,
        };

        let ts = Tensor::<CpuRuntime>::from_slice(&[0.0f64, 0.5, 1.0], &[3], &device);
        let err = client.rational_bezier_evaluate(&curve, &ts).unwrap_err();
        assert!(matches!(err, BezierError::DegenerateWeights { row: 2 }));
    }
}
