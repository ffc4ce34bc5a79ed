pub mod basis;
pub mod rational;

pub use basis::BezierBasisAlgorithms;
pub use rational::{RationalBezier, RationalBezierAlgorithms};
