//! Backend-agnostic implementations of the Bezier basis and curve algorithms.

pub mod basis;
pub mod rational;
