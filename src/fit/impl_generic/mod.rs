//! Backend-agnostic implementations of the fit algorithms.

pub mod loss;
pub mod parameterize;
