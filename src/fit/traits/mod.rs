pub mod loss;
pub mod parameterize;

pub use loss::{BezierFitAlgorithms, BezierFitLoss, BezierFitOptions, BezierFitValue};
pub use parameterize::ChordLengthAlgorithms;
