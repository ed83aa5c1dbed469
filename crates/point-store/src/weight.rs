//! Pluggable point scoring.

use heat_common::PointData;

/// Scores a point's payload into a rendering weight.
///
/// A weight of exactly 0 suppresses the point at compositing time; values
/// above 1 darken the stamp beyond its plain intensity.
pub trait WeightEvaluator: Send + Sync {
    /// Evaluate the payload and return its weight.
    fn evaluate(&self, data: &PointData) -> f64;
}

impl<F> WeightEvaluator for F
where
    F: Fn(&PointData) -> f64 + Send + Sync,
{
    fn evaluate(&self, data: &PointData) -> f64 {
        self(data)
    }
}
