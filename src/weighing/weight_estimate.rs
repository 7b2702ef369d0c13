use serde::Serialize;

/// Outcome of one estimation, with every intermediate sample kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightEstimate {
    /// Readings with the bait offset removed, same order as the input.
    pub corrected: Vec<f64>,
    /// Corrected readings accepted by the range filter, order preserved.
    pub filtered: Vec<f64>,
    /// Most frequent filtered values, ascending.
    pub modes: Vec<f64>,
    /// Mean of `modes`.
    pub weight: f64,
}
