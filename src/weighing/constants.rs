/// Bait weight (g) included in every scale reading.
pub const BAIT_WEIGHT_OFFSET: f64 = 0.2;

/// Lower edge (g, exclusive) of a plausible drongo weight.
pub const DRONGO_WEIGHT_LOWER_BOUND: f64 = 42.0;

/// Upper edge (g, exclusive) of a plausible drongo weight.
pub const DRONGO_WEIGHT_UPPER_BOUND: f64 = 60.0;
