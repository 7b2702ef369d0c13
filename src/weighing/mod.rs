pub mod constants;
mod error;
mod filter_mode;
mod weight_estimate;
mod weight_estimator;

pub use constants::{BAIT_WEIGHT_OFFSET, DRONGO_WEIGHT_LOWER_BOUND, DRONGO_WEIGHT_UPPER_BOUND};
pub use error::EstimationError;
pub use filter_mode::FilterMode;
pub use weight_estimate::WeightEstimate;
pub use weight_estimator::{WeightEstimator, estimate};
