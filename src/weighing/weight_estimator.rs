use crate::config::{ConfigError, EstimatorConfig};
use crate::utils::math;
use crate::weighing::{EstimationError, FilterMode, WeightEstimate};
use log::{debug, warn};

/// Estimates a bird's true weight from raw scale readings.
///
/// Each reading has the bait offset subtracted, readings outside the
/// configured band are dropped according to the [`FilterMode`], and the
/// result is the mean of the mode(s) of what remains.
///
/// The estimator holds no mutable state; one instance can be shared
/// across threads freely.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WeightEstimator {
    config: EstimatorConfig,
}

impl WeightEstimator {
    /// Reference constants with the legacy filter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter_mode(filter_mode: FilterMode) -> Self {
        Self {
            config: EstimatorConfig::default().with_filter_mode(filter_mode),
        }
    }

    pub fn try_new(config: EstimatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    #[inline]
    pub fn filter_mode(&self) -> FilterMode {
        self.config.filter_mode
    }

    /// Subtracts the bait offset from every reading, keeping order.
    pub fn correct(&self, samples: &[f64]) -> Vec<f64> {
        samples
            .iter()
            .map(|&v| v - self.config.bait_offset)
            .collect()
    }

    /// Keeps the corrected values accepted by the filter predicate, in order.
    pub fn filter(&self, corrected: &[f64]) -> Vec<f64> {
        let EstimatorConfig {
            lower_bound,
            upper_bound,
            filter_mode,
            ..
        } = self.config;
        corrected
            .iter()
            .copied()
            .filter(|&w| filter_mode.accepts(w, lower_bound, upper_bound))
            .collect()
    }

    pub fn estimate(&self, samples: &[f64]) -> Result<f64, EstimationError> {
        self.estimate_detailed(samples).map(|e| e.weight)
    }

    pub fn estimate_detailed(&self, samples: &[f64]) -> Result<WeightEstimate, EstimationError> {
        if samples.is_empty() {
            return Err(EstimationError::EmptyInput);
        }

        let corrected = self.correct(samples);
        let filtered = self.filter(&corrected);
        debug!(
            "{} filter kept {}/{} corrected samples",
            self.config.filter_mode,
            filtered.len(),
            corrected.len()
        );

        let modes = math::modes(&filtered);
        let Some(weight) = math::mean(&modes) else {
            let rejected = corrected.len() - filtered.len();
            warn!(
                "no sample inside ({}, {}) after {} filtering",
                self.config.lower_bound, self.config.upper_bound, self.config.filter_mode
            );
            return Err(EstimationError::EmptyFilterResult {
                mode: self.config.filter_mode,
                rejected,
            });
        };
        debug!("modes {modes:?} -> weight {weight}");

        Ok(WeightEstimate {
            corrected,
            filtered,
            modes,
            weight,
        })
    }
}

/// Estimates with the reference offset and bounds under `filter_mode`.
pub fn estimate(samples: &[f64], filter_mode: FilterMode) -> Result<f64, EstimationError> {
    WeightEstimator::with_filter_mode(filter_mode).estimate(samples)
}
