use crate::config::ConfigError;
use crate::weighing::{
    BAIT_WEIGHT_OFFSET, DRONGO_WEIGHT_LOWER_BOUND, DRONGO_WEIGHT_UPPER_BOUND, FilterMode,
};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_bait_offset() -> f64 {
    BAIT_WEIGHT_OFFSET
}
fn default_lower_bound() -> f64 {
    DRONGO_WEIGHT_LOWER_BOUND
}
fn default_upper_bound() -> f64 {
    DRONGO_WEIGHT_UPPER_BOUND
}

/// Parameters of a [`WeightEstimator`](crate::weighing::WeightEstimator).
///
/// Every field falls back to the named constant when missing from JSON.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EstimatorConfig {
    #[serde(default = "default_bait_offset")]
    #[schemars(
        title = "Bait offset",
        description = "Bait weight (g) subtracted from every reading.",
        default = "default_bait_offset"
    )]
    pub bait_offset: f64,

    #[serde(default = "default_lower_bound")]
    #[schemars(
        title = "Lower bound",
        description = "Exclusive lower edge (g) of a plausible weight.",
        default = "default_lower_bound"
    )]
    pub lower_bound: f64,

    #[serde(default = "default_upper_bound")]
    #[schemars(
        title = "Upper bound",
        description = "Exclusive upper edge (g) of a plausible weight.",
        default = "default_upper_bound"
    )]
    pub upper_bound: f64,

    #[serde(default)]
    #[schemars(
        title = "Filter mode",
        description = "How the bounds are combined: legacy-or or strict-and."
    )]
    pub filter_mode: FilterMode,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            bait_offset: default_bait_offset(),
            lower_bound: default_lower_bound(),
            upper_bound: default_upper_bound(),
            filter_mode: FilterMode::default(),
        }
    }
}

impl EstimatorConfig {
    #[inline]
    pub fn with_filter_mode(mut self, filter_mode: FilterMode) -> Self {
        self.filter_mode = filter_mode;
        self
    }

    /// JSON Schema of the config document.
    pub fn schema() -> Schema {
        schema_for!(EstimatorConfig)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, v) in [
            ("bait_offset", self.bait_offset),
            ("lower_bound", self.lower_bound),
            ("upper_bound", self.upper_bound),
        ] {
            if !v.is_finite() {
                return Err(ConfigError::InvalidParameter(format!(
                    "{name} must be finite, got {v}"
                )));
            }
        }
        if self.lower_bound >= self.upper_bound {
            return Err(ConfigError::InvalidParameter(format!(
                "lower_bound ({}) must be below upper_bound ({})",
                self.lower_bound, self.upper_bound
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::io::Write;

    fn root_props() -> Value {
        let v = serde_json::to_value(EstimatorConfig::schema()).expect("schema to JSON");
        v.get("properties").cloned().unwrap_or_else(|| json!({}))
    }

    #[test]
    fn default_functions_are_expected() {
        assert!((default_bait_offset() - 0.2).abs() < f64::EPSILON);
        assert!((default_lower_bound() - 42.0).abs() < f64::EPSILON);
        assert!((default_upper_bound() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_is_valid_and_legacy() {
        let c = EstimatorConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.filter_mode, FilterMode::LegacyOr);
    }

    #[test]
    fn missing_fields_apply_defaults() {
        let c = EstimatorConfig::from_json_str(r#"{ "filter_mode": "strict-and" }"#).unwrap();
        assert_eq!(
            c,
            EstimatorConfig::default().with_filter_mode(FilterMode::StrictAnd)
        );

        let empty = EstimatorConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, EstimatorConfig::default());
    }

    #[test]
    fn serde_roundtrip_keeps_fields() {
        let c0 = EstimatorConfig {
            bait_offset: 0.5,
            lower_bound: 30.0,
            upper_bound: 70.0,
            filter_mode: FilterMode::StrictAnd,
        };
        let j = serde_json::to_string(&c0).unwrap();
        let c1 = EstimatorConfig::from_json_str(&j).unwrap();
        assert_eq!(c0, c1);
    }

    #[test]
    fn inverted_or_equal_bounds_are_rejected() {
        let err = EstimatorConfig::from_json_str(r#"{ "lower_bound": 60, "upper_bound": 42 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter(_)), "{err}");

        let c = EstimatorConfig {
            lower_bound: 50.0,
            upper_bound: 50.0,
            ..EstimatorConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let c = EstimatorConfig {
            bait_offset: f64::NAN,
            ..EstimatorConfig::default()
        };
        let msg = c.validate().unwrap_err().to_string();
        assert!(msg.contains("bait_offset"), "{msg}");

        let c = EstimatorConfig {
            upper_bound: f64::INFINITY,
            ..EstimatorConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = EstimatorConfig::from_json_str(r#"{ "filter_mode": "sideways" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)), "{err}");
    }

    #[test]
    fn loads_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{ "bait_offset": 0.3, "filter_mode": "strict-and" }}"#).unwrap();
        let c = EstimatorConfig::from_json_file(f.path()).unwrap();
        assert!((c.bait_offset - 0.3).abs() < f64::EPSILON);
        assert_eq!(c.filter_mode, FilterMode::StrictAnd);
        assert!((c.lower_bound - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EstimatorConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "{err}");
    }

    #[test]
    fn schema_exposes_all_fields() {
        let props = root_props();
        for key in ["bait_offset", "lower_bound", "upper_bound", "filter_mode"] {
            assert!(props.get(key).is_some(), "missing {key} in {props}");
        }
        assert_eq!(
            props["bait_offset"].get("title").and_then(Value::as_str),
            Some("Bait offset")
        );
    }
}
