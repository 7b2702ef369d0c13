use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Acceptance predicate applied to corrected readings.
///
/// `LegacyOr` keeps `w > lower || w < upper`, which holds for every real
/// `w` whenever `lower < upper`: the filter passes everything except NaN.
/// `StrictAnd` keeps only the open band `lower < w < upper`.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FilterMode {
    #[default]
    #[strum(
        message = "Legacy OR",
        detailed_message = "Keep readings above the lower bound or below the upper bound (accepts all)."
    )]
    LegacyOr,

    #[strum(
        message = "Strict AND",
        detailed_message = "Keep readings strictly between the lower and upper bounds."
    )]
    StrictAnd,
}

impl FilterMode {
    #[inline]
    pub fn accepts(self, w: f64, lower: f64, upper: f64) -> bool {
        match self {
            FilterMode::LegacyOr => w > lower || w < upper,
            FilterMode::StrictAnd => w > lower && w < upper,
        }
    }
}
