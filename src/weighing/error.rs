use crate::weighing::FilterMode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimationError {
    #[error("no samples to estimate from")]
    EmptyInput,

    #[error("range filter ({mode}) rejected all {rejected} corrected samples")]
    EmptyFilterResult { mode: FilterMode, rejected: usize },
}
