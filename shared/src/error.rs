//! Error types for tracker operations.
//!
//! None of these reach the user: the widget disables the matching control and
//! silently ignores the action. They exist so callers and tests can tell why an
//! action was blocked.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("meal name cannot be empty")]
    EmptyMealName,

    #[error("calories must be a whole number greater than 0, got {input:?}")]
    InvalidCalories { input: String },

    #[error("daily goal must be greater than 0, got {value}")]
    NonPositiveGoal { value: i64 },

    #[error("no meal at index {index} (list has {len})")]
    MealIndexOutOfRange { index: usize, len: usize },

    #[error("invalid tracker configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
