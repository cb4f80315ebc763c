//! Error types for the itinerary planner.

use thiserror::Error as ThisError;

/// Failure of a cost provider to produce a matrix for a day.
///
/// The planner recovers from these per day: the affected day keeps its
/// insertion order and is flagged as unoptimized.
#[derive(Debug, ThisError)]
pub enum ProviderError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("location has no coordinates: {0}")]
    MissingCoordinates(String),
    #[error("cost service returned {code}: {message}")]
    Service { code: String, message: String },
    #[error("cost matrix has wrong shape: expected {expected} entries, got {actual}")]
    Shape { expected: usize, actual: usize },
}

/// Configuration errors surfaced before any allocation happens.
#[derive(Debug, ThisError)]
pub enum PlanError {
    #[error("food percentages must be non-negative and sum to 100 (got {fast}, {local}, {fine})")]
    InvalidPercentages { fast: f64, local: f64, fine: f64 },
    #[error("invalid plan options: {0}")]
    InvalidOptions(String),
}

/// Errors reading configuration from the environment.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, PlanError>;

impl PlanError {
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions(message.into())
    }
}

impl ProviderError {
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }
}
