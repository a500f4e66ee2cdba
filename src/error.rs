//! Error type for the input surfaces around the engine
//!
//! The payoff engine itself is infallible; these errors come from loading and
//! validating debt records before they reach it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayoffError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid debt '{id}': {reason}")]
    InvalidDebt { id: String, reason: String },

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unknown strategy '{0}', expected snowball, avalanche or custom")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, PayoffError>;
