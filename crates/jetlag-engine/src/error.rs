//! Error types for jetlag-engine operations.
//!
//! Implausible flights are not errors: they come back as
//! [`JetLagOutcome::Invalid`](crate::planner::JetLagOutcome::Invalid).
//! These variants cover input text that cannot be read at all.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
