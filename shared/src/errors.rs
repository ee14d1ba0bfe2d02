//! Error types for the Fitness Tracker

use std::num::ParseIntError;

use thiserror::Error;

use crate::duration::{ActivityDuration, DurationParseError};

/// Errors raised while parsing, validating or computing an activity
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActivityError {
    #[error("invalid data format, expected '{expected}', got: {data}")]
    Format { expected: &'static str, data: String },

    #[error("parsing steps failed: {0}")]
    ParseSteps(#[source] ParseIntError),

    #[error("parsing duration failed: {0}")]
    ParseDuration(#[from] DurationParseError),

    #[error("steps must be greater than zero, got: {0}")]
    NonPositiveSteps(i64),

    #[error("duration must be greater than zero, got: {0}")]
    NonPositiveDuration(ActivityDuration),

    #[error("weight must be greater than zero, got: {0}")]
    NonPositiveWeight(f64),

    #[error("height must be greater than zero, got: {0}")]
    NonPositiveHeight(f64),

    #[error("неизвестный тип тренировки")]
    UnknownActivity(String),
}

/// Coarse classification of an [`ActivityError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong number of fields in a record
    Format,
    /// Step count or duration text could not be parsed
    Parse,
    /// A value that must be positive was not
    Range,
    /// Activity label is not one of the supported ones
    UnknownActivity,
}

impl ActivityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActivityError::Format { .. } => ErrorKind::Format,
            ActivityError::ParseSteps(_) | ActivityError::ParseDuration(_) => ErrorKind::Parse,
            ActivityError::NonPositiveSteps(_)
            | ActivityError::NonPositiveDuration(_)
            | ActivityError::NonPositiveWeight(_)
            | ActivityError::NonPositiveHeight(_) => ErrorKind::Range,
            ActivityError::UnknownActivity(_) => ErrorKind::UnknownActivity,
        }
    }
}
