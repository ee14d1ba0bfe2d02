//! Activity records and their parsers
//!
//! Records arrive as comma-separated strings without escaping or trimming:
//! `"<steps>,<duration>"` for a day and `"<steps>,<label>,<duration>"` for a
//! training session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::duration::{parse_duration, ActivityDuration};
use crate::errors::ActivityError;
use crate::validation::{validate_duration, validate_steps};

/// Label of a running session
pub const RUNNING_LABEL: &str = "Бег";

/// Label of a walking session
pub const WALKING_LABEL: &str = "Ходьба";

/// Body measurements supplied with every computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
}

impl UserProfile {
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
        }
    }
}

/// Supported training activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Running,
    Walking,
}

impl ActivityKind {
    /// The label used in records and reports
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Running => RUNNING_LABEL,
            ActivityKind::Walking => WALKING_LABEL,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Labels match exactly, case and surrounding spaces included
impl FromStr for ActivityKind {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            RUNNING_LABEL => Ok(ActivityKind::Running),
            WALKING_LABEL => Ok(ActivityKind::Walking),
            _ => Err(ActivityError::UnknownActivity(s.to_string())),
        }
    }
}

/// Steps walked over a period of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    pub steps: i64,
    pub duration: ActivityDuration,
}

/// A single training session; the label is kept as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRecord {
    pub steps: i64,
    pub activity: String,
    pub duration: ActivityDuration,
}

impl TrainingRecord {
    /// Resolve the label into a supported activity
    pub fn kind(&self) -> Result<ActivityKind, ActivityError> {
        self.activity.parse()
    }
}

fn parse_steps(text: &str) -> Result<i64, ActivityError> {
    let steps = text.parse::<i64>().map_err(ActivityError::ParseSteps)?;
    validate_steps(steps)?;
    Ok(steps)
}

fn parse_positive_duration(text: &str) -> Result<ActivityDuration, ActivityError> {
    let duration = parse_duration(text)?;
    validate_duration(duration)?;
    Ok(duration)
}

/// Parse a `"<steps>,<duration>"` record, e.g. `"5000,30m"`
pub fn parse_step_record(data: &str) -> Result<StepRecord, ActivityError> {
    let parts: Vec<&str> = data.split(',').collect();
    let [steps, duration] = parts.as_slice() else {
        return Err(ActivityError::Format {
            expected: "steps,duration",
            data: data.to_string(),
        });
    };

    Ok(StepRecord {
        steps: parse_steps(steps)?,
        duration: parse_positive_duration(duration)?,
    })
}

/// Parse a `"<steps>,<activity>,<duration>"` record, e.g. `"5000,Бег,30m"`
///
/// The label is not checked here; see [`TrainingRecord::kind`].
pub fn parse_training_record(data: &str) -> Result<TrainingRecord, ActivityError> {
    let parts: Vec<&str> = data.split(',').collect();
    let [steps, activity, duration] = parts.as_slice() else {
        return Err(ActivityError::Format {
            expected: "steps,activity,duration",
            data: data.to_string(),
        });
    };

    Ok(TrainingRecord {
        steps: parse_steps(steps)?,
        activity: activity.to_string(),
        duration: parse_positive_duration(duration)?,
    })
}

impl FromStr for StepRecord {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_step_record(s)
    }
}

impl FromStr for TrainingRecord {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_training_record(s)
    }
}
