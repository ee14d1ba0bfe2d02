//! Daily and training reports
//!
//! Two report flavours are produced from raw records:
//!
//! - the daily step report uses the constant stride for distance and returns an
//!   empty string on any failure (parse failures are logged);
//! - the training report uses the height-based stride and surfaces every
//!   failure to the caller.
//!
//! The structured summaries behind both are public as well; their `Display`
//! output is the report text.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::activity_math::{
    distance, fixed_stride_distance, mean_speed, running_calories, walking_calories,
};
use crate::errors::ActivityError;
use crate::records::{parse_step_record, parse_training_record, ActivityKind, UserProfile};
use crate::validation::validate_body;

/// Values shown in the daily step report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub steps: i64,
    pub distance_km: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.\n",
            self.steps, self.distance_km, self.calories_kcal
        )
    }
}

/// Values shown in the training report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub activity: ActivityKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}\n",
            self.activity,
            self.duration_hours,
            self.distance_km,
            self.speed_kmh,
            self.calories_kcal
        )
    }
}

/// Compute the daily summary for a `"<steps>,<duration>"` record
pub fn summarize_day(data: &str, profile: &UserProfile) -> Result<DailySummary, ActivityError> {
    validate_body(profile.weight_kg, profile.height_cm)?;

    let record = parse_step_record(data)?;
    let calories = walking_calories(
        record.steps,
        profile.weight_kg,
        profile.height_cm,
        record.duration,
    )?;

    let summary = DailySummary {
        steps: record.steps,
        distance_km: fixed_stride_distance(record.steps),
        calories_kcal: calories,
    };
    debug!(steps = summary.steps, calories = summary.calories_kcal, "Daily summary computed");
    Ok(summary)
}

/// Compute the training summary for a `"<steps>,<activity>,<duration>"` record
pub fn summarize_training(
    data: &str,
    profile: &UserProfile,
) -> Result<TrainingSummary, ActivityError> {
    let UserProfile {
        weight_kg,
        height_cm,
    } = *profile;
    validate_body(weight_kg, height_cm)?;

    let record = parse_training_record(data).map_err(|err| {
        warn!(error = %err, "Failed to parse training record");
        err
    })?;

    let activity = record.kind()?;
    let calories = match activity {
        ActivityKind::Running => running_calories(record.steps, weight_kg, height_cm, record.duration)?,
        ActivityKind::Walking => walking_calories(record.steps, weight_kg, height_cm, record.duration)?,
    };

    let summary = TrainingSummary {
        activity,
        duration_hours: record.duration.hours(),
        distance_km: distance(record.steps, height_cm),
        speed_kmh: mean_speed(record.steps, height_cm, record.duration),
        calories_kcal: calories,
    };
    debug!(activity = %summary.activity, calories = summary.calories_kcal, "Training summary computed");
    Ok(summary)
}

/// Daily step report; an empty string means nothing could be reported
pub fn daily_step_report(data: &str, weight_kg: f64, height_cm: f64) -> String {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return String::new();
    }

    match summarize_day(data, &UserProfile::new(weight_kg, height_cm)) {
        Ok(summary) => summary.to_string(),
        Err(err) => {
            warn!(error = %err, "Failed to build daily step report");
            String::new()
        }
    }
}

/// Training report for a single session
pub fn training_report(data: &str, weight_kg: f64, height_cm: f64) -> Result<String, ActivityError> {
    summarize_training(data, &UserProfile::new(weight_kg, height_cm)).map(|s| s.to_string())
}
