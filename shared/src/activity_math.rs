//! Activity calculations module
//!
//! Distance, mean speed and calorie expenditure for running and walking,
//! computed from a step count, body measurements and elapsed time.
//!
//! `distance` and `mean_speed` return zero for non-positive inputs; the
//! calorie functions reject them with an [`ActivityError`].

use crate::duration::ActivityDuration;
use crate::errors::ActivityError;
use crate::validation::{validate_duration, validate_height, validate_steps, validate_weight};

// ============================================================================
// Constants
// ============================================================================

/// Average step length in meters
pub const STEP_LENGTH_M: f64 = 0.65;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Step length as a fraction of height
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;

/// Walking burns this fraction of the running calories
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

// ============================================================================
// Distance and Speed
// ============================================================================

/// Distance in km using a stride proportional to height
///
/// Formula: 0.45 × height(cm) × steps / 1000
pub fn distance(steps: i64, height_cm: f64) -> f64 {
    if steps <= 0 || height_cm <= 0.0 {
        return 0.0;
    }
    STEP_LENGTH_COEFFICIENT * height_cm * steps as f64 / M_IN_KM
}

/// Distance in km using the constant 0.65 m stride
pub fn fixed_stride_distance(steps: i64) -> f64 {
    steps as f64 * STEP_LENGTH_M / M_IN_KM
}

/// Mean speed in km/h
pub fn mean_speed(steps: i64, height_cm: f64, duration: ActivityDuration) -> f64 {
    if steps <= 0 || height_cm <= 0.0 || !duration.is_positive() {
        return 0.0;
    }
    distance(steps, height_cm) / duration.hours()
}

// ============================================================================
// Calories
// ============================================================================

/// Calories burned while running
///
/// Formula: weight(kg) × mean speed(km/h) × duration(min) / 60
pub fn running_calories(
    steps: i64,
    weight_kg: f64,
    height_cm: f64,
    duration: ActivityDuration,
) -> Result<f64, ActivityError> {
    validate_steps(steps)?;
    validate_weight(weight_kg)?;
    validate_height(height_cm)?;
    validate_duration(duration)?;

    Ok(weight_kg * mean_speed(steps, height_cm, duration) * duration.minutes() / MIN_IN_H)
}

/// Calories burned while walking: the running figure damped by 0.5
pub fn walking_calories(
    steps: i64,
    weight_kg: f64,
    height_cm: f64,
    duration: ActivityDuration,
) -> Result<f64, ActivityError> {
    let calories = running_calories(steps, weight_kg, height_cm, duration)?;
    Ok(calories * WALKING_CALORIES_COEFFICIENT)
}
