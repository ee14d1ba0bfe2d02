//! Input validation functions
//!
//! Every computation requires strictly positive inputs. Comparisons are written
//! as `<= 0` so that a NaN weight or height is passed through rather than
//! rejected.

use crate::duration::ActivityDuration;
use crate::errors::ActivityError;

/// Validate step count
pub fn validate_steps(steps: i64) -> Result<(), ActivityError> {
    if steps <= 0 {
        return Err(ActivityError::NonPositiveSteps(steps));
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), ActivityError> {
    if weight_kg <= 0.0 {
        return Err(ActivityError::NonPositiveWeight(weight_kg));
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height(height_cm: f64) -> Result<(), ActivityError> {
    if height_cm <= 0.0 {
        return Err(ActivityError::NonPositiveHeight(height_cm));
    }
    Ok(())
}

/// Validate activity duration
pub fn validate_duration(duration: ActivityDuration) -> Result<(), ActivityError> {
    if !duration.is_positive() {
        return Err(ActivityError::NonPositiveDuration(duration));
    }
    Ok(())
}

/// Validate a weight/height pair, weight first
pub fn validate_body(weight_kg: f64, height_cm: f64) -> Result<(), ActivityError> {
    validate_weight(weight_kg)?;
    validate_height(height_cm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_steps() {
        assert!(validate_steps(1).is_ok());
        assert!(validate_steps(0).is_err());
        assert!(validate_steps(-100).is_err());
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(70.0).is_ok());
        assert!(validate_weight(0.0).is_err());
        assert!(validate_weight(-1.0).is_err());
        assert!(validate_weight(f64::NAN).is_ok());
    }

    #[test]
    fn test_validate_height() {
        assert!(validate_height(175.0).is_ok());
        assert!(validate_height(0.0).is_err());
        assert!(validate_height(-175.0).is_err());
    }

    #[test]
    fn test_validate_duration() {
        assert!(validate_duration(ActivityDuration::from_minutes(1)).is_ok());
        assert!(validate_duration(ActivityDuration::ZERO).is_err());
        assert!(validate_duration(ActivityDuration::from_minutes(-5)).is_err());
    }

    #[test]
    fn test_validate_body_checks_weight_first() {
        assert_eq!(
            validate_body(0.0, 0.0),
            Err(ActivityError::NonPositiveWeight(0.0))
        );
        assert_eq!(
            validate_body(70.0, -1.0),
            Err(ActivityError::NonPositiveHeight(-1.0))
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_positive_weight_valid(weight in 0.001f64..1000.0) {
            prop_assert!(validate_weight(weight).is_ok());
        }

        #[test]
        fn prop_non_positive_height_invalid(height in -1000.0f64..=0.0) {
            prop_assert!(validate_height(height).is_err());
        }
    }
}
