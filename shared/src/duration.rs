//! Compact duration strings
//!
//! Activity records carry their duration as a unit-suffixed string such as
//! `"30m"`, `"1h30m"` or `"1.5h"`. The accepted grammar is an optional sign
//! followed by one or more `<decimal><unit>` pairs, where the unit is one of
//! `ns`, `us` (`µs`, `μs`), `ms`, `s`, `m` or `h`. A bare `"0"` is zero.
//!
//! Values are kept as signed nanoseconds so that non-positive durations can be
//! represented and rejected by validation rather than by the parser.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex_lite::Regex;
use thiserror::Error;

const NANOSECOND: i64 = 1;
const MICROSECOND: i64 = 1_000 * NANOSECOND;
const MILLISECOND: i64 = 1_000 * MICROSECOND;
const SECOND: i64 = 1_000 * MILLISECOND;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;

/// Duration text could not be turned into a span
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("invalid duration \"{0}\"")]
    Invalid(String),

    #[error("duration \"{0}\" is out of range")]
    Overflow(String),
}

/// A signed time span with nanosecond resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ActivityDuration {
    nanos: i64,
}

impl ActivityDuration {
    pub const ZERO: ActivityDuration = ActivityDuration { nanos: 0 };

    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// Whole minutes, saturating at the `i64` nanosecond range
    pub const fn from_minutes(minutes: i64) -> Self {
        Self {
            nanos: minutes.saturating_mul(MINUTE),
        }
    }

    pub const fn as_nanos(&self) -> i64 {
        self.nanos
    }

    pub const fn is_positive(&self) -> bool {
        self.nanos > 0
    }

    /// Span expressed in fractional hours
    pub fn hours(&self) -> f64 {
        let whole = self.nanos / HOUR;
        let rest = self.nanos % HOUR;
        whole as f64 + rest as f64 / HOUR as f64
    }

    /// Span expressed in fractional minutes
    pub fn minutes(&self) -> f64 {
        let whole = self.nanos / MINUTE;
        let rest = self.nanos % MINUTE;
        whole as f64 + rest as f64 / MINUTE as f64
    }
}

impl From<ActivityDuration> for chrono::Duration {
    fn from(duration: ActivityDuration) -> Self {
        chrono::Duration::nanoseconds(duration.nanos)
    }
}

impl fmt::Display for ActivityDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", chrono::Duration::from(*self))
    }
}

fn duration_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[-+]?(?:(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:ns|us|µs|μs|ms|s|m|h))+$")
            .expect("duration pattern is valid")
    })
}

fn component_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([0-9]+(?:\.[0-9]*)?|\.[0-9]+)(ns|us|µs|μs|ms|s|m|h)")
            .expect("duration component pattern is valid")
    })
}

fn unit_nanos(unit: &str) -> i64 {
    match unit {
        "ns" => NANOSECOND,
        "us" | "µs" | "μs" => MICROSECOND,
        "ms" => MILLISECOND,
        "s" => SECOND,
        "m" => MINUTE,
        _ => HOUR,
    }
}

/// Nanoseconds contributed by one `<decimal><unit>` pair
fn component_nanos(number: &str, unit: i64) -> Option<u64> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));

    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut nanos = whole.checked_mul(unit as u64)?;

    if !fraction.is_empty() {
        // Digits past f64 precision contribute nothing measurable
        let digits = &fraction[..fraction.len().min(18)];
        let scaled: f64 = digits.parse::<u64>().ok()? as f64 / 10f64.powi(digits.len() as i32);
        nanos = nanos.checked_add((scaled * unit as f64) as u64)?;
    }

    Some(nanos)
}

/// Parse a compact duration string such as `"1h30m"`
pub fn parse_duration(text: &str) -> Result<ActivityDuration, DurationParseError> {
    if matches!(text, "0" | "+0" | "-0") {
        return Ok(ActivityDuration::ZERO);
    }
    if !duration_regex().is_match(text) {
        return Err(DurationParseError::Invalid(text.to_string()));
    }

    let overflow = || DurationParseError::Overflow(text.to_string());
    let negative = text.starts_with('-');

    let mut total: u64 = 0;
    for caps in component_regex().captures_iter(text) {
        let nanos = component_nanos(&caps[1], unit_nanos(&caps[2])).ok_or_else(overflow)?;
        total = total.checked_add(nanos).ok_or_else(overflow)?;
    }

    let signed = if negative {
        -(total as i128)
    } else {
        total as i128
    };
    let nanos = i64::try_from(signed).map_err(|_| overflow())?;

    Ok(ActivityDuration::from_nanos(nanos))
}

impl FromStr for ActivityDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("30m", 30 * MINUTE)]
    #[case("1h30m", HOUR + 30 * MINUTE)]
    #[case("1.5h", HOUR + 30 * MINUTE)]
    #[case("90s", 90 * SECOND)]
    #[case("250ms", 250 * MILLISECOND)]
    #[case("10us", 10 * MICROSECOND)]
    #[case("10µs", 10 * MICROSECOND)]
    #[case("7ns", 7)]
    #[case(".5m", 30 * SECOND)]
    #[case("1.m", MINUTE)]
    #[case("+2h", 2 * HOUR)]
    #[case("-10m", -10 * MINUTE)]
    #[case("0", 0)]
    #[case("0s", 0)]
    fn test_parse_valid(#[case] text: &str, #[case] nanos: i64) {
        assert_eq!(parse_duration(text).unwrap().as_nanos(), nanos);
    }

    #[rstest]
    #[case("")]
    #[case("30")]
    #[case("m")]
    #[case("30 m")]
    #[case(" 30m")]
    #[case("30x")]
    #[case("1h30")]
    #[case(".m")]
    #[case("--1h")]
    #[case("abc")]
    fn test_parse_invalid(#[case] text: &str) {
        assert!(matches!(
            parse_duration(text),
            Err(DurationParseError::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            parse_duration("3000000h"),
            Err(DurationParseError::Overflow(_))
        ));
        assert!(matches!(
            parse_duration("99999999999999999999s"),
            Err(DurationParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_hours_and_minutes() {
        let d: ActivityDuration = "1h30m".parse().unwrap();
        assert_eq!(d.hours(), 1.5);
        assert_eq!(d.minutes(), 90.0);

        let d: ActivityDuration = "45s".parse().unwrap();
        assert_eq!(d.minutes(), 0.75);
    }

    #[test]
    fn test_positivity() {
        assert!(parse_duration("1ns").unwrap().is_positive());
        assert!(!parse_duration("0").unwrap().is_positive());
        assert!(!parse_duration("-1h").unwrap().is_positive());
    }

    #[test]
    fn test_display_uses_iso_8601() {
        assert_eq!(ActivityDuration::from_minutes(30).to_string(), "PT1800S");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: hours and minutes parse to the same span as their sum in minutes
        #[test]
        fn prop_hours_minutes_compose(h in 0i64..100, m in 0i64..60) {
            let d = parse_duration(&format!("{}h{}m", h, m)).unwrap();
            prop_assert_eq!(d, ActivityDuration::from_minutes(h * 60 + m));
        }

        /// Property: minutes() is exact for whole minutes
        #[test]
        fn prop_whole_minutes(m in 1i64..100_000) {
            let d = parse_duration(&format!("{}m", m)).unwrap();
            prop_assert_eq!(d.minutes(), m as f64);
        }
    }
}
