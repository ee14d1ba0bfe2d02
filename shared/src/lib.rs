//! Fitness Tracker Shared Library
//!
//! Parsing, validation and arithmetic behind the daily step and training
//! reports, used by the command-line tool and the WASM module.

pub mod activity_math;
pub mod duration;
pub mod errors;
pub mod records;
pub mod reports;
pub mod validation;

// Re-export commonly used items
pub use activity_math::*;
pub use duration::{parse_duration, ActivityDuration, DurationParseError};
pub use errors::*;
pub use records::*;
pub use reports::*;
