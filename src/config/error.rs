//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A float variable could not be parsed.
    #[error("failed to parse {name}='{value}' as a number: {source}")]
    FloatParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// An integer variable could not be parsed.
    #[error("failed to parse {name}='{value}' as an integer: {source}")]
    IntParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A boolean variable had an unrecognised value.
    #[error("invalid boolean {name}='{value}': expected one of 1/0/true/false/yes/no/on/off")]
    InvalidBool { name: &'static str, value: String },

    /// Slider bound is NaN or infinite.
    #[error("slider bound {name} must be finite")]
    NonFiniteBound { name: &'static str },

    /// Slider minimum is above the maximum.
    #[error("slider min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// Rounding precision beyond what `f64` can represent meaningfully.
    #[error("slider precision {value} exceeds the maximum of {max}")]
    PrecisionTooLarge { value: u32, max: u32 },
}
