//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `PAIRWISE_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;

use crate::constants::DEFAULT_HORIZONTAL_MIN_WIDTH;
use crate::slider::SliderConfig;

/// Largest accepted `PAIRWISE_SLIDER_PRECISION`.
pub const MAX_PRECISION: u32 = 12;

/// Form configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PAIRWISE_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Slider settings shared by both quality scorers.
    pub slider: SliderConfig,

    /// Reject submissions with a blank comment. Default: `false`.
    pub comment_required: bool,

    /// Reject submissions without a preference in metadata. Default: `true`.
    pub preference_required: bool,

    /// Minimum viewport width for the horizontal layout. Default: `1200`.
    pub horizontal_min_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slider: SliderConfig::default(),
            comment_required: false,
            preference_required: true,
            horizontal_min_width: DEFAULT_HORIZONTAL_MIN_WIDTH,
        }
    }
}

impl Config {
    const ENV_SLIDER_QUANTIZED: &'static str = "PAIRWISE_SLIDER_QUANTIZED";
    const ENV_SLIDER_VALUE_COUNT: &'static str = "PAIRWISE_SLIDER_VALUE_COUNT";
    const ENV_SLIDER_MIN: &'static str = "PAIRWISE_SLIDER_MIN";
    const ENV_SLIDER_MAX: &'static str = "PAIRWISE_SLIDER_MAX";
    const ENV_SLIDER_PRECISION: &'static str = "PAIRWISE_SLIDER_PRECISION";
    const ENV_COMMENT_REQUIRED: &'static str = "PAIRWISE_COMMENT_REQUIRED";
    const ENV_PREFERENCE_REQUIRED: &'static str = "PAIRWISE_PREFERENCE_REQUIRED";
    const ENV_HORIZONTAL_MIN_WIDTH: &'static str = "PAIRWISE_HORIZONTAL_MIN_WIDTH";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let slider = SliderConfig {
            enabled: Self::parse_bool_from_env(
                Self::ENV_SLIDER_QUANTIZED,
                defaults.slider.enabled,
            )?,
            value_count: Self::parse_int_from_env(
                Self::ENV_SLIDER_VALUE_COUNT,
                defaults.slider.value_count,
            )?,
            min: Self::parse_f64_from_env(Self::ENV_SLIDER_MIN, defaults.slider.min)?,
            max: Self::parse_f64_from_env(Self::ENV_SLIDER_MAX, defaults.slider.max)?,
            precision: Self::parse_int_from_env(
                Self::ENV_SLIDER_PRECISION,
                defaults.slider.precision,
            )?,
            ..defaults.slider
        };

        let comment_required =
            Self::parse_bool_from_env(Self::ENV_COMMENT_REQUIRED, defaults.comment_required)?;
        let preference_required = Self::parse_bool_from_env(
            Self::ENV_PREFERENCE_REQUIRED,
            defaults.preference_required,
        )?;
        let horizontal_min_width = Self::parse_int_from_env(
            Self::ENV_HORIZONTAL_MIN_WIDTH,
            defaults.horizontal_min_width,
        )?;

        Ok(Self {
            slider,
            comment_required,
            preference_required,
            horizontal_min_width,
        })
    }

    /// Validates slider bounds and precision.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.slider.min.is_finite() {
            return Err(ConfigError::NonFiniteBound { name: "min" });
        }
        if !self.slider.max.is_finite() {
            return Err(ConfigError::NonFiniteBound { name: "max" });
        }
        if self.slider.min > self.slider.max {
            return Err(ConfigError::InvalidRange {
                min: self.slider.min,
                max: self.slider.max,
            });
        }
        if self.slider.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge {
                value: self.slider.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }

    fn read_var(name: &str) -> Option<String> {
        env::var(name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_bool_from_env(name: &'static str, default: bool) -> Result<bool, ConfigError> {
        let Some(value) = Self::read_var(name) else {
            return Ok(default);
        };
        match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidBool { name, value }),
        }
    }

    fn parse_int_from_env<T>(name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr<Err = std::num::ParseIntError>,
    {
        match Self::read_var(name) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::IntParseError {
                    name,
                    value,
                    source,
                }),
            None => Ok(default),
        }
    }

    fn parse_f64_from_env(name: &'static str, default: f64) -> Result<f64, ConfigError> {
        match Self::read_var(name) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::FloatParseError {
                    name,
                    value,
                    source,
                }),
            None => Ok(default),
        }
    }
}
