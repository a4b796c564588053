//! Test fixtures for integration tests.

use std::sync::Arc;

use pairwise::{AssessmentForm, Config, FormContext, SliderConfig};

/// Ten quantized levels over `[0, 100]`.
pub fn hundred_point_config() -> Config {
    Config {
        slider: SliderConfig::quantized(10, 0.0, 100.0),
        ..Default::default()
    }
}

/// Five integer levels `1..=5`.
pub fn five_point_config() -> Config {
    Config {
        slider: SliderConfig::quantized(5, 1.0, 5.0),
        ..Default::default()
    }
}

pub fn form_with(config: Config) -> AssessmentForm {
    AssessmentForm::new(FormContext::new(Arc::new(config)))
}
