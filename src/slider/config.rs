use crate::constants::{
    DEFAULT_PRECISION, DEFAULT_QUALITY_CLASSES, DEFAULT_SLIDER_MAX, DEFAULT_SLIDER_MIN,
    DEFAULT_UNSET_CLASS, DEFAULT_VALUE_COUNT, STEP_PRECISION, round_to,
};

/// Configuration for [`QuantizedSlider`](super::QuantizedSlider).
///
/// Every field has a default and nothing here is validated. Out-of-range
/// values degrade the widget instead of failing (see [`SliderConfig::derived_step`]).
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    /// Quantized mode. When `false` the slider is a free continuous scalar.
    pub enabled: bool,
    /// Number of discrete levels. Zero or negative disables quantization.
    pub value_count: i64,
    /// Lower bound of the track.
    pub min: f64,
    /// Upper bound of the track.
    pub max: f64,
    /// Explicit step; derived from `min`/`max`/`value_count` when `None`.
    pub step: Option<f64>,
    /// One class per level, lowest first.
    pub quality_classes: Vec<String>,
    /// Class shown while the slider is untouched.
    pub unset_class: String,
    /// Decimal rounding applied to formatted values.
    pub precision: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            value_count: DEFAULT_VALUE_COUNT,
            min: DEFAULT_SLIDER_MIN,
            max: DEFAULT_SLIDER_MAX,
            step: None,
            quality_classes: DEFAULT_QUALITY_CLASSES
                .iter()
                .map(|class| class.to_string())
                .collect(),
            unset_class: DEFAULT_UNSET_CLASS.to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl SliderConfig {
    /// Quantized configuration with `value_count` levels over `[min, max]`.
    pub fn quantized(value_count: i64, min: f64, max: f64) -> Self {
        Self {
            enabled: true,
            value_count,
            min,
            max,
            ..Default::default()
        }
    }

    /// Continuous configuration over the default `[0, 100]` track.
    pub fn continuous() -> Self {
        Self::default()
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_quality_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quality_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_unset_class(mut self, class: impl Into<String>) -> Self {
        self.unset_class = class.into();
        self
    }

    /// Step between adjacent levels.
    ///
    /// `None` in continuous mode, `Some(0.0)` when there is at most one level,
    /// otherwise `(max - min) / (value_count - 1)` rounded to six decimals.
    pub fn derived_step(&self) -> Option<f64> {
        if !self.enabled {
            return None;
        }
        if self.value_count <= 1 {
            return Some(0.0);
        }
        let raw = (self.max - self.min) / (self.value_count - 1) as f64;
        Some(round_to(raw, STEP_PRECISION))
    }

    /// The configured step if one was given, else [`derived_step`](Self::derived_step).
    pub fn effective_step(&self) -> Option<f64> {
        match self.step {
            Some(step) if self.enabled => Some(step),
            _ => self.derived_step(),
        }
    }
}
