use tracing::debug;

use super::config::SliderConfig;
use super::levels::{discrete_levels, nearest_level_index, snap_to_levels};
use crate::constants::{UNSET_SCORE, round_to};

/// Payload delivered to slider observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderChange {
    /// Value the submission record should carry (`-1` while untouched).
    pub stored_value: f64,
    /// Snapped and rounded handle position.
    pub formatted_value: f64,
    pub touched: bool,
}

/// Callback invoked on every user-driven move or commit.
pub type SliderObserver = Box<dyn FnMut(&SliderChange) + Send>;

/// A continuous pointer surface that optionally snaps onto evenly spaced levels.
///
/// The slider tracks whether the evaluator has ever moved it. Until then the
/// stored value is [`UNSET_SCORE`] no matter where the handle sits, which keeps
/// "default position" distinct from "deliberately chose the lowest level".
pub struct QuantizedSlider {
    config: SliderConfig,
    levels: Vec<f64>,
    position: f64,
    touched: bool,
    stored_value: f64,
    visual_class: Option<String>,
    observers: Vec<SliderObserver>,
}

impl std::fmt::Debug for QuantizedSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuantizedSlider")
            .field("config", &self.config)
            .field("levels", &self.levels)
            .field("position", &self.position)
            .field("touched", &self.touched)
            .field("stored_value", &self.stored_value)
            .field("visual_class", &self.visual_class)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl QuantizedSlider {
    /// Creates an untouched slider with the handle at its reset position.
    pub fn new(config: SliderConfig) -> Self {
        let levels = discrete_levels(&config);
        let mut slider = Self {
            config,
            levels,
            position: 0.0,
            touched: false,
            stored_value: UNSET_SCORE,
            visual_class: None,
            observers: Vec::new(),
        };
        slider.position = slider.reset_position();
        slider.refresh();
        slider
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The discrete level set (empty in continuous mode).
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Step between levels, `None` in continuous mode.
    pub fn step(&self) -> Option<f64> {
        self.config.effective_step()
    }

    /// `true` when snapping is active: quantized mode with at least one level.
    #[inline]
    pub fn is_quantized(&self) -> bool {
        self.config.enabled && !self.levels.is_empty()
    }

    #[inline]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Current handle position (already snapped and rounded).
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Registers an observer for user-driven changes.
    pub fn subscribe(&mut self, observer: SliderObserver) {
        self.observers.push(observer);
    }

    /// Snaps a raw value onto the nearest level (identity in continuous mode).
    pub fn snap_value(&self, value: f64) -> f64 {
        if !self.is_quantized() {
            return value;
        }
        snap_to_levels(&self.levels, value)
    }

    /// Clamps to the track, snaps (when quantized), and rounds to the
    /// configured precision.
    pub fn format_value(&self, value: f64) -> f64 {
        round_to(self.snap_value(self.clamp_to_track(value)), self.config.precision)
    }

    /// Limits `value` to `[min, max]`. Reversed bounds are treated as swapped.
    pub fn clamp_to_track(&self, value: f64) -> f64 {
        let (low, high) = if self.config.min <= self.config.max {
            (self.config.min, self.config.max)
        } else {
            (self.config.max, self.config.min)
        };
        value.max(low).min(high)
    }

    /// Class of the level nearest to `value`, clamped to the last configured class.
    ///
    /// `None` in continuous mode or when no classes are configured.
    pub fn quality_class_for(&self, value: f64) -> Option<&str> {
        if !self.is_quantized() || self.config.quality_classes.is_empty() {
            return None;
        }
        let index = nearest_level_index(&self.levels, value)?;
        let index = index.min(self.config.quality_classes.len() - 1);
        self.config.quality_classes.get(index).map(String::as_str)
    }

    /// Class currently applied to the track and handle.
    pub fn visual_class(&self) -> Option<&str> {
        self.visual_class.as_deref()
    }

    /// Stored score: `-1` while untouched, else the discrete (rounded) score in
    /// quantized mode or the rounded continuous value.
    pub fn stored_value(&self) -> f64 {
        if !self.touched {
            return UNSET_SCORE;
        }
        self.stored_value
    }

    /// Handles a drag step from the pointer.
    pub fn slide(&mut self, raw: f64) -> SliderChange {
        self.on_user_update(raw)
    }

    /// Handles the pointer release (or keyboard commit).
    pub fn change(&mut self, raw: f64) -> SliderChange {
        self.on_user_update(raw)
    }

    /// Positions the handle programmatically.
    ///
    /// With `mark_touched == false` the stored value and class are refreshed
    /// but the untouched state is kept and no observer fires.
    pub fn set_value(&mut self, value: f64, mark_touched: bool) -> SliderChange {
        if !value.is_finite() {
            debug!(value, "Ignoring non-finite slider value");
            return self.current_change();
        }
        if mark_touched {
            self.touched = true;
        }
        self.move_handle(value);
        let change = self.current_change();
        if mark_touched {
            self.notify(&change);
        }
        change
    }

    /// Returns the handle to its reset position and clears `touched`.
    pub fn reset(&mut self) {
        self.touched = false;
        self.position = self.reset_position();
        self.refresh();
        debug!(position = self.position, "Slider reset");
    }

    fn on_user_update(&mut self, raw: f64) -> SliderChange {
        if !raw.is_finite() {
            debug!(raw, "Ignoring non-finite slider value");
            return self.current_change();
        }
        self.touched = true;
        self.move_handle(raw);
        let change = self.current_change();
        debug!(
            raw,
            formatted = change.formatted_value,
            stored = change.stored_value,
            "Slider moved"
        );
        self.notify(&change);
        change
    }

    fn move_handle(&mut self, raw: f64) {
        self.position = self.format_value(raw);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.stored_value = if self.touched {
            if self.is_quantized() {
                self.position.round()
            } else {
                round_to(self.position, self.config.precision)
            }
        } else {
            UNSET_SCORE
        };

        self.visual_class = if !self.is_quantized() {
            None
        } else if !self.touched {
            Some(self.config.unset_class.clone())
        } else {
            self.quality_class_for(self.position).map(str::to_string)
        };
    }

    fn current_change(&self) -> SliderChange {
        SliderChange {
            stored_value: self.stored_value(),
            formatted_value: self.position,
            touched: self.touched,
        }
    }

    fn notify(&mut self, change: &SliderChange) {
        for observer in &mut self.observers {
            observer(change);
        }
    }

    fn reset_position(&self) -> f64 {
        if self.is_quantized() {
            round_to(self.config.min, self.config.precision)
        } else {
            0.0
        }
    }
}
