use tracing::debug;

use super::{QualityScore, Scorer};

/// Discrete, mutually exclusive score choices (a radio group).
///
/// The non-slider alternative for quality scoring: the evaluator picks exactly
/// one of a fixed set of values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceScorer {
    options: Vec<f64>,
    selected: Option<usize>,
}

impl ChoiceScorer {
    pub fn new(options: Vec<f64>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    /// Integer choices `low..=high`.
    pub fn with_range(low: i64, high: i64) -> Self {
        Self::new((low..=high).map(|v| v as f64).collect())
    }

    pub fn options(&self) -> &[f64] {
        &self.options
    }

    /// Selects the option equal to `value`.
    ///
    /// Returns `false` (and leaves the selection alone) when `value` is not
    /// one of the options.
    pub fn select(&mut self, value: f64) -> bool {
        match self.options.iter().position(|option| *option == value) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => {
                debug!(value, "Ignoring selection outside the option set");
                false
            }
        }
    }

    /// Selects from a raw form value; malformed input is ignored.
    pub fn select_raw(&mut self, raw: &str) -> bool {
        match QualityScore::parse(raw).value() {
            Some(value) => self.select(value),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

impl Scorer for ChoiceScorer {
    fn current_score(&self) -> QualityScore {
        self.selected
            .and_then(|index| self.options.get(index).copied())
            .map(QualityScore::new)
            .unwrap_or(QualityScore::UNSET)
    }
}
