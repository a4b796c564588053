//! Score input contract shared by every quality scorer.
//!
//! A scorer is anything that can answer "what score did the evaluator give this
//! candidate", or say it has none yet. The engine only ever reads through
//! [`Scorer::current_score`].

pub mod choice;


pub use choice::ChoiceScorer;

use serde::{Deserialize, Serialize};

use crate::constants::UNSET_SCORE;
use crate::slider::QuantizedSlider;

/// Which of the two candidates a score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Candidate {
    A,
    B,
}

impl Candidate {
    /// Submission record field carrying this candidate's score.
    pub fn score_field(&self) -> &'static str {
        match self {
            Candidate::A => "score",
            Candidate::B => "score2",
        }
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Candidate::A => write!(f, "A"),
            Candidate::B => write!(f, "B"),
        }
    }
}

/// A candidate's quality score, or the absence of one.
///
/// Being set is the same thing as being touched: there is no "set but
/// untouched" state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub struct QualityScore(Option<f64>);

impl QualityScore {
    pub const UNSET: QualityScore = QualityScore(None);

    /// Wraps a finite, non-negative value; anything else is unset.
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value >= 0.0 {
            Self(Some(value))
        } else {
            Self::UNSET
        }
    }

    /// Interprets a stored submission value, where `-1` means unset.
    pub fn from_stored(stored: f64) -> Self {
        Self::new(stored)
    }

    /// Parses a raw form value. Blank or non-numeric input is unset.
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<f64>()
            .map(Self::new)
            .unwrap_or(Self::UNSET)
    }

    #[inline]
    pub fn value(&self) -> Option<f64> {
        self.0
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Alias for [`is_set`](Self::is_set), named after the widget state.
    #[inline]
    pub fn is_touched(&self) -> bool {
        self.is_set()
    }

    /// Value written to the submission record (`-1` when unset).
    pub fn to_stored(&self) -> f64 {
        self.0.unwrap_or(UNSET_SCORE)
    }
}

impl From<Option<f64>> for QualityScore {
    fn from(value: Option<f64>) -> Self {
        value.map(Self::new).unwrap_or(Self::UNSET)
    }
}

impl From<QualityScore> for Option<f64> {
    fn from(score: QualityScore) -> Self {
        score.0
    }
}

/// Anything that yields a quality score for one candidate.
pub trait Scorer {
    fn current_score(&self) -> QualityScore;
}

impl Scorer for QuantizedSlider {
    fn current_score(&self) -> QualityScore {
        QualityScore::from_stored(self.stored_value())
    }
}

impl Scorer for QualityScore {
    fn current_score(&self) -> QualityScore {
        *self
    }
}
