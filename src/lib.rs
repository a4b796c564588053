//! Pairwise evaluation library crate (used by the replay binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`PreferenceEngine`], [`recompute`], [`PreferenceChoice`], [`PreferenceState`] -
//!   keeps a pairwise preference consistent with two quality scores
//! - [`QuantizedSlider`], [`SliderConfig`] - continuous slider with optional snapping
//!   onto discrete levels and an untouched sentinel
//! - [`SubmissionRecord`], [`SubmissionRecordHandle`], [`SubmissionMetadata`] - the
//!   record handed to the submission collaborator
//!
//! ## Form Wiring
//! - [`AssessmentForm`], [`FormContext`], [`FormAction`] - one form instance
//! - [`SubmissionValidator`], [`SubmissionError`] - pre-submit checks
//!
//! ## Supporting
//! - [`Config`], [`ConfigError`] - environment-backed configuration
//! - [`LayoutPreferences`] - orientation and width toggles
//! - [`Scorer`], [`QualityScore`], [`ChoiceScorer`] - the score input contract

pub mod config;
pub mod constants;
pub mod form;
pub mod layout;
pub mod metadata;
pub mod preference;
pub mod scorer;
pub mod slider;

pub use config::{Config, ConfigError};
pub use constants::UNSET_SCORE;
pub use form::{
    AssessmentForm, FormAction, FormContext, FormView, SliderView, SubmissionError,
    SubmissionValidator,
};
pub use layout::{
    LayoutPreferences, MemoryPreferenceStore, Orientation, PreferenceStore, WidthMode,
};
pub use metadata::{SubmissionMetadata, SubmissionRecord, SubmissionRecordHandle};
pub use preference::{
    EnginePhase, PreferenceChoice, PreferenceEngine, PreferenceInput, PreferenceState,
    UnknownPreference, recompute,
};
pub use scorer::{Candidate, ChoiceScorer, QualityScore, Scorer};
pub use slider::{QuantizedSlider, SliderChange, SliderConfig, SliderObserver};
