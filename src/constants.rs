//! Cross-cutting, shared constants.
//!
//! External labels are part of the submission contract: the server side reads
//! `metadata.preference` and the `score`/`score2` fields verbatim.

/// Stored score for a slider the evaluator has not interacted with yet.
pub const UNSET_SCORE: f64 = -1.0;

/// Decimal places applied to the derived step.
pub const STEP_PRECISION: u32 = 6;

/// Decimal places applied to every generated discrete level.
pub const LEVEL_PRECISION: u32 = 4;

/// Default decimal rounding applied to formatted slider values.
pub const DEFAULT_PRECISION: u32 = 4;

pub const DEFAULT_VALUE_COUNT: i64 = 10;
pub const DEFAULT_SLIDER_MIN: f64 = 0.0;
pub const DEFAULT_SLIDER_MAX: f64 = 100.0;

/// Class applied to the track and handle while the slider is untouched.
pub const DEFAULT_UNSET_CLASS: &str = "quality-option-unset";

/// One visual class per discrete level, lowest first.
pub const DEFAULT_QUALITY_CLASSES: [&str; 10] = [
    "quality-option-1",
    "quality-option-2",
    "quality-option-3",
    "quality-option-4",
    "quality-option-5",
    "quality-option-6",
    "quality-option-7",
    "quality-option-8",
    "quality-option-9",
    "quality-option-10",
];

pub const LABEL_STRONG_A: &str = "A>>B";
pub const LABEL_WEAK_A: &str = "A>B";
pub const LABEL_TIE: &str = "A=B";
pub const LABEL_WEAK_B: &str = "A<B";
pub const LABEL_STRONG_B: &str = "A<<B";

/// Reserved metadata key holding the preference label.
pub const METADATA_PREFERENCE_KEY: &str = "preference";

/// Reserved metadata key holding the trimmed comment.
pub const METADATA_COMMENT_KEY: &str = "comment";

/// Minimum viewport width (CSS px) at which the horizontal layout is offered.
pub const DEFAULT_HORIZONTAL_MIN_WIDTH: u32 = 1200;

pub const ORIENTATION_STORE_KEY: &str = "pairwise_orientation";
pub const WIDTH_STORE_KEY: &str = "pairwise_width";

/// Rounds `value` to `places` decimals (half away from zero).
///
/// Non-finite input is returned unchanged.
#[inline]
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places.min(15) as i32);
    (value * factor).round() / factor
}
