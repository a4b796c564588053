use serde::Serialize;

use crate::metadata::SubmissionRecord;
use crate::preference::PreferenceState;
use crate::slider::QuantizedSlider;

/// What a renderer needs to draw one slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderView {
    pub position: f64,
    pub touched: bool,
    pub stored_value: f64,
    pub visual_class: Option<String>,
}

impl From<&QuantizedSlider> for SliderView {
    fn from(slider: &QuantizedSlider) -> Self {
        Self {
            position: slider.position(),
            touched: slider.is_touched(),
            stored_value: slider.stored_value(),
            visual_class: slider.visual_class().map(str::to_string),
        }
    }
}

/// Complete render snapshot of one form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub form_id: String,
    pub score_a: SliderView,
    pub score_b: SliderView,
    pub preference: PreferenceState,
    pub record: SubmissionRecord,
}
