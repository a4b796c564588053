use tracing::{debug, info};

use super::action::FormAction;
use super::context::FormContext;
use super::validation::{SubmissionError, SubmissionValidator};
use super::view::{FormView, SliderView};
use crate::metadata::{SubmissionRecord, SubmissionRecordHandle};
use crate::preference::{PreferenceChoice, PreferenceEngine, PreferenceInput, PreferenceState};
use crate::scorer::{Candidate, QualityScore, Scorer};
use crate::slider::QuantizedSlider;

/// One pairwise assessment form: two quality sliders, the preference engine,
/// and the shared submission record.
///
/// Events flow one way. A user event updates a slider (or the engine), the
/// engine recomputes from scratch, and the result is pushed into the record
/// and the [`PreferenceInput`]. Nothing is read back from presentation state.
#[derive(Debug)]
pub struct AssessmentForm {
    context: FormContext,
    record: SubmissionRecordHandle,
    slider_a: QuantizedSlider,
    slider_b: QuantizedSlider,
    engine: PreferenceEngine,
    preference_input: PreferenceInput,
    validator: SubmissionValidator,
}

impl AssessmentForm {
    /// Creates an empty form with its own record.
    pub fn new(context: FormContext) -> Self {
        Self::with_record(context, SubmissionRecordHandle::default())
    }

    /// Creates an empty form writing into an existing record handle.
    ///
    /// The record is cleared; use [`restore`](Self::restore) to re-render a
    /// previously submitted record.
    pub fn with_record(context: FormContext, record: SubmissionRecordHandle) -> Self {
        record.clear();
        let slider_a = QuantizedSlider::new(context.slider_config());
        let slider_b = QuantizedSlider::new(context.slider_config());
        let engine = PreferenceEngine::new(record.clone());
        let validator = SubmissionValidator::from_config(context.config());

        let mut preference_input = PreferenceInput::new();
        preference_input.apply(engine.state());

        info!(form_id = %context.id(), "Assessment form initialised");

        Self {
            context,
            record,
            slider_a,
            slider_b,
            engine,
            preference_input,
            validator,
        }
    }

    pub fn context(&self) -> &FormContext {
        &self.context
    }

    pub fn record(&self) -> &SubmissionRecordHandle {
        &self.record
    }

    pub fn slider(&self, candidate: Candidate) -> &QuantizedSlider {
        match candidate {
            Candidate::A => &self.slider_a,
            Candidate::B => &self.slider_b,
        }
    }

    /// Subscribes an observer to one slider's user-driven changes.
    pub fn subscribe(&mut self, candidate: Candidate, observer: crate::slider::SliderObserver) {
        self.slider_mut(candidate).subscribe(observer);
    }

    pub fn preference(&self) -> &PreferenceState {
        self.engine.state()
    }

    pub fn preference_input(&self) -> &PreferenceInput {
        &self.preference_input
    }

    /// Pointer drag on a slider.
    pub fn slide(&mut self, candidate: Candidate, raw: f64) -> &PreferenceState {
        self.slider_mut(candidate).slide(raw);
        self.on_score_changed(candidate)
    }

    /// Pointer release on a slider.
    pub fn change(&mut self, candidate: Candidate, raw: f64) -> &PreferenceState {
        self.slider_mut(candidate).change(raw);
        self.on_score_changed(candidate)
    }

    /// Programmatic slider positioning.
    pub fn set_value(
        &mut self,
        candidate: Candidate,
        value: f64,
        mark_touched: bool,
    ) -> &PreferenceState {
        self.slider_mut(candidate).set_value(value, mark_touched);
        self.on_score_changed(candidate)
    }

    /// Manual preference pick; ignored unless the scores are tied.
    pub fn select_preference(&mut self, choice: PreferenceChoice) -> bool {
        let accepted = self.engine.on_manual_select(choice);
        self.preference_input.apply(self.engine.state());
        accepted
    }

    /// Comment edit. Blank text removes the comment from metadata.
    pub fn set_comment(&mut self, text: Option<&str>) {
        self.engine.write_metadata_comment(text);
    }

    /// Re-renders a previously submitted record (e.g. after a failed validation).
    ///
    /// Scores `>= 0` reposition their slider as touched; the comment and any
    /// non-reserved metadata keys are carried over; a non-extreme preference
    /// becomes the remembered manual choice.
    pub fn restore(&mut self, previous: &SubmissionRecord) -> &PreferenceState {
        self.reset_widgets();
        self.record.clear();
        self.record.replace_metadata_raw(previous.metadata.clone());

        for candidate in [Candidate::A, Candidate::B] {
            if let Some(value) = previous.score_for(candidate).value() {
                self.slider_mut(candidate).set_value(value, true);
            }
            let score = self.slider(candidate).current_score();
            self.record.set_score(candidate, score);
        }

        self.engine
            .remember_manual_choice(previous.metadata().preference());
        self.engine.sync_from(&self.slider_a, &self.slider_b);
        self.engine
            .write_metadata_comment(Some(previous.comment.as_str()));
        self.preference_input.apply(self.engine.state());

        info!(
            form_id = %self.context.id(),
            phase = %self.engine.state().phase,
            "Assessment form restored"
        );
        self.engine.state()
    }

    /// Returns both sliders, the preference, the comment, and the metadata to empty.
    pub fn reset(&mut self) {
        self.reset_widgets();
        self.record.clear();
        self.preference_input.apply(self.engine.state());
        info!(form_id = %self.context.id(), "Assessment form reset");
    }

    /// Applies one replayed action. Returns `false` for rejected preference picks.
    pub fn apply(&mut self, action: &FormAction) -> bool {
        debug!(form_id = %self.context.id(), ?action, "Applying form action");
        match action {
            FormAction::Slide { candidate, value } => {
                self.slide(*candidate, *value);
            }
            FormAction::Change { candidate, value } => {
                self.change(*candidate, *value);
            }
            FormAction::SetValue {
                candidate,
                value,
                mark_touched,
            } => {
                self.set_value(*candidate, *value, *mark_touched);
            }
            FormAction::SelectPreference { choice } => return self.select_preference(*choice),
            FormAction::Comment { text } => self.set_comment(text.as_deref()),
            FormAction::Reset => self.reset(),
        }
        true
    }

    /// Snapshot of everything a renderer needs.
    pub fn render(&self) -> FormView {
        FormView {
            form_id: self.context.id().to_string(),
            score_a: SliderView::from(&self.slider_a),
            score_b: SliderView::from(&self.slider_b),
            preference: self.engine.state().clone(),
            record: self.record.snapshot(),
        }
    }

    pub fn validate(&self) -> Result<(), SubmissionError> {
        self.validator.validate(&self.record.snapshot())
    }

    pub fn validate_all(&self) -> Vec<SubmissionError> {
        self.validator.validate_all(&self.record.snapshot())
    }

    /// Validates and returns the record to hand to the submission collaborator.
    pub fn submit(&self) -> Result<SubmissionRecord, SubmissionError> {
        let record = self.record.snapshot();
        self.validator.validate(&record)?;
        info!(form_id = %self.context.id(), "Assessment form submitted");
        Ok(record)
    }

    /// Ends the form's lifetime and returns the final record.
    pub fn teardown(self) -> SubmissionRecord {
        info!(form_id = %self.context.id(), "Assessment form torn down");
        self.record.snapshot()
    }

    fn slider_mut(&mut self, candidate: Candidate) -> &mut QuantizedSlider {
        match candidate {
            Candidate::A => &mut self.slider_a,
            Candidate::B => &mut self.slider_b,
        }
    }

    fn on_score_changed(&mut self, candidate: Candidate) -> &PreferenceState {
        let score: QualityScore = self.slider(candidate).current_score();
        self.record.set_score(candidate, score);
        self.engine.update_score(candidate, score);
        self.preference_input.apply(self.engine.state());
        self.engine.state()
    }

    fn reset_widgets(&mut self) {
        self.slider_a.reset();
        self.slider_b.reset();
        self.engine.reset();
    }
}
