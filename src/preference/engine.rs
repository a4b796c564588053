use std::cmp::Ordering;

use tracing::debug;

use super::types::{EnginePhase, PreferenceChoice, PreferenceState};
use crate::metadata::{SubmissionMetadata, SubmissionRecordHandle};
use crate::scorer::{Candidate, QualityScore, Scorer};

pub const STATUS_INACTIVE: &str = "Score both candidates to enable the preference.";
pub const STATUS_LOCKED_A: &str = "Candidate A scored higher, so the preference is fixed to A>>B.";
pub const STATUS_LOCKED_B: &str = "Candidate B scored higher, so the preference is fixed to A<<B.";
pub const STATUS_FREE: &str = "The scores are tied. Pick the preference that fits best.";

/// Derives the preference state from the two scores.
///
/// Pure: the result depends only on the arguments. `last_manual` is the most
/// recent selection the evaluator made while the scores were tied; it is only
/// honoured in the free phase and only when it is not an extreme choice.
pub fn recompute(
    score_a: QualityScore,
    score_b: QualityScore,
    last_manual: Option<PreferenceChoice>,
) -> PreferenceState {
    let (Some(a), Some(b)) = (score_a.value(), score_b.value()) else {
        return PreferenceState::inactive();
    };

    match a.partial_cmp(&b).unwrap_or(Ordering::Equal) {
        Ordering::Greater => locked(EnginePhase::LockedA, PreferenceChoice::StrongA),
        Ordering::Less => locked(EnginePhase::LockedB, PreferenceChoice::StrongB),
        Ordering::Equal => {
            let selected = last_manual
                .filter(|choice| !choice.is_extreme())
                .unwrap_or(PreferenceChoice::Tie);
            PreferenceState {
                phase: EnginePhase::Free,
                locked: false,
                enabled: true,
                selected: Some(selected),
                disabled_options: PreferenceChoice::extremes(),
                status_message: STATUS_FREE.to_string(),
            }
        }
    }
}

fn locked(phase: EnginePhase, forced: PreferenceChoice) -> PreferenceState {
    let status_message = match phase {
        EnginePhase::LockedA => STATUS_LOCKED_A,
        _ => STATUS_LOCKED_B,
    };
    PreferenceState {
        phase,
        locked: true,
        enabled: false,
        selected: Some(forced),
        disabled_options: PreferenceChoice::ALL.into_iter().collect(),
        status_message: status_message.to_string(),
    }
}

/// Keeps the preference consistent with the two scores and mirrors it into
/// the submission metadata.
///
/// Every input (score change or manual pick) reruns [`recompute`] from scratch
/// and rewrites the `preference` key, so the derived state cannot drift no
/// matter how events were ordered before.
#[derive(Debug)]
pub struct PreferenceEngine {
    record: SubmissionRecordHandle,
    score_a: QualityScore,
    score_b: QualityScore,
    last_manual: Option<PreferenceChoice>,
    state: PreferenceState,
}

impl PreferenceEngine {
    /// Creates an inactive engine writing into `record`.
    pub fn new(record: SubmissionRecordHandle) -> Self {
        Self {
            record,
            score_a: QualityScore::UNSET,
            score_b: QualityScore::UNSET,
            last_manual: None,
            state: PreferenceState::inactive(),
        }
    }

    pub fn state(&self) -> &PreferenceState {
        &self.state
    }

    pub fn scores(&self) -> (QualityScore, QualityScore) {
        (self.score_a, self.score_b)
    }

    pub fn last_manual_choice(&self) -> Option<PreferenceChoice> {
        self.last_manual
    }

    pub fn is_locked(&self) -> bool {
        self.state.locked
    }

    /// Replaces both scores and recomputes.
    pub fn update_scores(
        &mut self,
        score_a: QualityScore,
        score_b: QualityScore,
    ) -> &PreferenceState {
        self.score_a = score_a;
        self.score_b = score_b;
        self.apply()
    }

    /// Replaces one candidate's score and recomputes.
    pub fn update_score(&mut self, candidate: Candidate, score: QualityScore) -> &PreferenceState {
        match candidate {
            Candidate::A => self.score_a = score,
            Candidate::B => self.score_b = score,
        }
        self.apply()
    }

    /// Reads both scorers and recomputes.
    pub fn sync_from<A, B>(&mut self, scorer_a: &A, scorer_b: &B) -> &PreferenceState
    where
        A: Scorer + ?Sized,
        B: Scorer + ?Sized,
    {
        self.update_scores(scorer_a.current_score(), scorer_b.current_score())
    }

    /// Records a manual pick.
    ///
    /// Returns `false` without changing anything when the input is not
    /// enabled (inactive or locked) or the option is disabled; such events
    /// can only come from a stale handler.
    pub fn on_manual_select(&mut self, choice: PreferenceChoice) -> bool {
        if !self.state.phase.accepts_manual() || !self.state.is_option_enabled(choice) {
            debug!(
                phase = %self.state.phase,
                choice = %choice,
                "Rejected manual preference selection"
            );
            return false;
        }

        self.last_manual = Some(choice);
        self.apply();
        true
    }

    /// Seeds the remembered manual choice (used when restoring a form).
    ///
    /// Extreme choices are never remembered: they are only ever derived.
    pub fn remember_manual_choice(&mut self, choice: Option<PreferenceChoice>) {
        self.last_manual = choice.filter(|c| !c.is_extreme());
    }

    /// Sets or removes `metadata.preference` directly.
    pub fn write_metadata_preference(
        &self,
        choice: Option<PreferenceChoice>,
    ) -> SubmissionMetadata {
        self.record
            .update_metadata(|metadata| metadata.write_preference(choice))
    }

    /// Sets or removes `metadata.comment` (trimmed) and the raw comment field.
    pub fn write_metadata_comment(&self, text: Option<&str>) -> SubmissionMetadata {
        self.record.write_comment(text)
    }

    /// Forgets both scores and the manual choice.
    pub fn reset(&mut self) -> &PreferenceState {
        self.score_a = QualityScore::UNSET;
        self.score_b = QualityScore::UNSET;
        self.last_manual = None;
        self.apply()
    }

    fn apply(&mut self) -> &PreferenceState {
        let next = recompute(self.score_a, self.score_b, self.last_manual);

        if next.phase != self.state.phase {
            debug!(
                from = %self.state.phase,
                to = %next.phase,
                selected = ?next.selected.map(|c| c.label()),
                "Preference phase changed"
            );
        }

        self.write_metadata_preference(next.selected);
        self.state = next;
        &self.state
    }
}
