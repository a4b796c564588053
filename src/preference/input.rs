use std::collections::BTreeSet;

use serde::Serialize;

use super::types::{PreferenceChoice, PreferenceState};

/// Presentation model of the preference radio group.
///
/// Never the source of truth: [`apply`](Self::apply) overwrites it from a
/// [`PreferenceState`] after every recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PreferenceInput {
    disabled: bool,
    selection: Option<PreferenceChoice>,
    disabled_options: BTreeSet<PreferenceChoice>,
    status_message: String,
}

impl PreferenceInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disable(&mut self) {
        self.disabled = true;
    }

    pub fn enable(&mut self) {
        self.disabled = false;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn force_select(&mut self, choice: Option<PreferenceChoice>) {
        self.selection = choice;
    }

    pub fn current_selection(&self) -> Option<PreferenceChoice> {
        self.selection
    }

    pub fn is_option_disabled(&self, choice: PreferenceChoice) -> bool {
        self.disabled || self.disabled_options.contains(&choice)
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Renders `state` onto the input.
    pub fn apply(&mut self, state: &PreferenceState) {
        if state.enabled {
            self.enable();
        } else {
            self.disable();
        }
        self.disabled_options = state.disabled_options.clone();
        self.force_select(state.selected);
        self.status_message.clone_from(&state.status_message);
    }
}
