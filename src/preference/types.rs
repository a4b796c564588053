use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::error::UnknownPreference;
use crate::constants::{LABEL_STRONG_A, LABEL_STRONG_B, LABEL_TIE, LABEL_WEAK_A, LABEL_WEAK_B};

/// Relative preference between candidate A and candidate B.
///
/// Ordered from "A strongly preferred" to "B strongly preferred".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PreferenceChoice {
    #[serde(rename = "A>>B")]
    StrongA,
    #[serde(rename = "A>B")]
    WeakA,
    #[serde(rename = "A=B")]
    Tie,
    #[serde(rename = "A<B")]
    WeakB,
    #[serde(rename = "A<<B")]
    StrongB,
}

impl PreferenceChoice {
    pub const ALL: [PreferenceChoice; 5] = [
        PreferenceChoice::StrongA,
        PreferenceChoice::WeakA,
        PreferenceChoice::Tie,
        PreferenceChoice::WeakB,
        PreferenceChoice::StrongB,
    ];

    /// Label written to `metadata.preference`.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            PreferenceChoice::StrongA => LABEL_STRONG_A,
            PreferenceChoice::WeakA => LABEL_WEAK_A,
            PreferenceChoice::Tie => LABEL_TIE,
            PreferenceChoice::WeakB => LABEL_WEAK_B,
            PreferenceChoice::StrongB => LABEL_STRONG_B,
        }
    }

    /// `true` for the strong preferences, which only score disagreement can justify.
    #[inline]
    pub fn is_extreme(&self) -> bool {
        matches!(self, PreferenceChoice::StrongA | PreferenceChoice::StrongB)
    }

    pub fn extremes() -> BTreeSet<PreferenceChoice> {
        Self::ALL.into_iter().filter(|c| c.is_extreme()).collect()
    }
}

impl std::fmt::Display for PreferenceChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for PreferenceChoice {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.label() == trimmed)
            .ok_or_else(|| UnknownPreference {
                label: trimmed.to_string(),
            })
    }
}

/// Where the score pair puts the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnginePhase {
    /// At least one score is unset.
    Inactive,
    /// Score A is higher.
    LockedA,
    /// Score B is higher.
    LockedB,
    /// Both scores are set and equal.
    Free,
}

impl EnginePhase {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            EnginePhase::Inactive => "INACTIVE",
            EnginePhase::LockedA => "LOCKED_A",
            EnginePhase::LockedB => "LOCKED_B",
            EnginePhase::Free => "FREE",
        }
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        matches!(self, EnginePhase::LockedA | EnginePhase::LockedB)
    }

    /// Only the free phase accepts manual selections.
    #[inline]
    pub fn accepts_manual(&self) -> bool {
        matches!(self, EnginePhase::Free)
    }
}

impl std::fmt::Display for EnginePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of one recomputation; everything the preference input should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceState {
    pub phase: EnginePhase,
    /// Selection forced by the scores rather than chosen by the evaluator.
    pub locked: bool,
    /// Whether the preference input accepts interaction at all.
    pub enabled: bool,
    pub selected: Option<PreferenceChoice>,
    /// Options that cannot be chosen, in display order.
    pub disabled_options: BTreeSet<PreferenceChoice>,
    pub status_message: String,
}

impl PreferenceState {
    pub fn inactive() -> Self {
        Self {
            phase: EnginePhase::Inactive,
            locked: false,
            enabled: false,
            selected: None,
            disabled_options: PreferenceChoice::ALL.into_iter().collect(),
            status_message: super::engine::STATUS_INACTIVE.to_string(),
        }
    }

    pub fn is_option_enabled(&self, choice: PreferenceChoice) -> bool {
        self.enabled && !self.disabled_options.contains(&choice)
    }
}

impl Default for PreferenceState {
    fn default() -> Self {
        Self::inactive()
    }
}
