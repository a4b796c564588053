use serde::{Deserialize, Serialize};

use crate::preference::PreferenceChoice;
use crate::scorer::Candidate;

/// One user (or restore) event, in the JSON shape used by replay scripts.
///
/// ```json
/// {"action": "slide", "candidate": "a", "value": 52}
/// {"action": "select_preference", "choice": "A>B"}
/// {"action": "comment", "text": "needs review"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FormAction {
    Slide {
        candidate: Candidate,
        value: f64,
    },
    Change {
        candidate: Candidate,
        value: f64,
    },
    SetValue {
        candidate: Candidate,
        value: f64,
        #[serde(default)]
        mark_touched: bool,
    },
    SelectPreference {
        choice: PreferenceChoice,
    },
    Comment {
        #[serde(default)]
        text: Option<String>,
    },
    Reset,
}
