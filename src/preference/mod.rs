//! Rating-preference consistency engine.
//!
//! Keeps the pairwise preference consistent with the two quality scores:
//!
//! | Scores | Phase | Preference input |
//! |---|---|---|
//! | either unset | `Inactive` | disabled, nothing selected |
//! | A > B | `LockedA` | disabled, forced to `A>>B` |
//! | B > A | `LockedB` | disabled, forced to `A<<B` |
//! | A == B | `Free` | enabled, extremes disabled, defaults to `A=B` |
//!
//! [`recompute`] is the whole decision; [`PreferenceEngine`] threads the last
//! manual choice through it and mirrors the result into the submission
//! metadata. [`PreferenceInput`] is the render target.

pub mod engine;
pub mod error;
pub mod input;
pub mod types;


pub use engine::{PreferenceEngine, recompute};
pub use error::UnknownPreference;
pub use input::PreferenceInput;
pub use types::{EnginePhase, PreferenceChoice, PreferenceState};
