use thiserror::Error;

/// A preference label outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preference label '{label}'")]
pub struct UnknownPreference {
    pub label: String,
}
