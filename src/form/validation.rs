use thiserror::Error;

use crate::config::Config;
use crate::metadata::SubmissionRecord;
use crate::scorer::Candidate;

/// Reasons a record cannot be submitted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("candidate {candidate} has not been scored")]
    MissingScore { candidate: Candidate },

    #[error("no preference has been recorded")]
    MissingPreference,

    #[error("a comment is required")]
    MissingComment,
}

/// Pre-submit checks over a [`SubmissionRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionValidator {
    pub comment_required: bool,
    pub preference_required: bool,
}

impl Default for SubmissionValidator {
    fn default() -> Self {
        Self {
            comment_required: false,
            preference_required: true,
        }
    }
}

impl SubmissionValidator {
    pub fn from_config(config: &Config) -> Self {
        Self {
            comment_required: config.comment_required,
            preference_required: config.preference_required,
        }
    }

    /// Returns the first problem found: scores, then preference, then comment.
    pub fn validate(&self, record: &SubmissionRecord) -> Result<(), SubmissionError> {
        match self.validate_all(record).into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Returns every problem found, in the same order as [`validate`](Self::validate).
    pub fn validate_all(&self, record: &SubmissionRecord) -> Vec<SubmissionError> {
        let mut errors = Vec::new();

        for candidate in [Candidate::A, Candidate::B] {
            if !record.score_for(candidate).is_set() {
                errors.push(SubmissionError::MissingScore { candidate });
            }
        }

        if self.preference_required && record.metadata().preference().is_none() {
            errors.push(SubmissionError::MissingPreference);
        }

        if self.comment_required && record.comment.trim().is_empty() {
            errors.push(SubmissionError::MissingComment);
        }

        errors
    }
}
