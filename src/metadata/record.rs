use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::SubmissionMetadata;
use crate::constants::UNSET_SCORE;
use crate::scorer::{Candidate, QualityScore};

/// Field values handed to the submission collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Candidate A score (`-1` when unset).
    pub score: f64,
    /// Candidate B score (`-1` when unset).
    pub score2: f64,
    /// JSON-encoded [`SubmissionMetadata`].
    pub metadata: String,
    /// Free-text comment exactly as typed.
    pub comment: String,
}

impl Default for SubmissionRecord {
    fn default() -> Self {
        Self {
            score: UNSET_SCORE,
            score2: UNSET_SCORE,
            metadata: SubmissionMetadata::new().to_json_string(),
            comment: String::new(),
        }
    }
}

impl SubmissionRecord {
    pub fn score_for(&self, candidate: Candidate) -> QualityScore {
        match candidate {
            Candidate::A => QualityScore::from_stored(self.score),
            Candidate::B => QualityScore::from_stored(self.score2),
        }
    }

    pub fn set_score(&mut self, candidate: Candidate, score: QualityScore) {
        match candidate {
            Candidate::A => self.score = score.to_stored(),
            Candidate::B => self.score2 = score.to_stored(),
        }
    }

    /// Lenient view of the metadata field.
    pub fn metadata(&self) -> SubmissionMetadata {
        SubmissionMetadata::parse_lenient(&self.metadata)
    }
}

/// Shared handle over one form's [`SubmissionRecord`].
///
/// Cloning the handle shares the record.
#[derive(Debug, Clone, Default)]
pub struct SubmissionRecordHandle {
    inner: Arc<RwLock<SubmissionRecord>>,
}

impl SubmissionRecordHandle {
    pub fn new(record: SubmissionRecord) -> Self {
        Self {
            inner: Arc::new(RwLock::new(record)),
        }
    }

    /// Copy of the current record.
    pub fn snapshot(&self) -> SubmissionRecord {
        self.inner.read().clone()
    }

    pub fn metadata(&self) -> SubmissionMetadata {
        self.inner.read().metadata()
    }

    pub fn set_score(&self, candidate: Candidate, score: QualityScore) {
        self.inner.write().set_score(candidate, score);
    }

    /// Read-merge-write of the metadata field.
    ///
    /// The write lock is held across parse, mutation, and write-back, so no
    /// other writer can interleave between reading and storing the mapping.
    pub fn update_metadata<F>(&self, mutate: F) -> SubmissionMetadata
    where
        F: FnOnce(&mut SubmissionMetadata),
    {
        let mut record = self.inner.write();
        let mut metadata = SubmissionMetadata::parse_lenient(&record.metadata);
        mutate(&mut metadata);
        record.metadata = metadata.to_json_string();
        metadata
    }

    /// Stores the raw comment and merges its trimmed form into metadata.
    pub fn write_comment(&self, text: Option<&str>) -> SubmissionMetadata {
        let mut record = self.inner.write();
        record.comment = text.unwrap_or_default().to_string();
        let mut metadata = SubmissionMetadata::parse_lenient(&record.metadata);
        metadata.write_comment(text);
        record.metadata = metadata.to_json_string();
        metadata
    }

    /// Overwrites the raw metadata string (external writes, restores).
    pub fn replace_metadata_raw(&self, raw: impl Into<String>) {
        self.inner.write().metadata = raw.into();
    }

    /// Returns every field to its empty state.
    pub fn clear(&self) {
        *self.inner.write() = SubmissionRecord::default();
    }
}
