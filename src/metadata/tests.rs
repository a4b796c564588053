use super::*;
use crate::scorer::{Candidate, QualityScore};
use serde_json::json;

#[test]
fn test_parse_lenient_accepts_objects() {
    let metadata = SubmissionMetadata::parse_lenient(r#"{"preference":"A>B","source":"web"}"#);

    assert_eq!(metadata.len(), 2);
    assert_eq!(metadata.preference(), Some(PreferenceChoice::WeakA));
    assert_eq!(metadata.get("source"), Some(&json!("web")));
}

#[test]
fn test_parse_lenient_recovers_from_garbage() {
    for raw in ["", "   ", "{not json", "[1,2,3]", "\"text\"", "42", "null"] {
        assert!(
            SubmissionMetadata::parse_lenient(raw).is_empty(),
            "expected empty mapping for {raw:?}"
        );
    }
}

#[test]
fn test_parse_lenient_drops_empty_entries() {
    let metadata =
        SubmissionMetadata::parse_lenient(r#"{"comment":"","preference":null,"extra":0}"#);

    assert!(!metadata.contains_key("comment"));
    assert!(!metadata.contains_key("preference"));
    assert_eq!(metadata.get("extra"), Some(&json!(0)));
}

#[test]
fn test_set_empty_value_removes_key() {
    let mut metadata = SubmissionMetadata::new();
    metadata.set("note", json!("hello"));
    assert!(metadata.contains_key("note"));

    metadata.set("note", json!("  "));
    assert!(!metadata.contains_key("note"));

    metadata.set("note", json!("x"));
    metadata.set("note", serde_json::Value::Null);
    assert!(metadata.is_empty());
}

#[test]
fn test_write_comment_trims_and_removes_blank() {
    let mut metadata = SubmissionMetadata::new();

    metadata.write_comment(Some("  needs review \n"));
    assert_eq!(metadata.comment(), Some("needs review"));

    metadata.write_comment(Some("   "));
    assert_eq!(metadata.comment(), None);

    metadata.write_comment(Some("again"));
    metadata.write_comment(None);
    assert!(metadata.is_empty());
}

#[test]
fn test_write_preference_is_idempotent() {
    let mut metadata = SubmissionMetadata::new();
    metadata.write_preference(Some(PreferenceChoice::Tie));
    let first = metadata.to_json_string();
    metadata.write_preference(Some(PreferenceChoice::Tie));

    assert_eq!(metadata.to_json_string(), first);
    assert_eq!(first, r#"{"preference":"A=B"}"#);

    metadata.write_preference(None);
    assert_eq!(metadata.to_json_string(), "{}");
}

#[test]
fn test_unknown_preference_label_reads_as_absent() {
    let metadata = SubmissionMetadata::parse_lenient(r#"{"preference":"B wins"}"#);
    assert_eq!(metadata.preference_label(), Some("B wins"));
    assert_eq!(metadata.preference(), None);
}

#[test]
fn test_serialization_is_key_sorted() {
    let mut metadata = SubmissionMetadata::new();
    metadata.set("zeta", json!(1));
    metadata.set("alpha", json!(2));

    assert_eq!(metadata.to_json_string(), r#"{"alpha":2,"zeta":1}"#);
}

#[test]
fn test_default_record_is_empty() {
    let record = SubmissionRecord::default();

    assert_eq!(record.score, -1.0);
    assert_eq!(record.score2, -1.0);
    assert_eq!(record.metadata, "{}");
    assert!(record.comment.is_empty());
    assert!(!record.score_for(Candidate::A).is_set());
}

#[test]
fn test_record_scores_by_candidate() {
    let mut record = SubmissionRecord::default();
    record.set_score(Candidate::B, QualityScore::new(7.0));

    assert_eq!(record.score, -1.0);
    assert_eq!(record.score2, 7.0);
    assert_eq!(record.score_for(Candidate::B).value(), Some(7.0));
}

#[test]
fn test_update_metadata_merges_with_existing_keys() {
    let handle = SubmissionRecordHandle::default();
    handle.write_comment(Some("needs review"));

    handle.update_metadata(|metadata| metadata.write_preference(Some(PreferenceChoice::Tie)));

    let metadata = handle.metadata();
    assert_eq!(metadata.comment(), Some("needs review"));
    assert_eq!(metadata.preference(), Some(PreferenceChoice::Tie));
    assert_eq!(handle.snapshot().comment, "needs review");
}

#[test]
fn test_update_metadata_heals_malformed_field() {
    let handle = SubmissionRecordHandle::default();
    handle.replace_metadata_raw("{oops");

    handle.update_metadata(|metadata| metadata.set("k", json!("v")));

    assert_eq!(handle.snapshot().metadata, r#"{"k":"v"}"#);
}

#[test]
fn test_handle_clones_share_the_record() {
    let handle = SubmissionRecordHandle::default();
    let other = handle.clone();

    other.set_score(Candidate::A, QualityScore::new(3.0));
    assert_eq!(handle.snapshot().score, 3.0);

    handle.clear();
    assert_eq!(other.snapshot(), SubmissionRecord::default());
}
