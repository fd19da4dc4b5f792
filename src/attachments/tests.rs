//! Tests for attachment detection

use super::*;
use serde_json::json;

#[test]
fn test_detects_attachment_array() {
    let value = json!([
        {"id": "att1", "url": "https://x/a.png", "filename": "a.png", "size": 100},
        {"id": "att2", "url": "https://x/b.png", "filename": "b.png"}
    ]);

    let attachments = detect_attachments(&value).unwrap();
    assert_eq!(attachments.len(), 2);
    assert_eq!(
        attachments[0],
        AttachmentRef {
            id: "att1".to_string(),
            url: "https://x/a.png".to_string(),
            filename: "a.png".to_string(),
        }
    );
}

#[test]
fn test_empty_array_is_not_attachment_bearing() {
    assert!(detect_attachments(&json!([])).is_none());
}

#[test]
fn test_non_array_values_do_not_match() {
    assert!(detect_attachments(&json!("https://x/a.png")).is_none());
    assert!(detect_attachments(&json!(42)).is_none());
    assert!(detect_attachments(&json!(null)).is_none());
    assert!(detect_attachments(&json!({"url": "https://x/a.png"})).is_none());
}

#[test]
fn test_array_with_non_url_element_does_not_match() {
    // All elements must carry a url, not just the first
    let value = json!([
        {"id": "att1", "url": "https://x/a.png", "filename": "a.png"},
        {"id": "att2", "filename": "b.png"}
    ]);
    assert!(detect_attachments(&value).is_none());

    // Plain string lists are not attachments
    assert!(detect_attachments(&json!(["a", "b"])).is_none());
}

#[test]
fn test_non_string_url_does_not_match() {
    let value = json!([{"url": 42}]);
    assert!(detect_attachments(&value).is_none());
}

#[test]
fn test_missing_id_and_filename_default_to_empty() {
    let value = json!([{"url": "https://x/a.png"}]);
    let attachments = detect_attachments(&value).unwrap();
    assert_eq!(attachments[0].id, "");
    assert_eq!(attachments[0].filename, "");
}
