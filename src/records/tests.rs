//! Tests for record types and flattening

use super::*;
use serde_json::{json, Value};

fn record(id: &str, fields: Value, created: &str) -> RawRecord {
    serde_json::from_value(json!({
        "id": id,
        "fields": fields,
        "createdTime": created,
    }))
    .unwrap()
}

// ============================================================================
// Deserialization Tests
// ============================================================================

#[test]
fn test_raw_record_parses() {
    let record = record("rec1", json!({"Name": "Widget", "Count": 3}), "2021-01-01T00:00:00.000Z");
    assert_eq!(record.id, "rec1");
    assert_eq!(record.created_time, "2021-01-01T00:00:00.000Z");
    assert_eq!(record.fields.len(), 2);
    assert_eq!(record.fields["Count"], json!(3));
}

#[test]
fn test_missing_fields_map_is_empty() {
    let record: RawRecord = serde_json::from_value(json!({
        "id": "rec1",
        "createdTime": "2021-01-01T00:00:00.000Z",
    }))
    .unwrap();
    assert!(record.fields.is_empty());
}

#[test]
fn test_records_page_offset_optional() {
    let page: RecordsPage = serde_json::from_value(json!({
        "records": [{"id": "rec1", "createdTime": "t"}],
    }))
    .unwrap();
    assert_eq!(page.records.len(), 1);
    assert!(page.offset.is_none());

    let page: RecordsPage = serde_json::from_value(json!({
        "records": [],
        "offset": "itrA/recB",
    }))
    .unwrap();
    assert_eq!(page.offset.as_deref(), Some("itrA/recB"));
}

// ============================================================================
// Flatten Tests
// ============================================================================

#[test]
fn test_flatten_basic() {
    let record = record(
        "rec1",
        json!({"Name": "Widget", "Count": 3}),
        "2021-01-01T00:00:00.000Z",
    );
    let flat = flatten_record(&record);

    assert_eq!(flat[ID_KEY], json!("rec1"));
    assert_eq!(flat[CREATED_TIME_KEY], json!("2021-01-01T00:00:00.000Z"));
    assert_eq!(flat["Name"], json!("Widget"));
    assert_eq!(flat["Count"], json!(3));
    assert_eq!(flat.len(), 4);
}

#[test]
fn test_flatten_empty_fields() {
    let record = record("rec1", json!({}), "t");
    let flat = flatten_record(&record);
    assert_eq!(flat.len(), 2);
    assert_eq!(flat[ID_KEY], json!("rec1"));
    assert_eq!(flat[CREATED_TIME_KEY], json!("t"));
}

#[test]
fn test_flatten_id_collision_keeps_true_identity() {
    // A field named like the identity key loses to the record's own id
    let record = record("rec_true", json!({"airtable_id": "imposter"}), "t");
    let flat = flatten_record(&record);
    assert_eq!(flat[ID_KEY], json!("rec_true"));
    assert_eq!(flat.len(), 2);
}

#[test]
fn test_flatten_created_time_collision_keeps_true_timestamp() {
    // Creation time always wins last over a same-named field
    let record = record("rec1", json!({"airtable_createdTime": "imposter"}), "2021-06-01T00:00:00.000Z");
    let flat = flatten_record(&record);
    assert_eq!(flat[CREATED_TIME_KEY], json!("2021-06-01T00:00:00.000Z"));
    assert_eq!(flat.len(), 2);
}

#[test]
fn test_flatten_both_collisions() {
    let record = record(
        "rec_true",
        json!({
            "airtable_id": "imposter-id",
            "airtable_createdTime": "imposter-time",
            "Name": "ok"
        }),
        "2021-06-01T00:00:00.000Z",
    );
    let flat = flatten_record(&record);

    assert_eq!(flat[ID_KEY], json!("rec_true"));
    assert_eq!(flat[CREATED_TIME_KEY], json!("2021-06-01T00:00:00.000Z"));
    assert_eq!(flat["Name"], json!("ok"));
    assert_eq!(flat.len(), 3);
}

#[test]
fn test_flatten_preserves_nested_values() {
    let record = record(
        "rec1",
        json!({
            "Attachments": [{"id": "att1", "url": "https://x/y.png", "filename": "y.png"}],
            "Tags": ["a", "b"],
            "Empty": null
        }),
        "t",
    );
    let flat = flatten_record(&record);
    assert!(flat["Attachments"].is_array());
    assert_eq!(flat["Tags"], json!(["a", "b"]));
    assert!(flat["Empty"].is_null());
}

#[test]
fn test_flat_record_keys_are_lexicographic() {
    let record = record("rec1", json!({"zeta": 1, "alpha": 2}), "t");
    let flat = flatten_record(&record);
    let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["airtable_createdTime", "airtable_id", "alpha", "zeta"]
    );
}
