//! Record flattening

use super::types::{FlatRecord, RawRecord};
use serde_json::Value;

/// Reserved key holding the record identity
pub const ID_KEY: &str = "airtable_id";

/// Reserved key holding the record creation timestamp
pub const CREATED_TIME_KEY: &str = "airtable_createdTime";

/// Merge a record's fields, identity and creation timestamp into one flat
/// keyed structure.
///
/// The fields go in first, then `airtable_id`, then `airtable_createdTime`,
/// so both reserved keys always end up holding the record's own identity and
/// creation time even when a field shares their name. The insertion order
/// (identity before creation time) is a fixed compatibility policy.
pub fn flatten_record(record: &RawRecord) -> FlatRecord {
    let mut flat = record.fields.clone();
    flat.insert(ID_KEY.to_string(), Value::String(record.id.clone()));
    flat.insert(
        CREATED_TIME_KEY.to_string(),
        Value::String(record.created_time.clone()),
    );
    flat
}
