//! Record types
//!
//! `serde_json::Map` is BTreeMap-backed, so every map here iterates and
//! serializes in lexicographic key order.

use serde::Deserialize;
use serde_json::Value;

/// A record's field map as returned by the API
pub type FieldMap = serde_json::Map<String, Value>;

/// A flattened record: fields plus the reserved identity and
/// creation-time keys (see [`crate::records::flatten_record`])
pub type FlatRecord = serde_json::Map<String, Value>;

/// One record as returned by the records endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Record identity, unique within its table
    pub id: String,

    /// Field name → field value; an absent map is treated as empty
    #[serde(default)]
    pub fields: FieldMap,

    /// Creation timestamp (ISO-8601)
    #[serde(rename = "createdTime")]
    pub created_time: String,
}

/// One page of the records endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RecordsPage {
    /// Records on this page
    #[serde(default)]
    pub records: Vec<RawRecord>,

    /// Continuation cursor; absent on the final page
    #[serde(default)]
    pub offset: Option<String>,
}
