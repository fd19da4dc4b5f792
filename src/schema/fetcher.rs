//! Schema fetcher
//!
//! A single request to `<api>/meta/bases/<base>/tables`. Any non-success
//! status or transport error is fatal; there is no retry.

use super::types::BaseSchema;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::output::to_pretty_json;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Filename of the schema dump inside the output directory
pub const SCHEMA_DUMP_FILENAME: &str = "_schema.json";

/// The base schema, both as the raw API response and as a typed view
#[derive(Debug, Clone)]
pub struct SchemaSnapshot {
    /// Typed view, used to enumerate table names
    pub schema: BaseSchema,
    /// Raw response, persisted verbatim by [`SchemaSnapshot::write_dump`]
    pub raw: Value,
}

impl SchemaSnapshot {
    /// Names of all tables in the base, in API order
    pub fn table_names(&self) -> Vec<String> {
        self.schema
            .tables
            .iter()
            .map(|table| table.name.clone())
            .collect()
    }

    /// Write the raw schema to `<output_dir>/_schema.json`, pretty-printed
    /// with lexicographic keys, and return the path written.
    pub fn write_dump(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(SCHEMA_DUMP_FILENAME);
        fs::write(&path, to_pretty_json(&self.raw)?)?;
        Ok(path)
    }
}

/// Fetch the schema of a base
pub async fn fetch_base_schema(client: &HttpClient, base_id: &str) -> Result<SchemaSnapshot> {
    let url = client.api_url(&["meta", "bases", base_id, "tables"])?;
    let raw: Value = client.get_json(url, &[]).await?;
    if !raw.get("tables").is_some_and(Value::is_array) {
        return Err(Error::schema("response has no tables list"));
    }
    let schema: BaseSchema = serde_json::from_value(raw.clone())?;
    Ok(SchemaSnapshot { schema, raw })
}
