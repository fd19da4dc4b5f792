//! Attachment detection and download
//!
//! Attachment-bearing cells are detected structurally, not declared: a cell
//! value qualifies if it is a non-empty array whose elements are all objects
//! carrying a string `"url"`. An empty array never qualifies. Every element
//! of a qualifying cell is one attachment.
//!
//! Downloads run once per table, after the file sinks, over the accumulated
//! flattened records. Each file lands at
//! `attachments/<table>/<record id>/<attachment id>__<filename>` below the
//! output directory. Any failed download aborts the whole run.

use crate::error::Result;
use crate::http::HttpClient;
use crate::records::{FlatRecord, ID_KEY};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// One attachment referenced by a cell value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRef {
    /// Attachment identity
    pub id: String,
    /// Source URL (pre-signed; fetched without credentials)
    pub url: String,
    /// Original filename
    pub filename: String,
}

/// Detect whether a cell value is attachment-bearing, returning its
/// attachments if so.
///
/// A qualifying value is a non-empty array whose elements are all objects
/// with a string `"url"` key. Elements missing `id` or `filename` keep an
/// empty string for that part of the download path.
pub fn detect_attachments(value: &Value) -> Option<Vec<AttachmentRef>> {
    let items = value.as_array()?;
    if items.is_empty() {
        return None;
    }
    if !items
        .iter()
        .all(|item| item.get("url").is_some_and(Value::is_string))
    {
        return None;
    }

    Some(
        items
            .iter()
            .map(|item| AttachmentRef {
                id: string_field(item, "id"),
                url: string_field(item, "url"),
                filename: string_field(item, "filename"),
            })
            .collect(),
    )
}

fn string_field(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Downloads every attachment referenced by a table's records
#[derive(Debug)]
pub struct AttachmentDownloader<'a> {
    client: &'a HttpClient,
    output_dir: PathBuf,
}

impl<'a> AttachmentDownloader<'a> {
    /// Create a downloader writing below `output_dir`
    pub fn new(client: &'a HttpClient, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
        }
    }

    /// Destination path for one attachment
    pub fn destination(&self, table: &str, record_id: &str, attachment: &AttachmentRef) -> PathBuf {
        self.output_dir
            .join("attachments")
            .join(table)
            .join(record_id)
            .join(format!("{}__{}", attachment.id, attachment.filename))
    }

    /// Scan `records` for attachment-bearing cells and download every
    /// referenced file, sequentially. Returns the number of files written.
    pub async fn download_table(&self, table: &str, records: &[FlatRecord]) -> Result<usize> {
        let mut downloaded = 0;

        for record in records {
            let record_id = record
                .get(ID_KEY)
                .and_then(Value::as_str)
                .unwrap_or_default();

            for value in record.values() {
                let Some(attachments) = detect_attachments(value) else {
                    continue;
                };
                for attachment in attachments {
                    let bytes = self.client.get_bytes(&attachment.url).await?;
                    let destination = self.destination(table, record_id, &attachment);
                    if let Some(parent) = destination.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(&destination, &bytes)?;
                    info!("Downloaded attachment to '{}'", destination.display());
                    downloaded += 1;
                }
            }
        }

        Ok(downloaded)
    }
}

#[cfg(test)]
mod tests;
