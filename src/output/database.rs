//! DuckDB upsert sink
//!
//! Receives fixed-size batches of flattened records during pagination and
//! upserts them into one DuckDB table per Airtable table, keyed by
//! `airtable_id`. Newly-seen field names become new columns. Batches already
//! flushed stay in the database if pagination later fails mid-table; the
//! file sinks for that table are never written in that case, so the two can
//! diverge. There is no rollback.

use crate::error::Result;
use crate::records::{FlatRecord, ID_KEY};
use duckdb::Connection;
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tracing::debug;

/// Number of records per batch handed to the sink
pub const BATCH_SIZE: usize = 100;

// ============================================================================
// Batcher
// ============================================================================

/// Assembles fixed-size batches of records.
///
/// `push` returns a full batch once the size is reached; `finish` returns
/// the shorter final batch, or `None` when nothing is pending — an empty
/// final batch is never handed to the sink.
#[derive(Debug)]
pub struct Batcher {
    pending: Vec<FlatRecord>,
    size: usize,
}

impl Default for Batcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Batcher {
    /// Create a batcher with the default batch size
    pub fn new() -> Self {
        Self::with_size(BATCH_SIZE)
    }

    /// Create a batcher with a custom batch size
    pub fn with_size(size: usize) -> Self {
        Self {
            pending: Vec::with_capacity(size),
            size,
        }
    }

    /// Add a record; returns a full batch when the size is reached
    pub fn push(&mut self, record: FlatRecord) -> Option<Vec<FlatRecord>> {
        self.pending.push(record);
        if self.pending.len() == self.size {
            Some(std::mem::replace(
                &mut self.pending,
                Vec::with_capacity(self.size),
            ))
        } else {
            None
        }
    }

    /// Take the final, possibly shorter batch
    pub fn finish(self) -> Option<Vec<FlatRecord>> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending)
        }
    }
}

// ============================================================================
// DatabaseSink
// ============================================================================

/// DuckDB-backed tabular sink
pub struct DatabaseSink {
    conn: Connection,
}

impl DatabaseSink {
    /// Open (or create) the database file
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Upsert one batch of records into `table`.
    ///
    /// The table is created on first use with `airtable_id` as primary key;
    /// columns are added for field names not seen before. All non-key
    /// columns are VARCHAR: non-string values are stored as their compact
    /// JSON text, since a field's value type can vary between records.
    pub fn upsert_batch(&self, table: &str, batch: &[FlatRecord]) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }

        self.ensure_table(table)?;

        let mut existing = self.existing_columns(table)?;
        let keys: BTreeSet<&str> = batch
            .iter()
            .flat_map(|record| record.keys().map(String::as_str))
            .collect();

        for key in &keys {
            if !existing.contains(*key) {
                self.conn.execute_batch(&format!(
                    "ALTER TABLE {} ADD COLUMN {} VARCHAR",
                    quote_ident(table),
                    quote_ident(key)
                ))?;
                existing.insert((*key).to_string());
            }
        }

        let columns: Vec<&str> = keys.into_iter().collect();
        let column_list = columns
            .iter()
            .map(|column| quote_ident(column))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT OR REPLACE INTO {} ({column_list}) VALUES ({placeholders})",
            quote_ident(table)
        );

        let mut stmt = self.conn.prepare(&sql)?;
        for record in batch {
            let values: Vec<Option<String>> = columns
                .iter()
                .map(|column| record.get(*column).and_then(value_to_text))
                .collect();
            stmt.execute(duckdb::params_from_iter(values))?;
        }

        debug!(table, rows = batch.len(), "upserted batch");
        Ok(())
    }

    fn ensure_table(&self, table: &str) -> Result<()> {
        self.conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {} ({} VARCHAR PRIMARY KEY)",
            quote_ident(table),
            quote_ident(ID_KEY)
        ))?;
        Ok(())
    }

    fn existing_columns(&self, table: &str) -> Result<HashSet<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT column_name FROM information_schema.columns WHERE table_name = ?")?;
        let columns = stmt
            .query_map([table], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<HashSet<_>, _>>()?;
        Ok(columns)
    }
}

impl std::fmt::Debug for DatabaseSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSink").finish_non_exhaustive()
    }
}

/// Quote an identifier for SQL
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Render a JSON value for a VARCHAR column; nulls stay NULL
fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
