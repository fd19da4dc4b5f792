//! File format writers
//!
//! Each writer serializes the complete record sequence of one table to a
//! single file. Key order is lexicographic everywhere because the records
//! are BTreeMap-backed maps; the YAML writer emits literal block scalars for
//! strings containing newlines, so embedded line breaks survive a
//! serialize→deserialize round trip exactly.

use crate::error::Result;
use crate::records::FlatRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

/// Which file formats to write for each table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatSet {
    /// Pretty JSON (`<table>.json`)
    pub json: bool,
    /// Newline-delimited JSON (`<table>.ndjson`)
    pub ndjson: bool,
    /// YAML (`<table>.yml`)
    pub yaml: bool,
}

impl FormatSet {
    /// True if no format is selected
    pub fn is_empty(&self) -> bool {
        !self.json && !self.ndjson && !self.yaml
    }

    /// Apply the default rule: with no format selected and no database sink
    /// configured, YAML is written.
    #[must_use]
    pub fn or_default(mut self, has_database: bool) -> Self {
        if self.is_empty() && !has_database {
            self.yaml = true;
        }
        self
    }
}

/// Serialize a value as pretty JSON with 4-space indentation
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).expect("serde_json output is UTF-8"))
}

/// Write `<table>.json`: a pretty-printed array of records
pub fn write_json(output_dir: &Path, table: &str, records: &[FlatRecord]) -> Result<PathBuf> {
    let path = output_dir.join(format!("{table}.json"));
    fs::write(&path, to_pretty_json(&records)?)?;
    Ok(path)
}

/// Write `<table>.ndjson`: one compact record per line, joined by a single
/// newline with no trailing separator
pub fn write_ndjson(output_dir: &Path, table: &str, records: &[FlatRecord]) -> Result<PathBuf> {
    let path = output_dir.join(format!("{table}.ndjson"));
    let lines = records
        .iter()
        .map(serde_json::to_string)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    fs::write(&path, lines.join("\n"))?;
    Ok(path)
}

/// Write `<table>.yml`: a YAML sequence of records
pub fn write_yaml(output_dir: &Path, table: &str, records: &[FlatRecord]) -> Result<PathBuf> {
    let path = output_dir.join(format!("{table}.yml"));
    fs::write(&path, serde_yaml::to_string(&records)?)?;
    Ok(path)
}

/// Write every enabled format for one table, returning the paths written
pub fn write_enabled(
    output_dir: &Path,
    table: &str,
    records: &[FlatRecord],
    formats: FormatSet,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    if formats.json {
        written.push(write_json(output_dir, table, records)?);
    }
    if formats.ndjson {
        written.push(write_ndjson(output_dir, table, records)?);
    }
    if formats.yaml {
        written.push(write_yaml(output_dir, table, records)?);
    }
    Ok(written)
}
