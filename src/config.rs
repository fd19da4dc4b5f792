//! Export run configuration
//!
//! The resolved options for one run, after CLI parsing and default-flag
//! resolution. Tests construct this directly to point the exporter at a
//! mock server via `api_url`.

use crate::http::DEFAULT_API_URL;
use crate::output::FormatSet;
use std::path::PathBuf;
use std::time::Duration;

/// Options for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory exported files are written to (created if missing)
    pub output_dir: PathBuf,

    /// Airtable base ID
    pub base_id: String,

    /// Tables to export; empty means discover all tables in the base
    pub tables: Vec<String>,

    /// API credential
    pub api_key: String,

    /// API endpoint; overridable so tests can target a mock server
    pub api_url: String,

    /// Read timeout for schema and record requests
    pub read_timeout: Option<Duration>,

    /// User-agent override
    pub user_agent: Option<String>,

    /// File formats to write per table
    pub formats: FormatSet,

    /// DuckDB database to upsert records into; `None` disables the sink
    pub database: Option<PathBuf>,

    /// Write the raw base schema to `_schema.json`
    pub dump_schema: bool,

    /// Download attachment-bearing cells
    pub download_attachments: bool,
}

impl ExportConfig {
    /// Create a config with defaults for everything but the essentials
    pub fn new(
        output_dir: impl Into<PathBuf>,
        base_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            base_id: base_id.into(),
            tables: Vec::new(),
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            read_timeout: None,
            user_agent: None,
            formats: FormatSet::default(),
            database: None,
            dump_schema: false,
            download_attachments: false,
        }
    }

    /// Apply the default-format rule: with no format selected and no
    /// database sink configured, YAML is written.
    #[must_use]
    pub fn resolved(mut self) -> Self {
        self.formats = self.formats.or_default(self.database.is_some());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_defaults_to_yaml() {
        let config = ExportConfig::new("/tmp/out", "app1", "key").resolved();
        assert!(config.formats.yaml);
        assert!(!config.formats.json);
    }

    #[test]
    fn test_resolved_with_database_has_no_formats() {
        let mut config = ExportConfig::new("/tmp/out", "app1", "key");
        config.database = Some(PathBuf::from("/tmp/export.db"));
        let config = config.resolved();
        assert!(config.formats.is_empty());
    }

    #[test]
    fn test_resolved_keeps_explicit_formats() {
        let mut config = ExportConfig::new("/tmp/out", "app1", "key");
        config.formats.ndjson = true;
        config.database = Some(PathBuf::from("/tmp/export.db"));
        let config = config.resolved();
        assert!(config.formats.ndjson);
        assert!(!config.formats.yaml);
    }
}
