//! CLI argument parsing

use crate::config::ExportConfig;
use crate::output::FormatSet;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Export Airtable data to YAML, JSON, NDJSON or a DuckDB database
#[derive(Parser, Debug)]
#[command(name = "airtable-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to write exported files to (created if missing)
    pub output_path: PathBuf,

    /// Airtable base ID
    pub base_id: String,

    /// Tables to export (default: every table in the base)
    pub tables: Vec<String>,

    /// Airtable API key
    #[arg(long, env = "AIRTABLE_KEY", hide_env_values = true)]
    pub key: String,

    /// Timeout (in seconds) for network read operations
    #[arg(long, value_name = "SECONDS")]
    pub http_read_timeout: Option<u64>,

    /// User agent to use for requests
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// JSON format
    #[arg(long)]
    pub json: bool,

    /// Newline delimited JSON format
    #[arg(long)]
    pub ndjson: bool,

    /// YAML format (default)
    #[arg(long)]
    pub yaml: bool,

    /// Export to this DuckDB database
    #[arg(long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Save base schema to output_path/_schema.json
    #[arg(long)]
    pub schema: bool,

    /// Download attachments and save them to disk
    #[arg(long)]
    pub download_attachments: bool,
}

impl Cli {
    /// Resolve the parsed arguments into an export configuration
    pub fn into_config(self) -> ExportConfig {
        let mut config = ExportConfig::new(self.output_path, self.base_id, self.key);
        config.tables = self.tables;
        config.read_timeout = self.http_read_timeout.map(Duration::from_secs);
        config.user_agent = self.user_agent;
        config.formats = FormatSet {
            json: self.json,
            ndjson: self.ndjson,
            yaml: self.yaml,
        };
        config.database = self.database;
        config.dump_schema = self.schema;
        config.download_attachments = self.download_attachments;
        config.resolved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_minimal_invocation_defaults_to_yaml() {
        let cli = parse(&["airtable-export", "out", "app1", "--key", "k"]);
        let config = cli.into_config();
        assert_eq!(config.base_id, "app1");
        assert!(config.tables.is_empty());
        assert!(config.formats.yaml);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_explicit_tables_and_formats() {
        let cli = parse(&[
            "airtable-export",
            "out",
            "app1",
            "Tasks",
            "People",
            "--key",
            "k",
            "--json",
            "--ndjson",
        ]);
        let config = cli.into_config();
        assert_eq!(config.tables, vec!["Tasks", "People"]);
        assert!(config.formats.json);
        assert!(config.formats.ndjson);
        assert!(!config.formats.yaml);
    }

    #[test]
    fn test_database_alone_disables_file_formats() {
        let cli = parse(&[
            "airtable-export",
            "out",
            "app1",
            "--key",
            "k",
            "--database",
            "export.db",
        ]);
        let config = cli.into_config();
        assert!(config.formats.is_empty());
        assert_eq!(config.database.as_deref().unwrap().to_str(), Some("export.db"));
    }

    #[test]
    fn test_read_timeout_in_seconds() {
        let cli = parse(&[
            "airtable-export",
            "out",
            "app1",
            "--key",
            "k",
            "--http-read-timeout",
            "45",
        ]);
        let config = cli.into_config();
        assert_eq!(config.read_timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_missing_key_is_an_error() {
        // Clear the env fallback for this check
        std::env::remove_var("AIRTABLE_KEY");
        assert!(Cli::try_parse_from(["airtable-export", "out", "app1"]).is_err());
    }
}
