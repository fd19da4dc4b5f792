//! # airtable-export
//!
//! Export every record of an Airtable base to local files and/or an
//! embedded DuckDB database, optionally downloading attachments.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use airtable_export::{config::ExportConfig, cli::Runner, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ExportConfig::new("backup/", "appXXXXXXXXXXXXXX", "patXXX").resolved();
//!     Runner::new(config).run().await
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! schema fetcher ──> table names + _schema.json
//!        │
//! record paginator ──> flattener ──┬──> 100-record batches ──> DuckDB sink
//!   (cursor + fixed delay)         └──> in-memory table ──> json / ndjson / yaml
//!                                                  │
//!                                       attachment downloader
//! ```
//!
//! Everything is strictly sequential: one table at a time, one page at a
//! time, one attachment at a time. The only suspension besides I/O is the
//! fixed inter-page delay. Any transport or HTTP failure is fatal to the
//! whole run; nothing is retried.

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Export run configuration
pub mod config;

/// HTTP client for the Airtable API
pub mod http;

/// Base schema fetching
pub mod schema;

/// Record fetching and flattening
pub mod records;

/// Output sinks: file formats and the DuckDB database
pub mod output;

/// Attachment detection and download
pub mod attachments;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
