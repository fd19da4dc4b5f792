//! Output sinks
//!
//! A completed table's records fan out to any combination of three file
//! formats and a DuckDB database. File writers run once per table after
//! pagination finishes; the database sink consumes fixed-size batches while
//! pagination is still running.

mod database;
mod formats;

pub use database::{Batcher, DatabaseSink, BATCH_SIZE};
pub use formats::{to_pretty_json, write_enabled, write_json, write_ndjson, write_yaml, FormatSet};
