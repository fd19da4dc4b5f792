//! Base schema fetching
//!
//! One GET to the base metadata endpoint returns the list of tables and
//! their column definitions. The raw response is kept verbatim for the
//! `_schema.json` dump; a typed view on top of it is used to enumerate
//! table names when none are given on the command line.

mod fetcher;
mod types;

pub use fetcher::{fetch_base_schema, SchemaSnapshot, SCHEMA_DUMP_FILENAME};
pub use types::{BaseSchema, Table, TableField};
