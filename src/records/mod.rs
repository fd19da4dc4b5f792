//! Record fetching and flattening
//!
//! The paginator walks a table's records endpoint following the opaque
//! `offset` cursor; the flattener merges each record's identity, field map
//! and creation timestamp into one flat keyed structure.

mod flatten;
mod paginator;
mod types;

pub use flatten::{flatten_record, CREATED_TIME_KEY, ID_KEY};
pub use paginator::{RecordPages, DEFAULT_PAGE_DELAY};
pub use types::{FieldMap, FlatRecord, RawRecord, RecordsPage};

#[cfg(test)]
mod tests;
