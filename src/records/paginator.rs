//! Record paginator
//!
//! Walks a table's records endpoint one page at a time: the first request
//! carries no cursor; while a response returns an `offset`, the next request
//! repeats with that cursor as a query parameter. A fixed delay is slept
//! before every request except the first. This is the only rate limiting
//! and it is unconditional, not adaptive to server-signaled throttling.
//!
//! The sequence is one-shot and finite: it cannot be restarted, and a
//! transport or HTTP error mid-sequence ends it. Records already yielded
//! stay with whatever downstream consumers received them; the table is not
//! completed.

use super::types::{RawRecord, RecordsPage};
use crate::error::Result;
use crate::http::HttpClient;
use futures::Stream;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::debug;

/// Default delay between two paginated requests
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(200);

/// Cursor state for paging through one table's records
pub struct RecordPages<'a> {
    client: &'a HttpClient,
    base_id: String,
    table: String,
    delay: Duration,
    offset: Option<String>,
    started: bool,
    done: bool,
}

impl<'a> RecordPages<'a> {
    /// Create a paginator for one table
    pub fn new(client: &'a HttpClient, base_id: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            client,
            base_id: base_id.into(),
            table: table.into(),
            delay: DEFAULT_PAGE_DELAY,
            offset: None,
            started: false,
            done: false,
        }
    }

    /// Override the inter-page delay
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fetch the next page of records.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted. After an error the
    /// paginator is done; further calls return `Ok(None)` rather than
    /// re-issuing the failed request.
    pub async fn next_page(&mut self) -> Result<Option<Vec<RawRecord>>> {
        if self.done {
            return Ok(None);
        }

        if self.started {
            tokio::time::sleep(self.delay).await;
        }

        let url = self.client.api_url(&[&self.base_id, &self.table])?;
        let query: Vec<(&str, &str)> = match &self.offset {
            Some(offset) => vec![("offset", offset.as_str())],
            None => Vec::new(),
        };

        let page: RecordsPage = match self.client.get_json(url, &query).await {
            Ok(page) => page,
            Err(e) => {
                self.done = true;
                return Err(e);
            }
        };
        self.started = true;

        match page.offset {
            Some(offset) if !offset.is_empty() => {
                debug!(table = %self.table, "page of {} records, more to fetch", page.records.len());
                self.offset = Some(offset);
            }
            _ => {
                debug!(table = %self.table, "final page of {} records", page.records.len());
                self.offset = None;
                self.done = true;
            }
        }

        Ok(Some(page.records))
    }

    /// Turn the paginator into a lazy stream of records.
    ///
    /// Pages are fetched on demand as the stream is polled; the stream ends
    /// after the final page or on the first error.
    pub fn into_record_stream(self) -> impl Stream<Item = Result<RawRecord>> + 'a {
        futures::stream::try_unfold(
            (self, VecDeque::new()),
            |(mut pages, mut pending)| async move {
                loop {
                    if let Some(record) = pending.pop_front() {
                        return Ok(Some((record, (pages, pending))));
                    }
                    match pages.next_page().await? {
                        Some(records) => pending.extend(records),
                        None => return Ok(None),
                    }
                }
            },
        )
    }
}

impl std::fmt::Debug for RecordPages<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordPages")
            .field("base_id", &self.base_id)
            .field("table", &self.table)
            .field("offset", &self.offset)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
