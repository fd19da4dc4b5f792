//! Export runner
//!
//! Drives the whole run: schema discovery, then per table a strictly
//! sequential pipeline of paginate → flatten → batch into the database sink
//! while accumulating in memory → file writers → attachment downloads.
//!
//! Any transport or HTTP failure aborts the run. Note that on a mid-table
//! pagination failure the database sink keeps every batch already flushed
//! while the file sinks for that table are never written.

use crate::attachments::AttachmentDownloader;
use crate::config::ExportConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::output::{write_enabled, Batcher, DatabaseSink};
use crate::records::{flatten_record, FlatRecord, RecordPages};
use crate::schema::fetch_base_schema;
use futures::TryStreamExt;
use std::fs;
use tracing::info;

/// Runs one export end to end
#[derive(Debug)]
pub struct Runner {
    config: ExportConfig,
}

impl Runner {
    /// Create a runner for the given configuration
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Execute the export
    pub async fn run(&self) -> Result<()> {
        fs::create_dir_all(&self.config.output_dir)?;

        let client = self.build_client();
        let sink = match &self.config.database {
            Some(path) => Some(DatabaseSink::open(path)?),
            None => None,
        };

        let mut tables = self.config.tables.clone();
        if tables.is_empty() || self.config.dump_schema {
            let snapshot = fetch_base_schema(&client, &self.config.base_id).await?;
            let dump_path = snapshot.write_dump(&self.config.output_dir)?;
            info!("Wrote base schema to {}", dump_path.display());
            if tables.is_empty() {
                tables = snapshot.table_names();
            }
        }

        for table in &tables {
            self.export_table(&client, sink.as_ref(), table).await?;
        }

        Ok(())
    }

    /// Export one table: paginate, flatten, fan out to the sinks
    async fn export_table(
        &self,
        client: &HttpClient,
        sink: Option<&DatabaseSink>,
        table: &str,
    ) -> Result<()> {
        let mut records: Vec<FlatRecord> = Vec::new();
        let mut batcher = Batcher::new();

        let stream =
            RecordPages::new(client, &self.config.base_id, table).into_record_stream();
        futures::pin_mut!(stream);

        while let Some(record) = stream.try_next().await? {
            let flat = flatten_record(&record);
            if let Some(sink) = sink {
                if let Some(batch) = batcher.push(flat.clone()) {
                    sink.upsert_batch(table, &batch)?;
                }
            }
            records.push(flat);
        }

        if let Some(sink) = sink {
            if let Some(batch) = batcher.finish() {
                sink.upsert_batch(table, &batch)?;
            }
        }

        let written = write_enabled(
            &self.config.output_dir,
            table,
            &records,
            self.config.formats,
        )?;
        let filenames = written
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        info!(
            "Wrote {} record{} to {}",
            records.len(),
            if records.len() == 1 { "" } else { "s" },
            filenames
        );

        if self.config.download_attachments {
            info!("Checking for attachments to download");
            let downloader = AttachmentDownloader::new(client, &self.config.output_dir);
            downloader.download_table(table, &records).await?;
        }

        Ok(())
    }

    fn build_client(&self) -> HttpClient {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.config.api_url)
            .api_key(&self.config.api_key);
        if let Some(timeout) = self.config.read_timeout {
            builder = builder.read_timeout(timeout);
        }
        if let Some(user_agent) = &self.config.user_agent {
            builder = builder.user_agent(user_agent);
        }
        HttpClient::with_config(builder.build())
    }
}
