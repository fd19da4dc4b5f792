//! HTTP client module
//!
//! A thin wrapper around `reqwest` configured for the Airtable API:
//! bearer authentication, optional user-agent override, a fixed connect
//! timeout and an independently configurable read timeout.
//!
//! One client handle is built per run and passed explicitly to the schema
//! fetcher, the record paginator and the attachment downloader. There is no
//! retry logic anywhere: a non-success status or transport error is mapped
//! to a fatal [`crate::Error`].

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, DEFAULT_API_URL};

#[cfg(test)]
mod tests;
