//! Tests for the HTTP client module

use super::*;
use std::time::Duration;

#[test]
fn test_config_defaults() {
    let config = HttpClientConfig::default();
    assert_eq!(config.base_url, DEFAULT_API_URL);
    assert!(config.read_timeout.is_none());
    assert!(config.user_agent.starts_with("airtable-export/"));
}

#[test]
fn test_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("http://localhost:9999")
        .api_key("key123")
        .read_timeout(Duration::from_secs(30))
        .user_agent("custom-agent/1.0")
        .build();

    assert_eq!(config.base_url, "http://localhost:9999");
    assert_eq!(config.api_key, "key123");
    assert_eq!(config.read_timeout, Some(Duration::from_secs(30)));
    assert_eq!(config.user_agent, "custom-agent/1.0");
}

#[test]
fn test_api_url_simple() {
    let client = HttpClient::with_config(HttpClientConfig::default());
    let url = client.api_url(&["app123", "Tasks"]).unwrap();
    assert_eq!(url.as_str(), "https://api.airtable.com/v0/app123/Tasks");
}

#[test]
fn test_api_url_encodes_segments() {
    let client = HttpClient::with_config(HttpClientConfig::default());

    // Spaces are encoded
    let url = client.api_url(&["app123", "My Table"]).unwrap();
    assert_eq!(url.as_str(), "https://api.airtable.com/v0/app123/My%20Table");

    // A slash in a table name stays inside one path segment
    let url = client.api_url(&["app123", "a/b"]).unwrap();
    assert_eq!(url.as_str(), "https://api.airtable.com/v0/app123/a%2Fb");
}

#[test]
fn test_api_url_trailing_slash_base() {
    let config = HttpClientConfig::builder()
        .base_url("http://localhost:8080/")
        .build();
    let client = HttpClient::with_config(config);

    let url = client.api_url(&["meta", "bases", "app1", "tables"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/meta/bases/app1/tables");
}
