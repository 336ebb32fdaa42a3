use api_session_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use api_session_client::prelude::*;
use std::env;
use std::time::Duration;

#[test]
fn test_config_defaults() {
    let config = Config::new();
    assert_eq!(config.base_url, "https://jsonplaceholder.typicode.com");
    assert_eq!(config.timeout, 30);
    assert_eq!(config, Config::default());
    assert_eq!(config.timeout_duration(), Duration::from_secs(30));
}

#[test]
fn test_config_builders() {
    let config = Config::new()
        .with_base_url("http://localhost:8080")
        .with_timeout(5);
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout_duration(), Duration::from_secs(5));
}

#[test]
fn test_config_serialization() {
    let config = Config::new().with_timeout(12);
    let value = serde_json::to_value(&config).expect("serialize");
    assert_eq!(value, json!({"base_url": DEFAULT_BASE_URL, "timeout": 12}));

    let back: Config = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, config);
}

#[test]
fn test_config_display_mentions_fields() {
    let config = Config::new();
    let shown = config.to_string();
    assert!(shown.contains("jsonplaceholder.typicode.com"));
    assert!(shown.contains("30"));
}

#[test]
fn test_config_from_env() {
    // SAFETY: no other test in this binary reads these variables
    unsafe {
        env::set_var("API_BASE_URL", "http://127.0.0.1:9999");
        env::set_var("API_TIMEOUT_SECS", "not-a-number");
    }

    let config = Config::from_env();
    assert_eq!(config.base_url, "http://127.0.0.1:9999");
    assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);

    unsafe {
        env::remove_var("API_BASE_URL");
        env::remove_var("API_TIMEOUT_SECS");
    }
}

#[test]
fn test_client_keeps_configuration() {
    let client = SessionClient::new(Config::new().with_base_url("http://example.test"));
    assert_eq!(client.base_url(), "http://example.test");
    assert_eq!(client.config().timeout, 30);
    assert_eq!(client.transport().timeout(), Duration::from_secs(30));
}
