//! Tests for the full validation pipeline.

use super::*;
use crate::schema::ParleyConfig;

#[test]
fn default_config_validates() {
    let config = ParleyConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_url() {
    let mut config = ParleyConfig::default();
    config.endpoint.url = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.url is empty"));
}

#[test]
fn catches_non_http_url() {
    let mut config = ParleyConfig::default();
    config.endpoint.url = "ftp://example.com/ask".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.url"));
}

#[test]
fn accepts_local_http_url() {
    let mut config = ParleyConfig::default();
    config.endpoint.url = "http://127.0.0.1:8080/ask".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_bad_customer_id() {
    let mut config = ParleyConfig::default();
    config.endpoint.customer_id = Some("acme corp&x=1".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.customer_id"));
}

#[test]
fn customer_id_is_optional() {
    let mut config = ParleyConfig::default();
    config.endpoint.customer_id = None;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_timeouts_out_of_range() {
    let mut config = ParleyConfig::default();
    config.endpoint.connect_timeout_secs = 0;
    config.endpoint.request_timeout_secs = 601;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.connect_timeout_secs"));
    assert!(err.contains("endpoint.request_timeout_secs"));
}

#[test]
fn catches_too_many_starter_prompts() {
    let mut config = ParleyConfig::default();
    config.assistant.starter_prompts = (0..9).map(|i| format!("prompt {i}")).collect();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.starter_prompts"));
}

#[test]
fn catches_blank_starter_prompt_and_name() {
    let mut config = ParleyConfig::default();
    config.assistant.name = String::new();
    config.assistant.starter_prompts = vec!["ok".into(), " ".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.name is empty"));
    assert!(err.contains("assistant.starter_prompts[1] is blank"));
}

#[test]
fn collects_all_errors() {
    let mut config = ParleyConfig::default();
    config.endpoint.url = String::new();
    config.assistant.name = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert_eq!(err.matches("; ").count(), 1);
}
