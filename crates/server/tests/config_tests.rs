use chzzk_interlock::config::{AppConfig, load_config, load_config_or_panic};
use config::Config;
use std::env;

#[test]
fn test_load_config_from_environment_variables() {
    // Set, load, unset and load again in one test so the writes to the
    // process environment cannot race a parallel test thread.
    unsafe {
        env::set_var("CLIENT_ID", "env-client");
        env::set_var("REDIRECT_URI", "http://localhost:3000/auth/callback");
    }

    let config = load_config().expect("Failed to load config");
    assert_eq!(config.client_id.as_deref(), Some("env-client"));
    assert_eq!(
        config.redirect_uri.as_deref(),
        Some("http://localhost:3000/auth/callback")
    );

    unsafe {
        env::remove_var("CLIENT_ID");
        env::remove_var("REDIRECT_URI");
    }

    let config = load_config().expect("Failed to load config without variables");
    assert!(config.client_id.is_none());
    assert!(config.redirect_uri.is_none());

    // The panic variant succeeds the same way when nothing is set.
    let config = load_config_or_panic();
    assert!(config.client_id.is_none());
}

#[test]
fn test_app_config_deserialization() {
    let config = Config::builder()
        .set_override("client_id", "abc")
        .expect("Failed to set client_id")
        .set_override("redirect_uri", "https://example.com/cb")
        .expect("Failed to set redirect_uri")
        .build()
        .expect("Failed to build config");

    let app_config: AppConfig = config
        .try_deserialize()
        .expect("Failed to deserialize app config");
    assert_eq!(app_config.client_id.as_deref(), Some("abc"));
    assert_eq!(app_config.redirect_uri.as_deref(), Some("https://example.com/cb"));
}

#[test]
fn test_config_partial_structure() {
    // A source carrying only one of the two keys still deserializes; the
    // other field stays None.
    let config = Config::builder()
        .set_override("client_id", "abc")
        .expect("Failed to set client_id")
        .build()
        .expect("Failed to build config");

    let app_config: AppConfig = config
        .try_deserialize()
        .expect("Failed to deserialize partial config");
    assert_eq!(app_config.client_id.as_deref(), Some("abc"));
    assert!(app_config.redirect_uri.is_none());
}

#[test]
fn test_config_ignores_unrelated_keys() {
    let config = Config::builder()
        .set_override("client_id", "abc")
        .expect("Failed to set client_id")
        .set_override("path", "/usr/bin")
        .expect("Failed to set unrelated key")
        .build()
        .expect("Failed to build config");

    let app_config: AppConfig = config
        .try_deserialize()
        .expect("Failed to deserialize config with extra keys");
    assert_eq!(app_config.client_id.as_deref(), Some("abc"));
}
