use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration build error: {0}")]
    Build(#[from] config::ConfigError),
}

/// Provider-facing configuration, read once at startup and never mutated.
///
/// Neither value is validated or defaulted here. The redirect route renders a
/// missing value as a literal placeholder instead of refusing to start.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub client_id: Option<String>,
    pub redirect_uri: Option<String>,
}

/// Load application configuration from the process environment.
///
/// `CLIENT_ID` and `REDIRECT_URI` map onto the struct fields by lowercasing;
/// an unset variable loads as `None`.
///
/// Returns a `ConfigError` instead of panicking so the caller can decide how to fail.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment};
    let cfg = Config::builder()
        .add_source(Environment::default())
        .build()?;

    let app: AppConfig = cfg.try_deserialize()?;

    Ok(app)
}

/// Convenience helper for binaries wanting the panic-on-error behaviour.
pub fn load_config_or_panic() -> AppConfig {
    match load_config() {
        Ok(c) => c,
        Err(e) => panic!("Failed to load configuration: {e}"),
    }
}
