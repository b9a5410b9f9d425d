use chzzk_interlock::AppResources;
use chzzk_interlock::api::AppState;
use chzzk_interlock::api::start_webserver;
use chzzk_interlock::config::load_config_or_panic;
use chzzk_interlock::storage::AUTH_DATA_FILE;
use chzzk_interlock::storage::AuthDataStore;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_tracing() {
    let default_directives = "chzzk_interlock=info,tower_http=warn";
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer().with_target(true).with_level(true);

    registry.with(layer).init();
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install().expect("Failed to install `color_eyre::install`");

    // Pick up a .env file from the working directory before anything reads
    // the process environment. Absence is not an error.
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    initialize_tracing();
    if dotenv_loaded {
        tracing::info!("Loaded environment from .env file");
    }

    // Load config
    let config = Arc::new(load_config_or_panic());
    if config.client_id.is_none() {
        tracing::warn!("CLIENT_ID is not set, the authorization redirect will carry a placeholder");
    }
    if config.redirect_uri.is_none() {
        tracing::warn!(
            "REDIRECT_URI is not set, the authorization redirect will carry a placeholder"
        );
    }

    let store = Arc::new(AuthDataStore::new(AUTH_DATA_FILE));

    let state = AppState { store };
    let resources = AppResources { config };

    start_webserver(state, resources).await?;
    Ok(())
}
