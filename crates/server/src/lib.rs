//! A local web endpoint for the Chzzk account-interlock authorization flow.
//!
//! This library sends a browser to the Chzzk authorization page and records
//! the authorization code and state the provider returns, persisting them to
//! a JSON file for an external consumer to pick up.

use std::sync::Arc;

use crate::config::AppConfig;

pub mod api;
pub mod config;
pub mod error;
pub mod response;
pub mod storage;

#[derive(Clone, Debug)]
pub struct AppResources {
    pub config: Arc<AppConfig>,
}
