//! Account-interlock endpoints.
//!
//! Implements the browser-facing half of the authorization-code flow:
//! - Entry point that redirects to the provider's authorization page
//! - Callback that records the code and state the provider sends back

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::AppResources;
use crate::response::AuthorizationResult;
use crate::storage::AuthDataStore;

/// Tag for OpenAPI documentation.
pub const INTERLOCK_TAG: &str = "Account Interlock";

/// Authorization page of the Chzzk provider.
pub const AUTHORIZE_ENDPOINT: &str = "https://chzzk.naver.com/account-interlock";

/// Body returned by the callback route once the data is on disk.
pub const CALLBACK_SAVED_BODY: &str = "Authentication data saved.";

/// Shared state for the interlock endpoints.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AuthDataStore>,
}

/// Creates the interlock router.
pub fn router(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(authorize))
        .routes(routes!(callback))
        .with_state(state)
}

// =============================================================================
// Request Types
// =============================================================================

/// Query parameters the provider appends to the callback redirect.
#[derive(Debug, Deserialize, IntoParams)]
pub struct CallbackParams {
    /// Authorization code issued by the provider.
    pub code: Option<String>,
    /// State value echoed back by the provider.
    pub state: Option<String>,
}

// =============================================================================
// Endpoints
// =============================================================================

/// Build the provider authorization URL for the configured client.
///
/// Both values are percent-encoded into the query string. A value missing
/// from the configuration is rendered as the literal text `None`; the
/// redirect is issued either way and the provider rejects it on its side.
fn authorize_url(client_id: Option<&str>, redirect_uri: Option<&str>) -> String {
    format!(
        "{}?clientId={}&redirectUri={}&state=0",
        AUTHORIZE_ENDPOINT,
        urlencoding::encode(client_id.unwrap_or("None")),
        urlencoding::encode(redirect_uri.unwrap_or("None")),
    )
}

/// Entry point of the interlock flow.
#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/",
    tag = INTERLOCK_TAG,
    operation_id = "Start Account Interlock",
    summary = "Redirect the browser to the provider authorization page",
    description = "Sends the browser to the Chzzk account-interlock page with the configured \
                   `clientId` and `redirectUri` and a fixed `state` of `0`. The provider asks \
                   the user for consent and then redirects back to the callback route.",
    responses(
        (status = 303, description = "Redirect to the provider authorization page"),
    )
)]
pub async fn authorize(Extension(resources): Extension<AppResources>) -> Redirect {
    let target = authorize_url(
        resources.config.client_id.as_deref(),
        resources.config.redirect_uri.as_deref(),
    );
    tracing::info!(url = %target, "Redirecting to provider authorization page");
    Redirect::to(&target)
}

/// Landing route for the provider redirect.
#[tracing::instrument(skip(state, params))]
#[utoipa::path(
    get,
    path = "/auth/callback",
    tag = INTERLOCK_TAG,
    operation_id = "Account Interlock Callback",
    summary = "Record the authorization code returned by the provider",
    params(CallbackParams),
    description = "Receives the provider redirect after the user granted (or was denied) access \
                   and persists the `code` and `state` parameters to `auth_data.json`, replacing \
                   any previous content. Missing parameters are recorded as `null`.",
    responses(
        (status = 200, description = "Authorization data persisted", body = str, content_type = "text/plain", example = "Authentication data saved."),
        (status = 500, description = "Authorization data could not be persisted"),
    )
)]
pub async fn callback(
    Query(params): Query<CallbackParams>,
    State(state): State<AppState>,
) -> Response {
    let result = AuthorizationResult {
        code: params.code,
        state: params.state,
    };

    match state.store.save(&result).await {
        Ok(()) => {
            tracing::info!(path = ?state.store.path(), "Authorization data saved");
            (StatusCode::OK, CALLBACK_SAVED_BODY).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to persist authorization data: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to save authentication data"})),
            )
                .into_response()
        }
    }
}
