//! OpenAPI/Utoipa configuration.

use crate::api::{health::MISC_TAG, interlock::INTERLOCK_TAG};
use utoipa::OpenApi;

/// OpenAPI documentation configuration.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chzzk Interlock API",
        version = "1.0.0",
        description = "Local endpoint for walking a browser through the Chzzk account-interlock \
                       authorization flow and recording the resulting authorization code."
    ),
    tags(
        (name = MISC_TAG, description = "Miscellaneous endpoints"),
        (name = INTERLOCK_TAG, description = "Account interlock endpoints")
    )
)]
pub struct ApiDoc;
