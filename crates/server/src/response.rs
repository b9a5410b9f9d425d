use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;

/// Authorization data the provider delivers to the callback route.
///
/// Both values are opaque to this service and recorded verbatim. A parameter
/// absent from the callback query string is persisted as JSON `null`; the
/// serialized object always carries both keys.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthorizationResult {
    pub code: Option<String>,
    pub state: Option<String>,
}
