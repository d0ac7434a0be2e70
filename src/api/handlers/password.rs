//! Password update endpoint.
//!
//! Flow Overview:
//! 1) Authenticate via the proxy headers, then apply the optional scope gate.
//! 2) Validate the typed payload: both fields present and non-empty.
//! 3) Ask the authority to replace the stored password, single attempt.
//!
//! The update mutates authority state; a transient failure may have partially
//! applied, so nothing here retries.

use axum::{extract::Extension, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};
use utoipa::ToSchema;

use super::auth::{authorize, require_auth, AuthConfig};
use crate::{api::error::ApiError, authority::DynAuthority};

const REQUIRED_FIELDS: &str = "The operation requires 'userId' and 'newSecret'.";

#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdatePasswordRequest {
    pub user_id: String,
    pub new_secret: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UpdatePasswordResponse {
    pub success: bool,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/v1/credentials/password",
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Password updated at the identity authority.", body = UpdatePasswordResponse),
        (status = 400, description = "Missing or empty 'userId' or 'newSecret'.", body = ApiError),
        (status = 401, description = "No verified caller identity.", body = ApiError),
        (status = 403, description = "Caller lacks the configured admin scope.", body = ApiError),
        (status = 500, description = "The identity authority rejected or failed the update.", body = ApiError),
    ),
    tag = "credentials"
)]
#[instrument(skip_all)]
pub async fn update_password(
    headers: HeaderMap,
    Extension(config): Extension<AuthConfig>,
    Extension(authority): Extension<DynAuthority>,
    payload: Option<Json<UpdatePasswordRequest>>,
) -> Result<Json<UpdatePasswordResponse>, ApiError> {
    let principal = require_auth(&headers)?;
    authorize(&principal, &config)?;

    let Some(Json(request)) = payload else {
        return Err(ApiError::invalid_argument(REQUIRED_FIELDS));
    };

    let user_id = request.user_id.trim();
    let new_secret = request.new_secret.trim();

    if user_id.is_empty() || new_secret.is_empty() {
        return Err(ApiError::invalid_argument(REQUIRED_FIELDS));
    }

    match authority.update_password(user_id, new_secret).await {
        Ok(()) => Ok(Json(UpdatePasswordResponse {
            success: true,
            message: "Password updated successfully.".to_string(),
        })),
        Err(err) => {
            error!("Error updating user password: {err}");

            Err(ApiError::internal(err.to_string()))
        }
    }
}
