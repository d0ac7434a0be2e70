//! Password-reset link endpoint.
//!
//! Flow Overview:
//! 1) Authenticate via the proxy headers, then apply the optional scope gate.
//! 2) Validate the typed payload: email present, non-empty, plausible.
//! 3) Ask the authority for a reset link to share manually (SMS/WhatsApp).
//!
//! The authority decides link lifetime and uniqueness; two calls for the same
//! email may return different links.

use axum::{extract::Extension, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};
use utoipa::ToSchema;

use super::{
    auth::{authorize, require_auth, AuthConfig},
    valid_email,
};
use crate::{api::error::ApiError, authority::DynAuthority};

const REQUIRED_FIELDS: &str = "The operation requires 'email'.";

#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ResetLinkRequest {
    pub email: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ResetLinkResponse {
    pub link: String,
}

#[utoipa::path(
    post,
    path = "/v1/credentials/reset-link",
    request_body = ResetLinkRequest,
    responses(
        (status = 200, description = "Reset link generated by the identity authority.", body = ResetLinkResponse),
        (status = 400, description = "Missing, empty, or malformed 'email'.", body = ApiError),
        (status = 401, description = "No verified caller identity.", body = ApiError),
        (status = 403, description = "Caller lacks the configured admin scope.", body = ApiError),
        (status = 500, description = "The identity authority rejected or failed the request.", body = ApiError),
    ),
    tag = "credentials"
)]
#[instrument(skip_all)]
pub async fn reset_link(
    headers: HeaderMap,
    Extension(config): Extension<AuthConfig>,
    Extension(authority): Extension<DynAuthority>,
    payload: Option<Json<ResetLinkRequest>>,
) -> Result<Json<ResetLinkResponse>, ApiError> {
    let principal = require_auth(&headers)?;
    authorize(&principal, &config)?;

    let Some(Json(request)) = payload else {
        return Err(ApiError::invalid_argument(REQUIRED_FIELDS));
    };

    let email = request.email.trim();

    if email.is_empty() {
        return Err(ApiError::invalid_argument(REQUIRED_FIELDS));
    }

    if !valid_email(email) {
        return Err(ApiError::invalid_argument("Invalid email address."));
    }

    match authority.generate_reset_link(email).await {
        Ok(link) => Ok(Json(ResetLinkResponse { link })),
        Err(err) => {
            error!("Error generating reset link: {err}");

            Err(ApiError::internal(err.to_string()))
        }
    }
}
