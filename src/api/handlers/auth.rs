//! Authenticated principal extraction and the optional scope gate.
//!
//! Flow Overview: the front proxy verifies the caller before this service
//! runs and forwards the verified identity as request headers. `require_auth`
//! only checks that a verified subject is present; it does not inspect roles.
//! When an admin scope is configured, `authorize` additionally requires that
//! scope in the forwarded groups.

use crate::api::error::ApiError;
use axum::http::HeaderMap;

/// Verified subject set by the front proxy.
pub const AUTH_USER_HEADER: &str = "x-auth-request-user";
/// Caller email, when the proxy forwards one.
pub const AUTH_EMAIL_HEADER: &str = "x-auth-request-email";
/// Comma-separated caller scopes, when the proxy forwards them.
pub const AUTH_GROUPS_HEADER: &str = "x-auth-request-groups";

/// Authenticated caller context derived from the proxy headers.
#[derive(Clone, Debug)]
pub struct Principal {
    pub subject: String,
    pub email: Option<String>,
    pub scopes: Vec<String>,
}

impl Principal {
    #[must_use]
    pub fn allows(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }
}

/// Scope requirement for the credential endpoints.
///
/// `None` (the default) admits any authenticated caller. No broader role
/// model is assumed; this is the single pluggable authorization point.
#[derive(Clone, Debug, Default)]
pub struct AuthConfig {
    admin_scope: Option<String>,
}

impl AuthConfig {
    #[must_use]
    pub fn new(admin_scope: Option<String>) -> Self {
        Self { admin_scope }
    }

    #[must_use]
    pub fn admin_scope(&self) -> Option<&str> {
        self.admin_scope.as_deref()
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Resolve the proxy headers into a principal, or fail with `Unauthenticated`.
pub fn require_auth(headers: &HeaderMap) -> Result<Principal, ApiError> {
    let Some(subject) = header_value(headers, AUTH_USER_HEADER) else {
        return Err(ApiError::unauthenticated());
    };

    let scopes = header_value(headers, AUTH_GROUPS_HEADER)
        .map(|groups| {
            groups
                .split(',')
                .map(str::trim)
                .filter(|scope| !scope.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Principal {
        subject: subject.to_string(),
        email: header_value(headers, AUTH_EMAIL_HEADER).map(str::to_string),
        scopes,
    })
}

/// Enforce the configured admin scope, if any.
pub fn authorize(principal: &Principal, config: &AuthConfig) -> Result<(), ApiError> {
    match config.admin_scope() {
        Some(scope) if !principal.allows(scope) => Err(ApiError::permission_denied(scope)),
        _ => Ok(()),
    }
}
