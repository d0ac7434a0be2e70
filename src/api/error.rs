//! API error encoding.
//!
//! Every failure a handler can produce is one of four kinds, serialized as
//! `{"kind": "...", "message": "..."}`. Internal errors echo the identity
//! authority's message verbatim; callers needing finer-grained handling must
//! parse the text, which is a documented fragility kept for debuggability.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// No verified caller identity on the invocation.
    Unauthenticated,
    /// Caller is authenticated but lacks the configured admin scope.
    PermissionDenied,
    /// A required field is missing, empty, or malformed.
    InvalidArgument,
    /// The identity authority rejected or failed the operation.
    Internal,
}

impl ErrorKind {
    const fn status(self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::InvalidArgument => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unauthenticated() -> Self {
        Self::new(
            ErrorKind::Unauthenticated,
            "The operation must be called while authenticated.",
        )
    }

    #[must_use]
    pub fn permission_denied(scope: &str) -> Self {
        Self::new(
            ErrorKind::PermissionDenied,
            format!("The operation requires the '{scope}' scope."),
        )
    }

    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.kind.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_kind_status_mapping() {
        assert_eq!(ErrorKind::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorKind::PermissionDenied.status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorKind::InvalidArgument.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorKind::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_kind_serializes_kebab_case() -> Result<()> {
        assert_eq!(
            serde_json::to_value(ErrorKind::InvalidArgument)?,
            serde_json::json!("invalid-argument")
        );
        assert_eq!(
            serde_json::to_value(ErrorKind::PermissionDenied)?,
            serde_json::json!("permission-denied")
        );
        Ok(())
    }

    #[test]
    fn test_internal_keeps_message_verbatim() -> Result<()> {
        let error = ApiError::internal("user-not-found");
        let value = serde_json::to_value(&error)?;
        assert_eq!(value["kind"], "internal");
        assert_eq!(value["message"], "user-not-found");
        Ok(())
    }

    #[test]
    fn test_unauthenticated_message() {
        let error = ApiError::unauthenticated();
        assert_eq!(error.kind(), ErrorKind::Unauthenticated);
        assert_eq!(
            error.message(),
            "The operation must be called while authenticated."
        );
    }
}
