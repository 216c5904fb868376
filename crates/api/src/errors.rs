//! Consistent JSON error responses.
//!
//! The denial bodies are deliberately terse: a machine-readable reason and
//! nothing about whether the resource exists. Full detail goes to the audit
//! log, not the caller.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use unionhub_auth::AuthzError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Map an authorization denial to its HTTP response.
///
/// 401 for missing/invalid sessions, 403 for a valid session lacking the
/// required role, permission, or organization match.
pub fn authz_error_response(err: &AuthzError) -> axum::response::Response {
    match err {
        AuthzError::Unauthenticated => {
            json_error(StatusCode::UNAUTHORIZED, "unauthorized", "authentication required")
        }
        _ => (
            StatusCode::FORBIDDEN,
            axum::Json(json!({
                "error": "forbidden",
                "reason": err.reason(),
            })),
        )
            .into_response(),
    }
}
