//! Request authorization middleware.
//!
//! Layer order on a protected router is authentication first
//! (`auth_middleware`), then any role/permission gates. A gate that runs
//! without an `AuthorizationContext` extension treats the request as
//! unauthenticated and logs the wiring anomaly — fail closed, never open.
//! Handlers behind the gates are guaranteed not to have executed any byte
//! before the decision resolved.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use unionhub_auth::{
    AuthorizationContext, AuthzError, Permission, RoleGate, SessionResolver, authorize,
};
use unionhub_core::OrganizationId;
use unionhub_observability::{AuthEvent, AuthEventKind, Severity, log_auth_event};

use crate::errors;

#[derive(Clone)]
pub struct AuthState {
    pub resolver: Arc<dyn SessionResolver>,
}

/// Permission requirement carried by a gate layer.
#[derive(Debug, Clone)]
pub enum PermissionGate {
    Single(Permission),
    Any(Vec<Permission>),
    All(Vec<Permission>),
}

impl PermissionGate {
    fn evaluate(&self, ctx: &AuthorizationContext) -> Result<(), AuthzError> {
        match self {
            PermissionGate::Single(p) => authorize::authorize_permission(ctx, *p),
            PermissionGate::Any(ps) => authorize::authorize_any_permission(ctx, ps),
            PermissionGate::All(ps) => authorize::authorize_all_permissions(ctx, ps),
        }
    }
}

/// Parse an `Authorization: Bearer <token>` header.
///
/// Absent or malformed headers yield `None`; callers treat that identically
/// to "no credential supplied".
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let token = header.to_str().ok()?.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Require-auth middleware: resolves the session and builds the per-request
/// `AuthorizationContext`. No valid session → 401 before the handler runs.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let endpoint = req.uri().path().to_string();
    let method = req.method().to_string();

    let Some(token) = extract_bearer_token(req.headers()) else {
        audit(&endpoint, &method, AuthEventKind::AccessDenied, Severity::Info, json!({
            "reason": "missing_credential",
        }));
        return errors::authz_error_response(&AuthzError::Unauthenticated);
    };

    let Some(claims) = state.resolver.resolve(token) else {
        audit(&endpoint, &method, AuthEventKind::InvalidToken, Severity::Warning, json!({
            "reason": "token_rejected",
        }));
        return errors::authz_error_response(&AuthzError::Unauthenticated);
    };

    let ctx = AuthorizationContext::from_claims(&claims);
    if ctx.roles.len() < claims.roles.len() {
        audit(&endpoint, &method, AuthEventKind::UnknownRole, Severity::Warning, json!({
            "user_id": claims.sub.to_string(),
            "raw_roles": claims.roles,
        }));
    }

    req.extensions_mut().insert(ctx);
    next.run(req).await
}

/// Role gate middleware; pair with `axum::middleware::from_fn_with_state`.
pub async fn role_middleware(
    State(gate): State<RoleGate>,
    req: Request<Body>,
    next: Next,
) -> Response {
    gate_request(req, next, |ctx| authorize::authorize_role(ctx, &gate)).await
}

/// Permission gate middleware (single/ANY/ALL).
pub async fn permission_middleware(
    State(gate): State<PermissionGate>,
    req: Request<Body>,
    next: Next,
) -> Response {
    gate_request(req, next, |ctx| gate.evaluate(ctx)).await
}

/// Organization-scope guard for handlers whose target organization comes from
/// the request path. Cross-organization staff bypass the match; everyone else
/// is confined to their own organization.
pub fn require_organization_access(
    ctx: &AuthorizationContext,
    target: OrganizationId,
    endpoint: &str,
    method: &str,
) -> Result<(), Response> {
    match authorize::authorize_organization(ctx, target) {
        Ok(()) => {
            audit(endpoint, method, AuthEventKind::AccessGranted, Severity::Info, json!({
                "user_id": ctx.user_id.to_string(),
                "target_organization": target.to_string(),
            }));
            Ok(())
        }
        Err(err) => {
            audit(endpoint, method, AuthEventKind::AccessDenied, Severity::Warning, json!({
                "user_id": ctx.user_id.to_string(),
                "target_organization": target.to_string(),
                "reason": err.reason(),
            }));
            Err(errors::authz_error_response(&err))
        }
    }
}

async fn gate_request<F>(req: Request<Body>, next: Next, check: F) -> Response
where
    F: FnOnce(&AuthorizationContext) -> Result<(), AuthzError>,
{
    let endpoint = req.uri().path().to_string();
    let method = req.method().to_string();

    let Some(ctx) = req.extensions().get::<AuthorizationContext>() else {
        // Gate mounted without the auth layer: misconfiguration, deny.
        audit(&endpoint, &method, AuthEventKind::AccessDenied, Severity::Critical, json!({
            "reason": "missing_authorization_context",
        }));
        return errors::authz_error_response(&AuthzError::Unauthenticated);
    };

    match check(ctx) {
        Ok(()) => {
            audit(&endpoint, &method, AuthEventKind::AccessGranted, Severity::Info, json!({
                "user_id": ctx.user_id.to_string(),
            }));
            next.run(req).await
        }
        Err(err) => {
            audit(&endpoint, &method, AuthEventKind::AccessDenied, Severity::Warning, json!({
                "user_id": ctx.user_id.to_string(),
                "reason": err.reason(),
            }));
            errors::authz_error_response(&err)
        }
    }
}

fn audit(endpoint: &str, method: &str, kind: AuthEventKind, severity: Severity, details: serde_json::Value) {
    log_auth_event(&AuthEvent {
        endpoint: endpoint.to_string(),
        method: method.to_string(),
        kind,
        severity,
        details,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn bearer_token_is_extracted() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let headers = headers_with("Bearer   token  ");
        assert_eq!(extract_bearer_token(&headers), Some("token"));
    }

    #[test]
    fn missing_header_is_none() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn malformed_headers_are_none() {
        for value in ["Basic dXNlcjpwYXNz", "Bearer", "Bearer   ", "bearer token", "token"] {
            let headers = headers_with(value);
            assert_eq!(extract_bearer_token(&headers), None, "value: {value:?}");
        }
    }
}
