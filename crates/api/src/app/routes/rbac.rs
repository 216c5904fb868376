//! RBAC introspection endpoints.
//!
//! Visibility into the static matrix and the caller's own standing, for
//! debugging "why was this denied?" questions. Listing the matrix requires
//! `manage_roles`; the self-check endpoint only requires authentication.

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::json;

use unionhub_auth::{AuthorizationContext, Permission, Role, evaluator, registry};

use crate::errors;
use crate::middleware::{self, PermissionGate};

pub fn router() -> Router {
    let introspection = Router::new()
        .route("/roles", get(list_roles))
        .route("/roles/:tag", get(get_role))
        .route("/permissions", get(list_permissions))
        .layer(axum::middleware::from_fn_with_state(
            PermissionGate::Single(Permission::ManageRoles),
            middleware::permission_middleware,
        ));

    Router::new().route("/check", get(check)).merge(introspection)
}

fn role_json(role: Role) -> serde_json::Value {
    json!({
        "tag": role.tag(),
        "level": role.level(),
        "display_name": role.display_name(),
        "cross_org_staff": role.is_cross_org_staff(),
        "permissions": registry::permissions_for_role(role)
            .iter()
            .map(|p| p.tag())
            .collect::<Vec<_>>(),
    })
}

/// GET /rbac/roles — all roles with their levels and permission sets.
pub async fn list_roles() -> impl IntoResponse {
    let roles: Vec<_> = Role::ALL.into_iter().map(role_json).collect();
    Json(json!({ "roles": roles }))
}

/// GET /rbac/roles/:tag — one role, 404 for an unknown tag.
pub async fn get_role(Path(tag): Path<String>) -> axum::response::Response {
    match Role::from_tag(&tag) {
        Some(role) => Json(json!({ "role": role_json(role) })).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "role not found"),
    }
}

/// GET /rbac/permissions — the global permission set.
pub async fn list_permissions() -> impl IntoResponse {
    let permissions: Vec<_> = Permission::ALL.iter().map(|p| p.tag()).collect();
    Json(json!({ "permissions": permissions }))
}

#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    pub permission: Option<String>,
    pub route: Option<String>,
}

/// GET /rbac/check?permission=x&route=y — the caller's own verdicts.
///
/// Unknown permission tags report `granted: false` rather than an error;
/// they cannot be satisfied by any role.
pub async fn check(
    Extension(ctx): Extension<AuthorizationContext>,
    Query(query): Query<CheckQuery>,
) -> impl IntoResponse {
    let permission = query.permission.map(|tag| {
        let granted = Permission::from_tag(&tag)
            .map(|p| evaluator::has_permission(&ctx.roles, p))
            .unwrap_or(false);
        json!({ "tag": tag, "granted": granted })
    });

    let route = query.route.map(|path| {
        let accessible = evaluator::can_access_route(&ctx.roles, &path);
        json!({ "path": path, "accessible": accessible })
    });

    Json(json!({
        "roles": ctx.roles.iter().map(|r| r.tag()).collect::<Vec<_>>(),
        "permission": permission,
        "route": route,
    }))
}
