use axum::{
    Json,
    extract::{Extension, Query},
    response::IntoResponse,
};
use serde::Deserialize;

use unionhub_auth::{AuthorizationContext, accessible_nav_items};

#[derive(Debug, Deserialize)]
pub struct NavQuery {
    #[serde(default)]
    pub admin: bool,
}

/// GET /navigation — navigation entries the caller may see, in declaration
/// order. `?admin=true` returns the admin chrome (empty unless the caller
/// holds the admin role).
pub async fn navigation(
    Extension(ctx): Extension<AuthorizationContext>,
    Query(query): Query<NavQuery>,
) -> impl IntoResponse {
    let items = accessible_nav_items(&ctx.roles, query.admin);
    Json(serde_json::json!({ "items": items }))
}
