use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use unionhub_auth::AuthorizationContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(Extension(ctx): Extension<AuthorizationContext>) -> impl IntoResponse {
    Json(serde_json::json!({
        "user_id": ctx.user_id.to_string(),
        "organization_id": ctx.organization_id.to_string(),
        "roles": ctx.roles.iter().map(|r| r.tag()).collect::<Vec<_>>(),
    }))
}
