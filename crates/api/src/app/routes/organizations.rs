//! Organization-scoped endpoints.
//!
//! The canonical consumer of the organization-match guard: the target
//! organization comes from the path, and only members of that organization
//! (or cross-organization staff) get through.

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use unionhub_auth::AuthorizationContext;
use unionhub_core::OrganizationId;

use crate::errors;
use crate::middleware;

/// GET /organizations/:org_id/summary
pub async fn summary(
    Extension(ctx): Extension<AuthorizationContext>,
    Path(org_id): Path<String>,
) -> axum::response::Response {
    let Ok(target) = org_id.parse::<OrganizationId>() else {
        return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid organization id");
    };

    if let Err(denied) = middleware::require_organization_access(
        &ctx,
        target,
        "/organizations/:org_id/summary",
        "GET",
    ) {
        return denied;
    }

    Json(json!({
        "organization_id": target.to_string(),
        "requested_by": ctx.user_id.to_string(),
        "roles": ctx.roles.iter().map(|r| r.tag()).collect::<Vec<_>>(),
        "cross_org_access": ctx.organization_id != target,
    }))
    .into_response()
}
