use axum::{Router, routing::get};

pub mod navigation;
pub mod organizations;
pub mod rbac;
pub mod system;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/navigation", get(navigation::navigation))
        .route("/organizations/:org_id/summary", get(organizations::summary))
        .nest("/rbac", rbac::router())
}
