//! HTTP application wiring (axum router + middleware composition).

use std::sync::Arc;

use axum::{Router, routing::get};

use unionhub_auth::SessionResolver;

use crate::middleware;

pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(resolver: Arc<dyn SessionResolver>) -> Router {
    let auth_state = middleware::AuthState { resolver };

    // Protected routes: session resolution + context construction happen
    // before any handler or gate runs.
    let protected = routes::router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
}
