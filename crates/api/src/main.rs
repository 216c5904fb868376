use std::sync::Arc;

use unionhub_auth::Hs256SessionResolver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    unionhub_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });

    let resolver = Arc::new(Hs256SessionResolver::new(jwt_secret.as_bytes()));
    let app = unionhub_api::app::build_app(resolver);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
