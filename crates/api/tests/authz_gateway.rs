use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::StatusCode;
use unionhub_auth::{Hs256SessionResolver, SessionClaims};
use unionhub_core::{OrganizationId, UserId};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(jwt_secret: &str) -> Self {
        // Build the same router as prod, but bind to an ephemeral port.
        let resolver = Arc::new(Hs256SessionResolver::new(jwt_secret.as_bytes()));
        let app = unionhub_api::app::build_app(resolver);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn mint_jwt(jwt_secret: &str, organization_id: OrganizationId, roles: Vec<&str>) -> String {
    let now = Utc::now();
    let claims = SessionClaims {
        sub: UserId::new(),
        organization_id,
        roles: roles.into_iter().map(str::to_string).collect(),
        issued_at: now,
        expires_at: now + ChronoDuration::minutes(10),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("failed to encode jwt")
}

#[tokio::test]
async fn health_is_public_protected_routes_are_not() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", srv.base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(format!("{}/whoami", srv.base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn whoami_reflects_session_context() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let org = OrganizationId::new();
    let token = mint_jwt(jwt_secret, org, vec!["member", "staff_rep"]);

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["organization_id"].as_str().unwrap(), org.to_string());
    let roles = body["roles"].as_array().unwrap();
    assert!(roles.iter().any(|r| r == "member"));
    assert!(roles.iter().any(|r| r == "staff_rep"));
}

#[tokio::test]
async fn malformed_credentials_are_unauthorized() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();

    // Wrong scheme.
    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .header("authorization", "Basic dXNlcjpwYXNz")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Bearer with garbage token.
    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Token signed with another secret.
    let forged = mint_jwt("other-secret", OrganizationId::new(), vec!["admin"]);
    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth(forged)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn role_listing_requires_manage_roles() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let org = OrganizationId::new();
    let client = reqwest::Client::new();

    let member_token = mint_jwt(jwt_secret, org, vec!["member"]);
    let res = client
        .get(format!("{}/rbac/roles", srv.base_url))
        .bearer_auth(member_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "forbidden");
    assert_eq!(body["reason"], "missing_permission");

    let admin_token = mint_jwt(jwt_secret, org, vec!["admin"]);
    let res = client
        .get(format!("{}/rbac/roles", srv.base_url))
        .bearer_auth(admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let roles = body["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 7);
    let union_rep = roles.iter().find(|r| r["tag"] == "union_rep").unwrap();
    assert_eq!(union_rep["level"], 40);
    assert!(
        union_rep["permissions"]
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p == "approve_claim")
    );
}

#[tokio::test]
async fn unknown_role_lookup_is_not_found() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, OrganizationId::new(), vec!["admin"]);

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/rbac/roles/superuser", srv.base_url))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_role_tags_degrade_to_least_privilege() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, OrganizationId::new(), vec!["superuser", "root"]);

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    // Session is valid; the unrecognized roles just grant nothing.
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["roles"].as_array().unwrap().is_empty());

    let res = client
        .get(format!("{}/rbac/roles", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn navigation_is_filtered_by_role() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let org = OrganizationId::new();
    let client = reqwest::Client::new();

    let member_token = mint_jwt(jwt_secret, org, vec!["member"]);
    let res = client
        .get(format!("{}/navigation", srv.base_url))
        .bearer_auth(&member_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let paths: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["path"].as_str().unwrap())
        .collect();
    assert!(paths.contains(&"/dashboard/claims"));
    assert!(!paths.contains(&"/dashboard/members"));

    // Admin chrome is empty for non-admins, full for admins.
    let res = client
        .get(format!("{}/navigation?admin=true", srv.base_url))
        .bearer_auth(&member_token)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["items"].as_array().unwrap().is_empty());

    let admin_token = mint_jwt(jwt_secret, org, vec!["admin"]);
    let res = client
        .get(format!("{}/navigation?admin=true", srv.base_url))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn self_check_reports_verdicts() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, OrganizationId::new(), vec!["member"]);
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/rbac/check?permission=view_own_claims&route=/dashboard/members",
            srv.base_url
        ))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["permission"]["granted"], true);
    assert_eq!(body["route"]["accessible"], false);

    // Unknown permission tags are unsatisfiable, not an error.
    let res = client
        .get(format!("{}/rbac/check?permission=launch_rockets", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["permission"]["granted"], false);
}

#[tokio::test]
async fn organization_isolation_boundary() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let home_org = OrganizationId::new();
    let other_org = OrganizationId::new();
    let client = reqwest::Client::new();

    // A member of org A must never read org B's data.
    let member_token = mint_jwt(jwt_secret, home_org, vec!["member"]);
    let res = client
        .get(format!("{}/organizations/{}/summary", srv.base_url, other_org))
        .bearer_auth(&member_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["reason"], "organization_mismatch");

    // Their own organization is fine.
    let res = client
        .get(format!("{}/organizations/{}/summary", srv.base_url, home_org))
        .bearer_auth(&member_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Cross-organization staff bypass the match.
    let admin_token = mint_jwt(jwt_secret, home_org, vec!["admin"]);
    let res = client
        .get(format!("{}/organizations/{}/summary", srv.base_url, other_org))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["cross_org_access"], true);
}

#[tokio::test]
async fn invalid_organization_id_is_bad_request() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, OrganizationId::new(), vec!["member"]);

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/organizations/not-a-uuid/summary", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
