//! Authorization audit log.
//!
//! A side channel, not part of the decision path: emitting an event can never
//! change or block an allow/deny outcome. Events land on the `audit` tracing
//! target with structured fields so collectors can route them separately from
//! application logs.

use serde::Serialize;
use serde_json::Value;

/// What happened at the authorization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventKind {
    AccessGranted,
    AccessDenied,
    InvalidToken,
    UnknownRole,
}

impl AuthEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthEventKind::AccessGranted => "access_granted",
            AuthEventKind::AccessDenied => "access_denied",
            AuthEventKind::InvalidToken => "invalid_token",
            AuthEventKind::UnknownRole => "unknown_role",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// One authorization decision or anomaly, with operator-grade detail.
///
/// The HTTP response a caller sees stays non-leaking; this event carries the
/// full picture for the audit trail.
#[derive(Debug, Clone, Serialize)]
pub struct AuthEvent {
    pub endpoint: String,
    pub method: String,
    pub kind: AuthEventKind,
    pub severity: Severity,
    pub details: Value,
}

/// Emit an audit event. Fire-and-forget: failures in the logging pipeline
/// must not surface to the authorization decision.
pub fn log_auth_event(event: &AuthEvent) {
    let details = event.details.to_string();
    match event.severity {
        Severity::Info => tracing::info!(
            target: "audit",
            endpoint = %event.endpoint,
            method = %event.method,
            kind = event.kind.as_str(),
            details = %details,
            "auth event"
        ),
        Severity::Warning => tracing::warn!(
            target: "audit",
            endpoint = %event.endpoint,
            method = %event.method,
            kind = event.kind.as_str(),
            details = %details,
            "auth event"
        ),
        Severity::Critical => tracing::error!(
            target: "audit",
            endpoint = %event.endpoint,
            method = %event.method,
            kind = event.kind.as_str(),
            details = %details,
            "auth event"
        ),
    }
}
