//! Tracing, logging, and the authorization audit channel (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Authorization audit events.
pub mod audit;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use audit::{AuthEvent, AuthEventKind, Severity, log_auth_event};
