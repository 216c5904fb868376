//! Authorization decisions over a request context.
//!
//! Denial is a value, not an exception: every function returns
//! `Result<(), AuthzError>` where `Err` carries the HTTP status and a stable
//! reason code. Only the HTTP layer converts a denial into a response, so
//! there is a single auditable choke point.

use unionhub_core::OrganizationId;

use serde::Serialize;
use thiserror::Error;

use crate::{AuthorizationContext, Permission, Role, evaluator};

/// Why a request was denied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    /// No valid session. Never reveals whether the resource exists.
    #[error("authentication required")]
    Unauthenticated,

    /// Valid session, role below the gate.
    #[error("insufficient role")]
    InsufficientRole,

    /// Valid session, missing a required permission.
    #[error("missing permission '{0}'")]
    MissingPermission(Permission),

    /// Valid session, caller's organization does not match the target.
    #[error("organization mismatch")]
    OrganizationMismatch,
}

impl AuthzError {
    /// 401 for "you are no one", 403 for "you are someone, but not allowed".
    pub fn http_status(&self) -> u16 {
        match self {
            AuthzError::Unauthenticated => 401,
            _ => 403,
        }
    }

    /// Stable machine-readable reason code for response bodies and audit logs.
    pub fn reason(&self) -> &'static str {
        match self {
            AuthzError::Unauthenticated => "unauthenticated",
            AuthzError::InsufficientRole => "insufficient_role",
            AuthzError::MissingPermission(_) => "missing_permission",
            AuthzError::OrganizationMismatch => "organization_mismatch",
        }
    }
}

/// Role requirement for a gate.
///
/// `AtLeast` is the canonical convention (named role with an explicit level);
/// `OneOf` is the exact-allowlist convention kept as a compatibility shim for
/// call sites that predate the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RoleGate {
    AtLeast(Role),
    OneOf(Vec<Role>),
}

impl RoleGate {
    pub fn allows(&self, roles: &[Role]) -> bool {
        match self {
            RoleGate::AtLeast(threshold) => roles
                .iter()
                .any(|r| evaluator::has_higher_or_equal_role(*r, *threshold)),
            RoleGate::OneOf(allowed) => roles.iter().any(|r| allowed.contains(r)),
        }
    }
}

/// Require the caller to satisfy a role gate.
pub fn authorize_role(ctx: &AuthorizationContext, gate: &RoleGate) -> Result<(), AuthzError> {
    if gate.allows(&ctx.roles) {
        Ok(())
    } else {
        Err(AuthzError::InsufficientRole)
    }
}

/// Require a single permission across the caller's role set.
pub fn authorize_permission(
    ctx: &AuthorizationContext,
    permission: Permission,
) -> Result<(), AuthzError> {
    if evaluator::has_permission(&ctx.roles, permission) {
        Ok(())
    } else {
        Err(AuthzError::MissingPermission(permission))
    }
}

/// Require at least one of the listed permissions. An empty list denies.
pub fn authorize_any_permission(
    ctx: &AuthorizationContext,
    permissions: &[Permission],
) -> Result<(), AuthzError> {
    if evaluator::has_any_permission(&ctx.roles, permissions) {
        Ok(())
    } else {
        Err(match permissions.first() {
            Some(p) => AuthzError::MissingPermission(*p),
            None => AuthzError::InsufficientRole,
        })
    }
}

/// Require every listed permission. An empty list is vacuously satisfied.
pub fn authorize_all_permissions(
    ctx: &AuthorizationContext,
    permissions: &[Permission],
) -> Result<(), AuthzError> {
    match permissions
        .iter()
        .find(|p| !evaluator::has_permission(&ctx.roles, **p))
    {
        None => Ok(()),
        Some(missing) => Err(AuthzError::MissingPermission(*missing)),
    }
}

/// Multi-tenant isolation boundary: the caller's organization must match the
/// target unless the caller holds a cross-organization role.
pub fn authorize_organization(
    ctx: &AuthorizationContext,
    target: OrganizationId,
) -> Result<(), AuthzError> {
    if ctx.organization_id == target || ctx.is_cross_org_staff() {
        Ok(())
    } else {
        Err(AuthzError::OrganizationMismatch)
    }
}
