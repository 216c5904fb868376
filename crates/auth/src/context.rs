use unionhub_core::{OrganizationId, UserId};

use crate::{Role, claims::SessionClaims};

/// Per-request resolved identity: who is calling, from which organization,
/// with which roles.
///
/// Built by the HTTP middleware from validated session claims, handed to the
/// handler only after authorization succeeds, and discarded with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationContext {
    pub user_id: UserId,
    pub organization_id: OrganizationId,
    pub roles: Vec<Role>,
}

impl AuthorizationContext {
    pub fn new(user_id: UserId, organization_id: OrganizationId, roles: Vec<Role>) -> Self {
        Self {
            user_id,
            organization_id,
            roles,
        }
    }

    /// Build a context from session claims.
    ///
    /// Raw role tags come from the identity provider and are not fully typed;
    /// unrecognized tags are dropped (least privilege) and logged as an
    /// anomaly for operator follow-up.
    pub fn from_claims(claims: &SessionClaims) -> Self {
        let mut roles = Vec::with_capacity(claims.roles.len());
        for tag in &claims.roles {
            match Role::from_tag(tag) {
                Some(role) => roles.push(role),
                None => {
                    tracing::warn!(role_tag = %tag, user_id = %claims.sub, "dropping unrecognized role tag from session claims");
                }
            }
        }
        Self::new(claims.sub, claims.organization_id, roles)
    }

    pub fn is_cross_org_staff(&self) -> bool {
        self.roles.iter().any(Role::is_cross_org_staff)
    }
}
