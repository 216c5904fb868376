//! Session-scoped access view for UI layers.
//!
//! A snapshot of the caller's role set with the evaluator predicates exposed
//! as cheap synchronous methods, rebuilt whenever the known roles or
//! organization change (e.g. after an organization switch). This is a
//! rendering convenience, not a security boundary: every server route
//! enforces access independently.

use unionhub_core::OrganizationId;

use std::collections::BTreeSet;

use crate::{
    Permission, Role, evaluator,
    nav::{self, NavItem},
    registry,
};

#[derive(Debug, Clone)]
pub struct AccessView {
    organization_id: OrganizationId,
    roles: Vec<Role>,
    // Cached union; the registry is static so this only changes with `roles`.
    permissions: BTreeSet<Permission>,
}

impl AccessView {
    pub fn new(organization_id: OrganizationId, roles: Vec<Role>) -> Self {
        let permissions = registry::permissions_for_roles(&roles);
        Self {
            organization_id,
            roles,
            permissions,
        }
    }

    /// Replace the snapshot after the session's role or organization state
    /// changed. Synchronous re-derivation; any async session fetch happens
    /// upstream.
    pub fn refresh(&mut self, organization_id: OrganizationId, roles: Vec<Role>) {
        self.permissions = registry::permissions_for_roles(&roles);
        self.organization_id = organization_id;
        self.roles = roles;
    }

    pub fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Deduplicated permission set for the current roles.
    pub fn permissions(&self) -> &BTreeSet<Permission> {
        &self.permissions
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.permissions.contains(p))
    }

    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.permissions.contains(p))
    }

    pub fn can_access_route(&self, path: &str) -> bool {
        evaluator::can_access_route(&self.roles, path)
    }

    pub fn nav_items(&self, admin_mode: bool) -> Vec<&'static NavItem> {
        nav::accessible_nav_items(&self.roles, admin_mode)
    }

    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }

    pub fn is_union_rep_or_higher(&self) -> bool {
        self.roles
            .iter()
            .any(|r| evaluator::has_higher_or_equal_role(*r, Role::UnionRep))
    }

    pub fn is_cross_org_staff(&self) -> bool {
        self.roles.iter().any(Role::is_cross_org_staff)
    }
}
