//! Pure predicates over the registry.
//!
//! Everything here is a read-only set/ordinal query: no IO, no panics, no
//! hidden state. Repeated evaluation with unchanged inputs yields identical
//! results.

use crate::{Permission, Role, registry, routes};

/// Does a single role grant a permission?
pub fn role_has_permission(role: Role, permission: Permission) -> bool {
    registry::permissions_for_role(role).contains(&permission)
}

/// Does at least one of the roles grant the permission?
///
/// An empty role list grants nothing (vacuous false): no roles, no access.
pub fn any_role_has_permission(roles: &[Role], permission: Permission) -> bool {
    roles.iter().any(|r| role_has_permission(*r, permission))
}

/// Does the caller's combined role set grant the permission?
pub fn has_permission(roles: &[Role], permission: Permission) -> bool {
    any_role_has_permission(roles, permission)
}

/// ANY-of combinator. Empty permission list is false: requiring "any of
/// nothing" is unsatisfiable, which keeps misconfigured gates closed.
pub fn has_any_permission(roles: &[Role], permissions: &[Permission]) -> bool {
    permissions.iter().any(|p| has_permission(roles, *p))
}

/// ALL-of combinator. Empty permission list is vacuously true (the route map
/// uses an empty set to mean "any authenticated caller").
pub fn has_all_permissions(roles: &[Role], permissions: &[Permission]) -> bool {
    permissions.iter().all(|p| has_permission(roles, *p))
}

/// Can the caller access a route path?
///
/// Unmapped routes are denied: public routes must be listed explicitly in
/// the route map, so new endpoints never leak by omission.
pub fn can_access_route(roles: &[Role], path: &str) -> bool {
    match routes::route_requirements(path) {
        Some(required) => has_all_permissions(roles, required),
        None => false,
    }
}

/// Does `candidate` sit at or above `threshold` in the hierarchy?
/// Reflexive; level ties mean equal authority.
pub fn has_higher_or_equal_role(candidate: Role, threshold: Role) -> bool {
    candidate.level() >= threshold.level()
}

/// Tag-level variant of [`has_higher_or_equal_role`] for untyped inputs.
/// An unrecognized candidate ranks below every declared role.
pub fn tag_has_higher_or_equal_role(candidate: &str, threshold: Role) -> bool {
    registry::role_level(candidate) >= threshold.level()
}

/// Highest hierarchy level across a role set; 0 when the set is empty.
pub fn highest_role_level(roles: &[Role]) -> u8 {
    roles.iter().map(|r| r.level()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_manages_users_member_does_not() {
        assert!(role_has_permission(Role::Admin, Permission::ManageUsers));
        assert!(!role_has_permission(Role::Member, Permission::ManageUsers));
    }

    #[test]
    fn any_role_check_needs_one_grant() {
        let roles = [Role::Member, Role::StaffRep, Role::Admin];
        assert!(any_role_has_permission(&roles, Permission::ViewAllClaims));
        assert!(!any_role_has_permission(
            &[Role::Member, Role::StaffRep],
            Permission::DeleteMember
        ));
    }

    #[test]
    fn empty_role_list_grants_nothing() {
        for perm in Permission::ALL {
            assert!(!any_role_has_permission(&[], perm));
        }
    }

    #[test]
    fn vacuous_combinator_semantics() {
        let roles = [Role::Member];
        assert!(has_all_permissions(&roles, &[]));
        assert!(!has_any_permission(&roles, &[]));
        assert!(has_all_permissions(&[], &[]));
        assert!(!has_any_permission(&[], &[]));
    }

    #[test]
    fn any_and_all_agree_on_singletons() {
        let roles = [Role::StaffRep];
        for perm in Permission::ALL {
            assert_eq!(
                has_any_permission(&roles, &[perm]),
                has_all_permissions(&roles, &[perm])
            );
        }
    }

    #[test]
    fn route_access_follows_the_map() {
        assert!(can_access_route(&[Role::Member], "/dashboard/claims"));
        assert!(!can_access_route(&[Role::Member], "/dashboard/members"));
        assert!(can_access_route(&[Role::UnionRep], "/dashboard/members"));
        // Admin area needs both the panel and the area permission.
        assert!(can_access_route(&[Role::Admin], "/admin/settings"));
        assert!(!can_access_route(&[Role::UnionRep], "/admin/settings"));
    }

    #[test]
    fn unmapped_routes_fail_closed_even_for_admin() {
        assert!(!can_access_route(&[Role::Admin], "/internal/debug"));
        assert!(!can_access_route(&[], "/internal/debug"));
        // Unregistered areas under an open parent are still unmapped.
        assert!(!can_access_route(&[Role::Admin], "/dashboard/payroll"));
    }

    #[test]
    fn hierarchy_is_reflexive_and_ordered() {
        for role in Role::ALL {
            assert!(has_higher_or_equal_role(role, role));
        }
        for pair in Role::ALL.windows(2) {
            assert!(has_higher_or_equal_role(pair[1], pair[0]));
            assert!(!has_higher_or_equal_role(pair[0], pair[1]));
        }
    }

    #[test]
    fn unknown_tag_loses_every_threshold_comparison() {
        for role in Role::ALL {
            assert!(!tag_has_higher_or_equal_role("invalid_role", role));
        }
        assert!(tag_has_higher_or_equal_role("union_rep", Role::StaffRep));
    }

    #[test]
    fn highest_level_of_empty_set_is_zero() {
        assert_eq!(highest_role_level(&[]), 0);
        assert_eq!(highest_role_level(&[Role::Member, Role::Admin]), Role::Admin.level());
    }
}
