//! Route → required-permission map.
//!
//! The default policy is deny-unless-explicitly-listed: a route absent from
//! this table is not accessible through `can_access_route`, so newly added
//! routes are never silently exposed. An entry with an empty permission set
//! is open to any authenticated caller.

use crate::Permission;

/// Access requirements for one route subtree.
#[derive(Debug, Clone, Copy)]
pub struct RouteAccess {
    pub path: &'static str,
    /// ALL of these are required; empty means any authenticated caller.
    pub required: &'static [Permission],
}

pub const ROUTE_ACCESS: &[RouteAccess] = &[
    RouteAccess { path: "/dashboard", required: &[] },
    RouteAccess { path: "/dashboard/claims", required: &[Permission::ViewOwnClaims] },
    RouteAccess { path: "/dashboard/members", required: &[Permission::ViewAllMembers] },
    RouteAccess { path: "/dashboard/voting", required: &[Permission::ViewVoting] },
    RouteAccess { path: "/dashboard/collective-agreements", required: &[Permission::ViewCba] },
    RouteAccess { path: "/dashboard/analytics", required: &[Permission::ViewAnalytics] },
    RouteAccess { path: "/dashboard/settings", required: &[] },
    // Cross-organizational routes (congress/federation)
    RouteAccess {
        path: "/dashboard/cross-union-analytics",
        required: &[Permission::ViewCrossUnionAnalytics],
    },
    RouteAccess { path: "/dashboard/precedents", required: &[Permission::ViewPrecedentDatabase] },
    RouteAccess { path: "/dashboard/clause-library", required: &[Permission::ViewClauseLibrary] },
    RouteAccess { path: "/dashboard/organizations", required: &[Permission::ViewAllOrganizations] },
    RouteAccess { path: "/dashboard/compliance", required: &[Permission::ViewComplianceReports] },
    RouteAccess { path: "/dashboard/federation", required: &[Permission::ViewFederationAnalytics] },
    RouteAccess { path: "/dashboard/congress", required: &[Permission::ViewCongressAnalytics] },
    // Admin routes always require the admin panel on top of the area permission.
    RouteAccess { path: "/admin", required: &[Permission::ViewAdminPanel] },
    RouteAccess {
        path: "/admin/claims",
        required: &[Permission::ViewAllClaims, Permission::ViewAdminPanel],
    },
    RouteAccess {
        path: "/admin/members",
        required: &[Permission::ManageUsers, Permission::ViewAdminPanel],
    },
    RouteAccess {
        path: "/admin/voting",
        required: &[Permission::ManageVoting, Permission::ViewAdminPanel],
    },
    RouteAccess {
        path: "/admin/analytics",
        required: &[Permission::ViewAdvancedAnalytics, Permission::ViewAdminPanel],
    },
    RouteAccess {
        path: "/admin/settings",
        required: &[Permission::SystemSettings, Permission::ViewAdminPanel],
    },
    RouteAccess {
        path: "/admin/organizations",
        required: &[Permission::ManageOrganizations, Permission::ViewAdminPanel],
    },
];

/// Look up requirements for a path: exact match first, then the nearest
/// registered ancestor (so `/admin/claims/42` inherits `/admin/claims`).
///
/// Only permission-gated entries propagate to descendants. An open entry
/// (empty requirement set) applies to its exact path alone, so a new subtree
/// under it stays unmapped until it gets its own entry. `None` means the
/// route is unmapped and access is denied.
pub fn route_requirements(path: &str) -> Option<&'static [Permission]> {
    let mut candidate = path.trim_end_matches('/');
    if candidate.is_empty() {
        return None;
    }

    let mut inherited = false;
    loop {
        if let Some(entry) = ROUTE_ACCESS.iter().find(|e| e.path == candidate) {
            if inherited && entry.required.is_empty() {
                return None;
            }
            return Some(entry.required);
        }
        match candidate.rfind('/') {
            Some(0) | None => return None,
            Some(idx) => {
                candidate = &candidate[..idx];
                inherited = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        assert_eq!(
            route_requirements("/admin/members"),
            Some(&[Permission::ManageUsers, Permission::ViewAdminPanel][..])
        );
    }

    #[test]
    fn nearest_ancestor_applies_to_subresources() {
        assert_eq!(
            route_requirements("/admin/claims/42"),
            Some(&[Permission::ViewAllClaims, Permission::ViewAdminPanel][..])
        );
        // Falls through /dashboard/claims, not the /dashboard catch-all.
        assert_eq!(
            route_requirements("/dashboard/claims/42/notes"),
            Some(&[Permission::ViewOwnClaims][..])
        );
    }

    #[test]
    fn unmapped_routes_have_no_entry() {
        assert_eq!(route_requirements("/api/export"), None);
        assert_eq!(route_requirements(""), None);
        assert_eq!(route_requirements("/"), None);
    }

    #[test]
    fn open_entries_do_not_propagate_to_new_subtrees() {
        // `/dashboard` is open to any authenticated caller, but that must not
        // leak to unregistered areas beneath it.
        assert_eq!(route_requirements("/dashboard"), Some(&[][..]));
        assert_eq!(route_requirements("/dashboard/payroll"), None);
        assert_eq!(route_requirements("/dashboard/settings/profile"), None);
    }

    #[test]
    fn trailing_slash_is_normalized() {
        assert_eq!(route_requirements("/dashboard/voting/"), Some(&[Permission::ViewVoting][..]));
    }
}
