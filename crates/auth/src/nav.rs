//! Declarative navigation lists and their permission gates.
//!
//! Mirrors the route map for UI rendering only; server-side routes enforce
//! access independently.

use serde::Serialize;

use crate::{Permission, Role, evaluator};

/// One navigation entry. `required` is ALL-of; empty means visible to every
/// authenticated caller.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub required: &'static [Permission],
    pub admin_only: bool,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/dashboard", label: "Dashboard", icon: "home", required: &[], admin_only: false },
    NavItem {
        path: "/dashboard/claims",
        label: "My Claims",
        icon: "file-text",
        required: &[Permission::ViewOwnClaims],
        admin_only: false,
    },
    NavItem {
        path: "/dashboard/collective-agreements",
        label: "Collective Agreements",
        icon: "book-open",
        required: &[Permission::ViewCba],
        admin_only: false,
    },
    NavItem {
        path: "/dashboard/voting",
        label: "Voting",
        icon: "vote",
        required: &[Permission::ViewVoting],
        admin_only: false,
    },
    NavItem {
        path: "/dashboard/members",
        label: "Members",
        icon: "users",
        required: &[Permission::ViewAllMembers],
        admin_only: false,
    },
    NavItem {
        path: "/dashboard/analytics",
        label: "Analytics",
        icon: "trending-up",
        required: &[Permission::ViewAnalytics],
        admin_only: false,
    },
    NavItem {
        path: "/dashboard/settings",
        label: "Settings",
        icon: "settings",
        required: &[],
        admin_only: false,
    },
];

pub const ADMIN_NAV_ITEMS: &[NavItem] = &[
    NavItem {
        path: "/admin",
        label: "Overview",
        icon: "layout-dashboard",
        required: &[Permission::ViewAdminPanel],
        admin_only: true,
    },
    NavItem {
        path: "/admin/claims",
        label: "Claims Management",
        icon: "file-text",
        required: &[Permission::ViewAllClaims, Permission::ViewAdminPanel],
        admin_only: true,
    },
    NavItem {
        path: "/admin/members",
        label: "Members",
        icon: "users",
        required: &[Permission::ManageUsers, Permission::ViewAdminPanel],
        admin_only: true,
    },
    NavItem {
        path: "/admin/voting",
        label: "Voting Admin",
        icon: "vote",
        required: &[Permission::ManageVoting, Permission::ViewAdminPanel],
        admin_only: true,
    },
    NavItem {
        path: "/admin/analytics",
        label: "Analytics",
        icon: "trending-up",
        required: &[Permission::ViewAdvancedAnalytics, Permission::ViewAdminPanel],
        admin_only: true,
    },
    NavItem {
        path: "/admin/settings",
        label: "Settings",
        icon: "settings",
        required: &[Permission::SystemSettings, Permission::ViewAdminPanel],
        admin_only: true,
    },
];

/// Navigation entries visible to a caller, in declaration order.
///
/// The admin list is additionally gated on holding the admin role; permission
/// checks alone are not enough to surface admin chrome.
pub fn accessible_nav_items(roles: &[Role], admin_mode: bool) -> Vec<&'static NavItem> {
    if admin_mode && !roles.contains(&Role::Admin) {
        return Vec::new();
    }
    let items = if admin_mode { ADMIN_NAV_ITEMS } else { NAV_ITEMS };
    items
        .iter()
        .filter(|item| evaluator::has_all_permissions(roles, item.required))
        .collect()
}
