//! Role → permission matrix and the defensive string-tag lookups.
//!
//! The matrix is materialized per role (no inheritance chain at runtime) and
//! lives in static data, so concurrent reads are lock-free. Role tags arrive
//! from external session claims; lookups on unrecognized tags return empty /
//! minimum defaults instead of failing, so call sites stay pure queries.

use std::collections::BTreeSet;

use crate::{Permission, Role, roles::UNKNOWN_ROLE_LEVEL};

/// Permissions granted by a role. Total over `Role`; the set is closed.
pub fn permissions_for_role(role: Role) -> &'static [Permission] {
    match role {
        // Congress staff: widest cross-organizational visibility, read-only
        // on local matters to respect local autonomy.
        Role::CongressStaff => &[
            Permission::ViewAllClaims,
            Permission::ViewOwnClaims,
            Permission::ViewAllMembers,
            Permission::ViewOwnProfile,
            Permission::ViewCrossUnionAnalytics,
            Permission::ManageCrossUnionAnalytics,
            Permission::ViewCongressAnalytics,
            Permission::ViewFederationAnalytics,
            Permission::ViewAllOrganizations,
            Permission::ViewComplianceReports,
            Permission::ManageSectorAnalytics,
            Permission::ViewPrecedentDatabase,
            Permission::ManagePrecedentDatabase,
            Permission::ViewClauseLibrary,
            Permission::ManageClauseLibrary,
            Permission::ViewCba,
            Permission::ViewVoting,
            Permission::ViewVoteResults,
            Permission::ViewAnalytics,
            Permission::ViewAdvancedAnalytics,
            Permission::ManageAffiliates,
        ],

        // Federation staff: provincial/regional scope of the same shape.
        Role::FederationStaff => &[
            Permission::ViewAllClaims,
            Permission::ViewOwnClaims,
            Permission::ViewAllMembers,
            Permission::ViewOwnProfile,
            Permission::ViewCrossUnionAnalytics,
            Permission::ViewFederationAnalytics,
            Permission::ViewAllOrganizations,
            Permission::ViewComplianceReports,
            Permission::ViewPrecedentDatabase,
            Permission::ManagePrecedentDatabase,
            Permission::ViewClauseLibrary,
            Permission::ManageClauseLibrary,
            Permission::ViewCba,
            Permission::ViewVoting,
            Permission::ViewVoteResults,
            Permission::ViewAnalytics,
            Permission::ViewAdvancedAnalytics,
            Permission::ManageAffiliates,
        ],

        Role::Admin => &[
            Permission::ViewAllClaims,
            Permission::ViewOwnClaims,
            Permission::CreateClaim,
            Permission::EditAllClaims,
            Permission::EditOwnClaims,
            Permission::DeleteClaim,
            Permission::ApproveClaim,
            Permission::ViewAllMembers,
            Permission::ViewOwnProfile,
            Permission::EditMember,
            Permission::DeleteMember,
            Permission::InviteMember,
            Permission::ViewVoting,
            Permission::CreateVote,
            Permission::CastVote,
            Permission::ManageVoting,
            Permission::ViewVoteResults,
            Permission::ViewCba,
            Permission::EditCba,
            Permission::CreateCba,
            Permission::DeleteCba,
            Permission::ViewAnalytics,
            Permission::ViewAdvancedAnalytics,
            Permission::ManageUsers,
            Permission::ManageRoles,
            Permission::SystemSettings,
            Permission::ViewAdminPanel,
        ],

        Role::UnionRep => &[
            Permission::ViewAllClaims,
            Permission::ViewOwnClaims,
            Permission::CreateClaim,
            Permission::EditAllClaims,
            Permission::EditOwnClaims,
            Permission::ApproveClaim,
            Permission::ViewAllMembers,
            Permission::ViewOwnProfile,
            Permission::EditMember,
            Permission::InviteMember,
            Permission::ViewVoting,
            Permission::CreateVote,
            Permission::CastVote,
            Permission::ManageVoting,
            Permission::ViewVoteResults,
            Permission::ViewCba,
            Permission::EditCba,
            Permission::CreateCba,
            Permission::ViewAnalytics,
            Permission::ViewAdvancedAnalytics,
        ],

        Role::StaffRep => &[
            Permission::ViewAllClaims,
            Permission::ViewOwnClaims,
            Permission::CreateClaim,
            Permission::EditOwnClaims,
            Permission::ViewAllMembers,
            Permission::ViewOwnProfile,
            Permission::ViewVoting,
            Permission::CastVote,
            Permission::ViewCba,
            Permission::ViewAnalytics,
        ],

        Role::Member => &[
            Permission::ViewOwnClaims,
            Permission::CreateClaim,
            Permission::EditOwnClaims,
            Permission::ViewOwnProfile,
            Permission::ViewVoting,
            Permission::CastVote,
            Permission::ViewCba,
        ],

        Role::Guest => &[Permission::ViewOwnProfile],
    }
}

/// Permissions granted by a raw role tag; unrecognized tags grant nothing.
pub fn permissions_for_tag(tag: &str) -> &'static [Permission] {
    match Role::from_tag(tag) {
        Some(role) => permissions_for_role(role),
        None => &[],
    }
}

/// Deduplicated union of permissions across a caller's full role set.
pub fn permissions_for_roles(roles: &[Role]) -> BTreeSet<Permission> {
    roles
        .iter()
        .flat_map(|r| permissions_for_role(*r).iter().copied())
        .collect()
}

/// Hierarchy level for a raw role tag; unrecognized tags get the minimum
/// sentinel (least privileged, below every declared role).
pub fn role_level(tag: &str) -> u8 {
    match Role::from_tag(tag) {
        Some(role) => role.level(),
        None => UNKNOWN_ROLE_LEVEL,
    }
}
