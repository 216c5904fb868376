use serde::{Deserialize, Serialize};

/// A named capability a role may grant.
///
/// The namespace is flat and closed: permissions have no hierarchy among
/// themselves, and the compiler keeps the matrix exhaustively checkable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    // Claims
    ViewAllClaims,
    ViewOwnClaims,
    CreateClaim,
    EditAllClaims,
    EditOwnClaims,
    DeleteClaim,
    ApproveClaim,

    // Members
    ViewAllMembers,
    ViewOwnProfile,
    EditMember,
    DeleteMember,
    InviteMember,

    // Voting
    ViewVoting,
    CreateVote,
    CastVote,
    ManageVoting,
    ViewVoteResults,

    // Collective bargaining agreements
    ViewCba,
    EditCba,
    CreateCba,
    DeleteCba,

    // Analytics
    ViewAnalytics,
    ViewAdvancedAnalytics,

    // Cross-organizational (congress/federation)
    ViewCrossUnionAnalytics,
    ManageCrossUnionAnalytics,
    ViewPrecedentDatabase,
    ManagePrecedentDatabase,
    ViewClauseLibrary,
    ManageClauseLibrary,
    ViewFederationAnalytics,
    ViewCongressAnalytics,
    ManageAffiliates,
    ViewAllOrganizations,
    ManageOrganizations,
    ViewComplianceReports,
    ManageSectorAnalytics,

    // Admin
    ManageUsers,
    ManageRoles,
    SystemSettings,
    ViewAdminPanel,
}

impl Permission {
    /// All declared permissions.
    pub const ALL: [Permission; 40] = [
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
        Permission::ViewCrossUnionAnalytics,
        Permission::ManageCrossUnionAnalytics,
        Permission::ViewPrecedentDatabase,
        Permission::ManagePrecedentDatabase,
        Permission::ViewClauseLibrary,
        Permission::ManageClauseLibrary,
        Permission::ViewFederationAnalytics,
        Permission::ViewCongressAnalytics,
        Permission::ManageAffiliates,
        Permission::ViewAllOrganizations,
        Permission::ManageOrganizations,
        Permission::ViewComplianceReports,
        Permission::ManageSectorAnalytics,
        Permission::ManageUsers,
        Permission::ManageRoles,
        Permission::SystemSettings,
        Permission::ViewAdminPanel,
    ];

    /// Stable wire tag (snake_case, matches the serde representation).
    pub fn tag(&self) -> &'static str {
        match self {
            Permission::ViewAllClaims => "view_all_claims",
            Permission::ViewOwnClaims => "view_own_claims",
            Permission::CreateClaim => "create_claim",
            Permission::EditAllClaims => "edit_all_claims",
            Permission::EditOwnClaims => "edit_own_claims",
            Permission::DeleteClaim => "delete_claim",
            Permission::ApproveClaim => "approve_claim",
            Permission::ViewAllMembers => "view_all_members",
            Permission::ViewOwnProfile => "view_own_profile",
            Permission::EditMember => "edit_member",
            Permission::DeleteMember => "delete_member",
            Permission::InviteMember => "invite_member",
            Permission::ViewVoting => "view_voting",
            Permission::CreateVote => "create_vote",
            Permission::CastVote => "cast_vote",
            Permission::ManageVoting => "manage_voting",
            Permission::ViewVoteResults => "view_vote_results",
            Permission::ViewCba => "view_cba",
            Permission::EditCba => "edit_cba",
            Permission::CreateCba => "create_cba",
            Permission::DeleteCba => "delete_cba",
            Permission::ViewAnalytics => "view_analytics",
            Permission::ViewAdvancedAnalytics => "view_advanced_analytics",
            Permission::ViewCrossUnionAnalytics => "view_cross_union_analytics",
            Permission::ManageCrossUnionAnalytics => "manage_cross_union_analytics",
            Permission::ViewPrecedentDatabase => "view_precedent_database",
            Permission::ManagePrecedentDatabase => "manage_precedent_database",
            Permission::ViewClauseLibrary => "view_clause_library",
            Permission::ManageClauseLibrary => "manage_clause_library",
            Permission::ViewFederationAnalytics => "view_federation_analytics",
            Permission::ViewCongressAnalytics => "view_congress_analytics",
            Permission::ManageAffiliates => "manage_affiliates",
            Permission::ViewAllOrganizations => "view_all_organizations",
            Permission::ManageOrganizations => "manage_organizations",
            Permission::ViewComplianceReports => "view_compliance_reports",
            Permission::ManageSectorAnalytics => "manage_sector_analytics",
            Permission::ManageUsers => "manage_users",
            Permission::ManageRoles => "manage_roles",
            Permission::SystemSettings => "system_settings",
            Permission::ViewAdminPanel => "view_admin_panel",
        }
    }

    /// Parse a permission tag; unknown tags yield `None` rather than an error.
    pub fn from_tag(tag: &str) -> Option<Permission> {
        Permission::ALL.into_iter().find(|p| p.tag() == tag)
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}
