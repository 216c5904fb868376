use serde::{Deserialize, Serialize};

/// Organizational role held by a user within (or across) organizations.
///
/// Roles form a closed set with a total order on authority. Cross-organization
/// roles (federation/congress staff, admin) may act across tenant boundaries;
/// everyone else is confined to their own organization.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Minimal read-only access (own profile only).
    Guest,
    /// Rank-and-file union member.
    Member,
    /// Staff representative (moderate access within the local).
    StaffRep,
    /// Union representative (broad access within the local).
    UnionRep,
    /// Provincial/regional federation staff (cross-org, read-heavy).
    FederationStaff,
    /// National congress staff (cross-org, read-heavy).
    CongressStaff,
    /// System administrator (full access).
    Admin,
}

/// Hierarchy level returned for role tags that don't resolve to a real role.
///
/// Strictly below every declared role, so an unrecognized tag loses every
/// threshold comparison.
pub const UNKNOWN_ROLE_LEVEL: u8 = 0;

impl Role {
    /// All declared roles, in ascending authority order.
    pub const ALL: [Role; 7] = [
        Role::Guest,
        Role::Member,
        Role::StaffRep,
        Role::UnionRep,
        Role::FederationStaff,
        Role::CongressStaff,
        Role::Admin,
    ];

    /// Stable wire tag (matches session claims and stored role strings).
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Member => "member",
            Role::StaffRep => "staff_rep",
            Role::UnionRep => "union_rep",
            Role::FederationStaff => "federation_staff",
            Role::CongressStaff => "congress_staff",
            Role::Admin => "admin",
        }
    }

    /// Parse a role tag. Tags are exact-match: casing is normalized upstream,
    /// so `"Admin"` is unrecognized here, not coerced.
    pub fn from_tag(tag: &str) -> Option<Role> {
        match tag {
            "guest" => Some(Role::Guest),
            "member" => Some(Role::Member),
            "staff_rep" => Some(Role::StaffRep),
            "union_rep" => Some(Role::UnionRep),
            "federation_staff" => Some(Role::FederationStaff),
            "congress_staff" => Some(Role::CongressStaff),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Hierarchy level. Higher means more authority; gaps leave room for
    /// future tiers without renumbering.
    pub fn level(&self) -> u8 {
        match self {
            Role::Guest => 10,
            Role::Member => 20,
            Role::StaffRep => 30,
            Role::UnionRep => 40,
            Role::FederationStaff => 50,
            Role::CongressStaff => 60,
            Role::Admin => 70,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::Member => "Member",
            Role::StaffRep => "Staff Representative",
            Role::UnionRep => "Union Representative",
            Role::FederationStaff => "Federation Staff",
            Role::CongressStaff => "Congress Staff",
            Role::Admin => "Administrator",
        }
    }

    /// Roles permitted to act across organization boundaries.
    pub fn is_cross_org_staff(&self) -> bool {
        matches!(
            self,
            Role::FederationStaff | Role::CongressStaff | Role::Admin
        )
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}
