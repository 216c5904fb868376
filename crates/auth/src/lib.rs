//! `unionhub-auth` — RBAC core for the platform (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP and storage: a closed
//! role/permission matrix, pure evaluator predicates over it, and the
//! decision functions the request middleware enforces. Role and permission
//! sets are compile-time enumerations; there is no runtime registration and
//! no policy DSL.

pub mod access;
pub mod authorize;
pub mod claims;
pub mod context;
pub mod evaluator;
pub mod nav;
pub mod permissions;
pub mod registry;
pub mod roles;
pub mod routes;
pub mod session;

pub use access::AccessView;
pub use authorize::{
    AuthzError, RoleGate, authorize_all_permissions, authorize_any_permission,
    authorize_organization, authorize_permission, authorize_role,
};
pub use claims::{SessionClaims, TokenValidationError, validate_claims};
pub use context::AuthorizationContext;
pub use nav::{ADMIN_NAV_ITEMS, NAV_ITEMS, NavItem, accessible_nav_items};
pub use permissions::Permission;
pub use roles::{Role, UNKNOWN_ROLE_LEVEL};
pub use session::{Hs256SessionResolver, SessionResolver};
