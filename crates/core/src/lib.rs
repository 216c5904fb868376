//! `unionhub-core` — shared domain primitives.
//!
//! This crate contains **pure domain** identifiers (no infrastructure concerns).

pub mod id;

pub use id::{OrganizationId, UserId};
