//! HTTP API: server, routing, and the request authorization boundary.
//!
//! Every business route in the platform is reachable only through the
//! middleware in this crate: authentication first, then role/permission/
//! organization gates, and only then the handler.

pub mod app;
pub mod errors;
pub mod middleware;
