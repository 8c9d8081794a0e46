//! bookmarks - an authenticated CRUD service for bookmark records
//!
//! - [`bookmark`]: validation, sanitization and record access
//! - [`http_server`]: Axum routes, authentication and configuration
//! - [`observability`]: tracing setup
//! - [`cli`]: command-line entry points

pub mod bookmark;
pub mod cli;
pub mod http_server;
pub mod observability;
