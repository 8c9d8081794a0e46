//! # Bookmarks HTTP Server Module
//!
//! Axum server exposing the bookmarks API.
//!
//! # Endpoints
//!
//! - `/health` - Health check (no authentication)
//! - `/bookmarks` - List and create
//! - `/bookmarks/:id` - Get, patch and delete

pub mod auth;
pub mod bookmark_routes;
pub mod config;
pub mod observability_routes;
pub mod server;

pub use auth::ApiToken;
pub use self::config::{ConfigError, ConfigResult, HttpServerConfig};
pub use server::HttpServer;
