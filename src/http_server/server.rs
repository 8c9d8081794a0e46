//! # HTTP Server
//!
//! Combines the health and bookmark routers, the authentication layer,
//! CORS and request tracing into one Axum server.

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::bookmark::{BookmarkTable, BookmarksService, InMemoryTable};

use super::auth::{require_bearer_token, ApiToken};
use super::bookmark_routes::{bookmark_routes, BookmarkState};
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;

/// HTTP server for the bookmarks API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server backed by a fresh in-memory table
    pub fn new(config: HttpServerConfig) -> Self {
        Self::with_table(config, Arc::new(InMemoryTable::new()))
    }

    /// Create a server over the given table
    pub fn with_table(config: HttpServerConfig, table: Arc<dyn BookmarkTable>) -> Self {
        let router = Self::build_router(&config, table);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, table: Arc<dyn BookmarkTable>) -> Router {
        let state = Arc::new(BookmarkState::new(BookmarksService::with_table(table)));
        let token = ApiToken::new(config.api_token.clone().unwrap_or_default());

        // route_layer so unknown paths still answer 404, not 401
        let bookmarks = bookmark_routes(state)
            .route_layer(middleware::from_fn_with_state(token, require_bearer_token));

        Router::new()
            .merge(health_routes())
            .merge(bookmarks)
            .layer(TraceLayer::new_for_http())
            .layer(Self::cors_layer(config))
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and run until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        info!(address = %addr, "Bookmarks server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server shut down gracefully");
        Ok(())
    }
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
