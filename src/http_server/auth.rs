//! Bearer Token Middleware
//!
//! Rejects requests that do not carry `Authorization: Bearer <token>`
//! matching the configured API token, before any handler runs.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use subtle::ConstantTimeEq;
use tracing::warn;

/// Body of a 401 response
#[derive(Debug, Serialize)]
pub struct UnauthorizedResponse {
    pub error: &'static str,
}

/// The shared secret clients must present
#[derive(Clone)]
pub struct ApiToken(Arc<str>);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Arc::from(token.into()))
    }

    /// Constant-time comparison. An empty configured token matches nothing.
    pub fn matches(&self, candidate: &str) -> bool {
        if self.0.is_empty() {
            return false;
        }
        self.0.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

/// Extract the token from an `Authorization: Bearer ...` header value
fn bearer_token(value: &str) -> Option<&str> {
    value.strip_prefix("Bearer ").map(str::trim)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(UnauthorizedResponse {
            error: "Unauthorized request",
        }),
    )
        .into_response()
}

/// Authentication layer function.
pub async fn require_bearer_token(
    State(token): State<ApiToken>,
    req: Request,
    next: Next,
) -> Response {
    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token);

    match presented {
        Some(candidate) if token.matches(candidate) => next.run(req).await,
        _ => {
            warn!(path = %req.uri().path(), "Unauthorized request");
            unauthorized()
        }
    }
}
