//! Bookmark HTTP Routes
//!
//! `/bookmarks` collection and `/bookmarks/:id` item endpoints.
//!
//! Each handler validates first, then touches storage. Existence is looked
//! up once per request and the result reused.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::{info, warn};

use crate::bookmark::{
    sanitize, sanitize_all, validate_new, validate_patch, BookmarkError, BookmarkFields,
    BookmarkResult, BookmarksService, SanitizedBookmark,
};

// ==================
// Shared State
// ==================

/// Bookmark state shared across handlers
pub struct BookmarkState {
    pub service: BookmarksService,
}

impl BookmarkState {
    pub fn new(service: BookmarksService) -> Self {
        Self { service }
    }
}

// ==================
// Bookmark Routes
// ==================

/// Create bookmark routes
pub fn bookmark_routes(state: Arc<BookmarkState>) -> Router {
    Router::new()
        .route("/bookmarks", get(list_handler).post(create_handler))
        .route(
            "/bookmarks/:id",
            get(get_handler).patch(update_handler).delete(delete_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Path ids that are not integers cannot name a stored row
fn parse_id(raw: &str) -> BookmarkResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        warn!(id = %raw, "Bookmark id is not an integer");
        BookmarkError::NotFound
    })
}

/// A request without a JSON content type carries no fields
fn decode_body(body: Result<Json<BookmarkFields>, JsonRejection>) -> BookmarkResult<BookmarkFields> {
    match body {
        Ok(Json(fields)) => Ok(fields),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(BookmarkFields::default()),
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Rejected request body");
            Err(BookmarkError::InvalidBody(rejection.body_text()))
        }
    }
}

fn rejected(operation: &'static str) -> impl FnOnce(BookmarkError) -> BookmarkError {
    move |err| {
        warn!(operation, error = %err, "Bookmark request rejected");
        err
    }
}

// ==================
// Handlers
// ==================

async fn list_handler(
    State(state): State<Arc<BookmarkState>>,
) -> BookmarkResult<Json<Vec<SanitizedBookmark>>> {
    let bookmarks = state.service.list_all().await?;
    Ok(Json(sanitize_all(&bookmarks)))
}

async fn get_handler(
    State(state): State<Arc<BookmarkState>>,
    Path(id): Path<String>,
) -> BookmarkResult<Json<SanitizedBookmark>> {
    let id = parse_id(&id)?;

    match state.service.get_by_id(id).await? {
        Some(bookmark) => Ok(Json(sanitize(&bookmark))),
        None => {
            warn!(id, "Bookmark not found");
            Err(BookmarkError::NotFound)
        }
    }
}

async fn create_handler(
    State(state): State<Arc<BookmarkState>>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<BookmarkFields>, JsonRejection>,
) -> BookmarkResult<impl IntoResponse> {
    let fields = decode_body(body)?;
    let new_bookmark = validate_new(fields).map_err(rejected("create"))?;

    let created = state.service.insert(new_bookmark).await?;
    info!(id = created.id, "Bookmark created");

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(sanitize(&created)),
    ))
}

async fn update_handler(
    State(state): State<Arc<BookmarkState>>,
    Path(id): Path<String>,
    body: Result<Json<BookmarkFields>, JsonRejection>,
) -> BookmarkResult<StatusCode> {
    let fields = decode_body(body)?;
    let patch = validate_patch(fields).map_err(rejected("update"))?;
    let id = parse_id(&id)?;

    if state.service.get_by_id(id).await?.is_none() {
        warn!(id, "Bookmark not found");
        return Err(BookmarkError::NotFound);
    }

    state.service.update_by_id(id, patch).await?;
    info!(id, "Bookmark updated");

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_handler(
    State(state): State<Arc<BookmarkState>>,
    Path(id): Path<String>,
) -> BookmarkResult<StatusCode> {
    let id = parse_id(&id)?;

    if !state.service.delete_by_id(id).await? {
        warn!(id, "Bookmark not found");
        return Err(BookmarkError::NotFound);
    }

    info!(id, "Bookmark deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::InMemoryTable;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert!(matches!(parse_id("abc"), Err(BookmarkError::NotFound)));
        assert!(matches!(parse_id(""), Err(BookmarkError::NotFound)));
    }

    #[tokio::test]
    async fn test_routes_serve_empty_collection() {
        let state = Arc::new(BookmarkState::new(BookmarksService::new(InMemoryTable::new())));
        let request = Request::builder()
            .method(Method::GET)
            .uri("/bookmarks")
            .body(Body::empty())
            .unwrap();

        let response = bookmark_routes(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"[]");
    }
}
