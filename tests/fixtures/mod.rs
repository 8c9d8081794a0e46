//! Shared fixtures for the bookmarks integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use bookmarks::bookmark::{Bookmark, BookmarkTable, InMemoryTable, SanitizedBookmark};
use bookmarks::http_server::{HttpServer, HttpServerConfig};
use serde_json::Value;
use tower::ServiceExt;

pub const API_TOKEN: &str = "test-api-token";

pub fn make_bookmarks() -> Vec<Bookmark> {
    vec![
        Bookmark {
            id: 1,
            title: "Test1".to_string(),
            url: "https://www.testwebsite.com/".to_string(),
            description: Some("Search for any recipes".to_string()),
            rating: 3,
        },
        Bookmark {
            id: 2,
            title: "Test2".to_string(),
            url: "https://www.2testwebsite.com/".to_string(),
            description: Some("2 Search for any recipes".to_string()),
            rating: 4,
        },
        Bookmark {
            id: 3,
            title: "Test3!".to_string(),
            url: "https://www.3estwebsite.com/".to_string(),
            description: Some("3 carrots restaurant".to_string()),
            rating: 1,
        },
    ]
}

/// A stored row carrying markup, and the exact form callers must receive
pub fn make_malicious_bookmark() -> (Bookmark, SanitizedBookmark) {
    let stored = Bookmark {
        id: 911,
        title: r#"Naughty naughty very naughty <script>alert("xss");</script>"#.to_string(),
        url: "https://www.hackers.com".to_string(),
        description: Some(
            r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">. But not <strong>all</strong> bad."#
                .to_string(),
        ),
        rating: 1,
    };
    let expected = SanitizedBookmark {
        id: 911,
        title: "Naughty naughty very naughty &lt;script&gt;alert(&quot;xss&quot;);&lt;/script&gt;"
            .to_string(),
        url: "https://www.hackers.com".to_string(),
        description: "Bad image &lt;img src=&quot;https://url.to.file.which/does-not.exist&quot; onerror=&quot;alert(document.cookie);&quot;&gt;. But not <strong>all</strong> bad."
            .to_string(),
        rating: 1,
    };
    (stored, expected)
}

pub fn app_with_table(table: Arc<dyn BookmarkTable>) -> Router {
    let config = HttpServerConfig::default().with_api_token(API_TOKEN);
    HttpServer::with_table(config, table).router()
}

pub fn app_with(rows: Vec<Bookmark>) -> Router {
    app_with_table(Arc::new(InMemoryTable::with_rows(rows)))
}

pub fn empty_app() -> Router {
    app_with(Vec::new())
}

/// Request carrying the test bearer token
pub fn authed(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", API_TOKEN))
        .body(Body::empty())
        .unwrap()
}

/// JSON request carrying the test bearer token
pub fn authed_json(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", API_TOKEN))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    TestResponse {
        status,
        headers,
        body: body.to_vec(),
    }
}
