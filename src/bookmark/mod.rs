//! # Bookmarks
//!
//! Validation, sanitization and record access for bookmark records.
//!
//! - [`validation`] checks request bodies before anything is stored
//! - [`sanitize`] escapes text fields on the way out
//! - [`service`] maps logical operations onto a [`BookmarkTable`]

pub mod errors;
pub mod sanitize;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

pub use errors::{BookmarkError, BookmarkResult, ErrorEnvelope};
pub use sanitize::{escape_html, sanitize, sanitize_all};
pub use service::BookmarksService;
pub use store::{BookmarkTable, InMemoryTable, StorageError, StorageResult, StoreFuture};
pub use types::{Bookmark, BookmarkFields, BookmarkPatch, NewBookmark, SanitizedBookmark};
pub use validation::{parse_rating, validate_new, validate_patch};
