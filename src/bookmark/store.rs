//! # Bookmark Table
//!
//! Row-level storage interface for the `bookmarks` collection and an
//! in-memory implementation of it.
//!
//! The table owns id assignment. Ids increase monotonically and are never
//! handed out twice, even after the row holding one is deleted.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use thiserror::Error;
use tokio::sync::RwLock;

use super::types::{Bookmark, BookmarkPatch, NewBookmark};

/// Result type for table operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future returned by table operations
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = StorageResult<T>> + Send + 'a>>;

/// Failures raised by a table implementation
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Backend could not be reached
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Id space exhausted
    #[error("no ids left to assign")]
    IdsExhausted,
}

/// Storage collaborator for the bookmarks collection
pub trait BookmarkTable: Send + Sync {
    /// Select every row in id order
    fn select_all(&self) -> StoreFuture<'_, Vec<Bookmark>>;

    /// Select the row with the given id
    fn select_by_id(&self, id: i64) -> StoreFuture<'_, Option<Bookmark>>;

    /// Insert a row and return it with its assigned id
    fn insert(&self, row: NewBookmark) -> StoreFuture<'_, Bookmark>;

    /// Update the supplied fields of the row with the given id.
    /// Returns the number of rows affected.
    fn update(&self, id: i64, patch: BookmarkPatch) -> StoreFuture<'_, u64>;

    /// Delete the row with the given id. Returns the number of rows affected.
    fn delete(&self, id: i64) -> StoreFuture<'_, u64>;
}

struct TableState {
    rows: BTreeMap<i64, Bookmark>,
    next_id: i64,
}

/// In-memory bookmarks table
pub struct InMemoryTable {
    state: RwLock<TableState>,
}

impl InMemoryTable {
    /// Create an empty table. The first assigned id is 1.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(TableState {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a table pre-populated with rows that already carry ids.
    ///
    /// Later inserts continue after the highest seeded id.
    pub fn with_rows(rows: impl IntoIterator<Item = Bookmark>) -> Self {
        let rows: BTreeMap<i64, Bookmark> = rows.into_iter().map(|b| (b.id, b)).collect();
        let next_id = rows.keys().next_back().map_or(1, |max| max.saturating_add(1));
        Self {
            state: RwLock::new(TableState { rows, next_id }),
        }
    }

    /// Number of rows currently stored
    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    /// True when no rows are stored
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.rows.is_empty()
    }
}

impl Default for InMemoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkTable for InMemoryTable {
    fn select_all(&self) -> StoreFuture<'_, Vec<Bookmark>> {
        Box::pin(async move {
            let state = self.state.read().await;
            Ok(state.rows.values().cloned().collect())
        })
    }

    fn select_by_id(&self, id: i64) -> StoreFuture<'_, Option<Bookmark>> {
        Box::pin(async move {
            let state = self.state.read().await;
            Ok(state.rows.get(&id).cloned())
        })
    }

    fn insert(&self, row: NewBookmark) -> StoreFuture<'_, Bookmark> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            let id = state.next_id;
            if id == i64::MAX {
                return Err(StorageError::IdsExhausted);
            }
            state.next_id = id + 1;

            let bookmark = row.into_bookmark(id);
            state.rows.insert(id, bookmark.clone());
            Ok(bookmark)
        })
    }

    fn update(&self, id: i64, patch: BookmarkPatch) -> StoreFuture<'_, u64> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            match state.rows.get_mut(&id) {
                Some(row) => {
                    patch.apply_to(row);
                    Ok(1)
                }
                None => Ok(0),
            }
        })
    }

    fn delete(&self, id: i64) -> StoreFuture<'_, u64> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            Ok(u64::from(state.rows.remove(&id).is_some()))
        })
    }
}
