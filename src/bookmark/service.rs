//! # Bookmarks Service
//!
//! Record access for bookmarks. Maps the logical operations onto the
//! table collaborator and nothing else; validation and response shaping
//! live elsewhere.

use std::sync::Arc;

use super::store::{BookmarkTable, StorageResult};
use super::types::{Bookmark, BookmarkPatch, NewBookmark};

/// Record access over a shared bookmarks table
#[derive(Clone)]
pub struct BookmarksService {
    table: Arc<dyn BookmarkTable>,
}

impl BookmarksService {
    /// Create a service over the given table
    pub fn new(table: impl BookmarkTable + 'static) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Create a service over an already shared table
    pub fn with_table(table: Arc<dyn BookmarkTable>) -> Self {
        Self { table }
    }

    /// All bookmarks in storage order
    pub async fn list_all(&self) -> StorageResult<Vec<Bookmark>> {
        self.table.select_all().await
    }

    /// The bookmark with `id`, or `None` when absent
    pub async fn get_by_id(&self, id: i64) -> StorageResult<Option<Bookmark>> {
        self.table.select_by_id(id).await
    }

    /// Persist a validated bookmark and return it with its id
    pub async fn insert(&self, bookmark: NewBookmark) -> StorageResult<Bookmark> {
        self.table.insert(bookmark).await
    }

    /// Apply the supplied fields to the bookmark with `id`.
    ///
    /// Matching zero rows is not an error; callers check existence first.
    pub async fn update_by_id(&self, id: i64, patch: BookmarkPatch) -> StorageResult<()> {
        self.table.update(id, patch).await?;
        Ok(())
    }

    /// Delete the bookmark with `id`. Returns whether a row was removed.
    pub async fn delete_by_id(&self, id: i64) -> StorageResult<bool> {
        Ok(self.table.delete(id).await? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::store::InMemoryTable;

    fn new_bookmark(title: &str, rating: i64) -> NewBookmark {
        NewBookmark {
            title: title.to_string(),
            url: format!("https://{}.example.com", title),
            description: Some(format!("{} description", title)),
            rating,
        }
    }

    #[tokio::test]
    async fn test_crud_flow() {
        let service = BookmarksService::new(InMemoryTable::new());
        assert!(service.list_all().await.unwrap().is_empty());

        let created = service.insert(new_bookmark("one", 4)).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created.clone()));

        let patch = BookmarkPatch {
            rating: Some(1),
            ..Default::default()
        };
        service.update_by_id(created.id, patch).await.unwrap();
        let updated = service.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(updated.rating, 1);
        assert_eq!(updated.title, "one");

        assert!(service.delete_by_id(created.id).await.unwrap());
        assert!(!service.delete_by_id(created.id).await.unwrap());
        assert!(service.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_row_is_silent() {
        let service = BookmarksService::new(InMemoryTable::new());
        let patch = BookmarkPatch {
            title: Some("ghost".to_string()),
            ..Default::default()
        };
        assert!(service.update_by_id(99, patch).await.is_ok());
    }
}
