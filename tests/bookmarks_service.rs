//! Bookmarks Service Tests
//!
//! Record access against a seeded in-memory table.

mod fixtures;

use bookmarks::bookmark::{BookmarkPatch, BookmarksService, InMemoryTable, NewBookmark};

use fixtures::make_bookmarks;

fn seeded_service() -> BookmarksService {
    BookmarksService::new(InMemoryTable::with_rows(make_bookmarks()))
}

#[tokio::test]
async fn test_list_all_resolves_all_rows() {
    let service = seeded_service();
    assert_eq!(service.list_all().await.unwrap(), make_bookmarks());
}

#[tokio::test]
async fn test_get_by_id_resolves_row() {
    let service = seeded_service();
    let expected = make_bookmarks().into_iter().find(|b| b.id == 3);
    assert_eq!(service.get_by_id(3).await.unwrap(), expected);
}

#[tokio::test]
async fn test_delete_by_id_removes_row() {
    let service = seeded_service();

    assert!(service.delete_by_id(3).await.unwrap());

    let expected: Vec<_> = make_bookmarks().into_iter().filter(|b| b.id != 3).collect();
    assert_eq!(service.list_all().await.unwrap(), expected);
}

#[tokio::test]
async fn test_update_by_id_replaces_supplied_fields() {
    let service = seeded_service();
    let patch = BookmarkPatch {
        title: Some("updated title".to_string()),
        url: Some("updated_url.com".to_string()),
        description: Some("updated description".to_string()),
        rating: Some(5),
    };

    service.update_by_id(3, patch).await.unwrap();

    let updated = service.get_by_id(3).await.unwrap().unwrap();
    assert_eq!(updated.id, 3);
    assert_eq!(updated.title, "updated title");
    assert_eq!(updated.url, "updated_url.com");
    assert_eq!(updated.description.as_deref(), Some("updated description"));
    assert_eq!(updated.rating, 5);
}

#[tokio::test]
async fn test_empty_table() {
    let service = BookmarksService::new(InMemoryTable::new());
    assert!(service.list_all().await.unwrap().is_empty());

    let inserted = service
        .insert(NewBookmark {
            title: "New title".to_string(),
            url: "newnewnew_url.com".to_string(),
            description: Some("new description".to_string()),
            rating: 4,
        })
        .await
        .unwrap();

    assert_eq!(inserted.id, 1);
    assert_eq!(inserted.title, "New title");
    assert_eq!(inserted.rating, 4);
}

#[tokio::test]
async fn test_concurrent_inserts_get_distinct_ids() {
    let service = BookmarksService::new(InMemoryTable::new());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .insert(NewBookmark {
                        title: format!("t{}", i),
                        url: format!("https://{}.example", i),
                        description: None,
                        rating: 1 + (i % 5),
                    })
                    .await
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16);
}
