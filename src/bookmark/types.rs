//! # Bookmark Types
//!
//! Row, input and output shapes for the bookmarks collection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored bookmark row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Assigned by storage, never reused
    pub id: i64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Always within 1..=5
    pub rating: i64,
}

/// A validated bookmark that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: i64,
}

impl NewBookmark {
    /// Attach the id assigned by storage
    pub fn into_bookmark(self, id: i64) -> Bookmark {
        Bookmark {
            id,
            title: self.title,
            url: self.url,
            description: self.description,
            rating: self.rating,
        }
    }
}

/// A validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i64>,
}

impl BookmarkPatch {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.rating.is_none()
    }

    /// Apply the supplied fields to a stored row
    pub fn apply_to(&self, bookmark: &mut Bookmark) {
        if let Some(title) = &self.title {
            bookmark.title = title.clone();
        }
        if let Some(url) = &self.url {
            bookmark.url = url.clone();
        }
        if let Some(description) = &self.description {
            bookmark.description = Some(description.clone());
        }
        if let Some(rating) = self.rating {
            bookmark.rating = rating;
        }
    }
}

/// Raw request body for create and update.
///
/// Every field is optional so validation can report exactly what is
/// missing. Unknown fields are dropped during deserialization. `rating`
/// stays untyped because clients send it both as a number and as a
/// numeric string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookmarkFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<Value>,
}

/// A bookmark as returned to callers, with text fields escaped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedBookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i64,
}
