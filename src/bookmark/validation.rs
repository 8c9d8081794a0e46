//! # Bookmark Validation
//!
//! Turns raw request bodies into validated rows and patches. Runs before
//! any storage round-trip so a rejected request never writes.

use std::ops::RangeInclusive;

use serde_json::Value;

use super::errors::{BookmarkError, BookmarkResult};
use super::types::{BookmarkFields, BookmarkPatch, NewBookmark};

/// Accepted rating values
pub const RATING_RANGE: RangeInclusive<i64> = 1..=5;

/// Fields a create request must carry, in reporting order
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "url", "rating"];

/// Validate a create request.
///
/// The first missing field in [`REQUIRED_FIELDS`] order is reported.
pub fn validate_new(fields: BookmarkFields) -> BookmarkResult<NewBookmark> {
    if let Some(missing) = REQUIRED_FIELDS
        .iter()
        .copied()
        .find(|name| !is_supplied(&fields, name))
    {
        return Err(BookmarkError::MissingField(missing));
    }

    let rating = match &fields.rating {
        Some(value) => parse_rating(value)?,
        None => return Err(BookmarkError::MissingField("rating")),
    };

    Ok(NewBookmark {
        title: fields.title.unwrap_or_default(),
        url: fields.url.unwrap_or_default(),
        description: fields.description,
        rating,
    })
}

/// Validate a partial update.
///
/// Empty `title`/`url`/`rating` values count as not supplied; they would
/// otherwise break the row invariants. An empty `description` clears it.
pub fn validate_patch(fields: BookmarkFields) -> BookmarkResult<BookmarkPatch> {
    let rating = fields.rating.filter(|value| !is_blank(value));

    let mut patch = BookmarkPatch {
        title: fields.title.filter(|title| !title.is_empty()),
        url: fields.url.filter(|url| !url.is_empty()),
        description: fields.description,
        rating: None,
    };

    if patch.is_empty() && rating.is_none() {
        return Err(BookmarkError::EmptyUpdate);
    }

    if let Some(value) = rating {
        patch.rating = Some(parse_rating(&value)?);
    }

    Ok(patch)
}

/// Parse a rating sent as a JSON integer or an integer string.
pub fn parse_rating(value: &Value) -> BookmarkResult<i64> {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match parsed {
        Some(rating) if RATING_RANGE.contains(&rating) => Ok(rating),
        _ => Err(BookmarkError::InvalidRating),
    }
}

fn is_supplied(fields: &BookmarkFields, name: &str) -> bool {
    match name {
        "title" => fields.title.as_deref().is_some_and(|s| !s.is_empty()),
        "url" => fields.url.as_deref().is_some_and(|s| !s.is_empty()),
        "description" => fields.description.is_some(),
        "rating" => fields.rating.as_ref().is_some_and(|v| !is_blank(v)),
        _ => false,
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
