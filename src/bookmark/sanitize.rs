//! # Output Sanitization
//!
//! Escapes HTML-significant characters in stored text before it leaves
//! the service. Stored rows keep the original text; escaping happens once,
//! at read time, on every record handed to a caller.
//!
//! Escaped set:
//!
//! | char | entity   |
//! |------|----------|
//! | `&`  | `&amp;`  |
//! | `<`  | `&lt;`   |
//! | `>`  | `&gt;`   |
//! | `"`  | `&quot;` |
//! | `'`  | `&#x27;` |
//!
//! Bare inline formatting tags without attributes (`<strong>`, `<em>`,
//! `<b>`, `<i>`, `<u>`, `<p>`, `<br>` and their closing forms) are kept
//! verbatim.

use std::sync::OnceLock;

use regex::Regex;

use super::types::{Bookmark, SanitizedBookmark};

const ALLOWED_TAG_PATTERN: &str = r"(?i)</?(?:strong|em|b|i|u|p|br)\s*/?>";

fn allowed_tags() -> &'static Regex {
    static ALLOWED_TAGS: OnceLock<Regex> = OnceLock::new();
    ALLOWED_TAGS.get_or_init(|| {
        Regex::new(ALLOWED_TAG_PATTERN).unwrap_or_else(|e| panic!("invalid tag pattern: {}", e))
    })
}

/// Escape `text` for inclusion in HTML, keeping allow-listed tags.
pub fn escape_html(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last = 0;

    for tag in allowed_tags().find_iter(text) {
        push_escaped(&mut output, &text[last..tag.start()]);
        output.push_str(tag.as_str());
        last = tag.end();
    }
    push_escaped(&mut output, &text[last..]);

    output
}

fn push_escaped(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            c => output.push(c),
        }
    }
}

/// Build the caller-facing form of a stored row
pub fn sanitize(bookmark: &Bookmark) -> SanitizedBookmark {
    SanitizedBookmark {
        id: bookmark.id,
        title: escape_html(&bookmark.title),
        url: bookmark.url.clone(),
        description: bookmark
            .description
            .as_deref()
            .map(escape_html)
            .unwrap_or_default(),
        rating: bookmark.rating,
    }
}

/// Sanitize a collection, preserving order
pub fn sanitize_all(bookmarks: &[Bookmark]) -> Vec<SanitizedBookmark> {
    bookmarks.iter().map(sanitize).collect()
}
