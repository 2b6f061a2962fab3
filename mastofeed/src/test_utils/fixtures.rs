//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{TimeZone, Utc};

use crate::domain::entities::{Account, MediaAttachment, MediaKind, Post, TimelineEntry};

/// Two entries as the origin would send them: a plain post and a boost
pub const TIMELINE_JSON: &str = r#"[
    {
        "id": "1",
        "content": "<p>hello</p>",
        "created_at": "2024-03-01T09:30:00.000Z",
        "url": "https://fosstodon.org/@alice/1",
        "account": {"display_name": "Alice", "acct": "alice", "avatar": "https://cdn.example/alice.png"},
        "media_attachments": [],
        "reblog": null
    },
    {
        "id": "2",
        "content": "",
        "created_at": "2024-03-01T10:00:00.000Z",
        "url": null,
        "account": {"display_name": "Bob", "acct": "bob@example.social", "avatar": "https://cdn.example/bob.png"},
        "media_attachments": [],
        "reblog": {
            "id": "100",
            "content": "<p>worth sharing</p>",
            "created_at": "2024-02-29T18:00:00.000Z",
            "url": "https://fosstodon.org/@carol/100",
            "account": {"display_name": "Carol", "acct": "carol", "avatar": "https://cdn.example/carol.png"},
            "media_attachments": [
                {"type": "image", "url": "https://cdn.example/cat.jpg", "description": "a cat"},
                {"type": "video", "url": "https://cdn.example/clip.mp4", "description": null}
            ]
        }
    }
]"#;

/// Create an account whose handle is derived from the display name
pub fn test_account(display_name: &str) -> Account {
    let handle = display_name.to_lowercase().replace(' ', "_");
    Account {
        display_name: display_name.to_string(),
        acct: handle.clone(),
        avatar: format!("https://cdn.example/{}.png", handle),
    }
}

/// Create a post by "Alice" with the given body and no attachments
pub fn test_post(id: &str, content: &str) -> Post {
    test_post_by(id, "Alice", content)
}

pub fn test_post_by(id: &str, display_name: &str, content: &str) -> Post {
    let account = test_account(display_name);
    Post {
        id: id.to_string(),
        content: content.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        url: format!("https://fosstodon.org/@{}/{}", account.acct, id),
        account,
        media_attachments: vec![],
    }
}

pub fn test_media(kind: MediaKind, url: &str, description: &str) -> MediaAttachment {
    MediaAttachment {
        kind,
        url: url.to_string(),
        description: description.to_string(),
    }
}

/// Create a plain (non-boost) timeline entry
pub fn test_entry(id: &str, display_name: &str, content: &str) -> TimelineEntry {
    TimelineEntry {
        post: test_post_by(id, display_name, content),
        reblog: None,
    }
}

/// Create a boost: `booster` boosting `author`'s post `original_id`
pub fn test_boosted_entry(
    id: &str,
    booster: &str,
    original_id: &str,
    author: &str,
    content: &str,
) -> TimelineEntry {
    let mut original = test_post_by(original_id, author, content);
    original.created_at = Utc.with_ymd_and_hms(2024, 2, 29, 18, 0, 0).unwrap();

    TimelineEntry {
        post: test_post_by(id, booster, ""),
        reblog: Some(Box::new(original)),
    }
}
