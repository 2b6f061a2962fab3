//! Timeline domain entities
//!
//! Typed view of the statuses returned by `GET /api/v1/timelines/home`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Helper to deserialize null as default (empty string, empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Author of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub display_name: String,
    /// Handle, `user` for local accounts or `user@host` for remote ones
    pub acct: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub avatar: String,
}

impl Account {
    /// Display name, falling back to the handle when the author left it blank
    pub fn name(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.acct
        } else {
            &self.display_name
        }
    }
}

/// Media attachment type as reported by the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Gifv,
    Video,
    Audio,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAttachment {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub url: String,
    /// Alt text
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
}

impl MediaAttachment {
    pub fn is_image(&self) -> bool {
        self.kind == MediaKind::Image
    }
}

/// The content-bearing part of a status.
///
/// A boosted status is decoded into this type directly, so any `reblog` field
/// it carries is dropped: only one level of boosting is ever unwrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Body as HTML rendered by the origin instance
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub account: Account,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub media_attachments: Vec<MediaAttachment>,
}

impl Post {
    pub fn has_body(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn images(&self) -> impl Iterator<Item = &MediaAttachment> {
        self.media_attachments.iter().filter(|m| m.is_image())
    }
}

/// One entry of the home timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    #[serde(flatten)]
    pub post: Post,
    /// The boosted post when this entry is a boost
    #[serde(default)]
    pub reblog: Option<Box<Post>>,
}

impl TimelineEntry {
    pub fn is_boost(&self) -> bool {
        self.reblog.is_some()
    }

    /// The post that actually carries the content to display
    pub fn resolved(&self) -> &Post {
        self.reblog.as_deref().unwrap_or(&self.post)
    }
}
