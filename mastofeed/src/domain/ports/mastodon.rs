//! Mastodon client port trait
//!
//! Defines the interface for talking to the origin instance's API.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::entities::TimelineEntry;
use crate::error::MastodonError;

/// Body of `POST /api/v1/statuses` when replying
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReply {
    pub status: String,
    pub in_reply_to_id: String,
    pub visibility: &'static str,
}

impl NewReply {
    pub fn public(in_reply_to_id: &str, text: &str) -> Self {
        Self {
            status: text.to_string(),
            in_reply_to_id: in_reply_to_id.to_string(),
            visibility: "public",
        }
    }
}

/// Port trait for Mastodon API operations
#[async_trait]
pub trait MastodonClient: Send + Sync {
    /// Fetch one page of the authenticated user's home timeline
    async fn home_timeline(&self) -> Result<Vec<TimelineEntry>, MastodonError>;

    /// Favourite ("like") a status
    async fn favourite(&self, status_id: &str) -> Result<(), MastodonError>;

    /// Reblog ("boost") a status
    async fn reblog(&self, status_id: &str) -> Result<(), MastodonError>;

    /// Publish a reply
    async fn post_reply(&self, reply: &NewReply) -> Result<(), MastodonError>;
}
