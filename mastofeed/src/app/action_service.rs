//! Action service
//!
//! Forwards like/boost/reply to the origin instance. No idempotency guard:
//! two likes are two upstream calls.

use std::sync::Arc;

use crate::domain::entities::ActionKind;
use crate::domain::ports::{MastodonClient, NewReply};
use crate::error::MastodonError;

/// An interaction requested by a feed reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Like { post_id: String },
    Boost { post_id: String },
    /// Reply text is forwarded as-is, even when empty
    Reply { post_id: String, text: String },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Like { .. } => ActionKind::Like,
            Action::Boost { .. } => ActionKind::Boost,
            Action::Reply { .. } => ActionKind::Reply,
        }
    }

    pub fn post_id(&self) -> &str {
        match self {
            Action::Like { post_id } | Action::Boost { post_id } | Action::Reply { post_id, .. } => {
                post_id
            }
        }
    }
}

/// Service for proxying interactions to the origin instance
pub struct ActionService<MC>
where
    MC: MastodonClient + ?Sized,
{
    mastodon: Arc<MC>,
}

impl<MC> ActionService<MC>
where
    MC: MastodonClient + ?Sized,
{
    pub fn new(mastodon: Arc<MC>) -> Self {
        Self { mastodon }
    }

    pub async fn perform(&self, action: &Action) -> Result<ActionKind, MastodonError> {
        let kind = action.kind();
        tracing::info!(action = %kind, post_id = action.post_id(), "Forwarding action");

        let result = match action {
            Action::Like { post_id } => self.mastodon.favourite(post_id).await,
            Action::Boost { post_id } => self.mastodon.reblog(post_id).await,
            Action::Reply { post_id, text } => {
                self.mastodon
                    .post_reply(&NewReply::public(post_id, text))
                    .await
            }
        };

        match result {
            Ok(()) => {
                tracing::info!(action = %kind, post_id = action.post_id(), "Action succeeded");
                Ok(kind)
            }
            Err(e) => {
                tracing::warn!(
                    action = %kind,
                    post_id = action.post_id(),
                    status = ?e.status(),
                    "Action failed: {}",
                    e
                );
                Err(e)
            }
        }
    }
}
