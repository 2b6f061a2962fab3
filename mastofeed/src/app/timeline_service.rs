//! Timeline service
//!
//! Fetches the home timeline and turns it into renderable items.
//! Every call is a fresh fetch; nothing is cached between requests.

use std::sync::Arc;

use crate::domain::entities::{OutputFormat, RenderableItem};
use crate::domain::ports::MastodonClient;
use crate::error::MastodonError;

use super::normalize;

/// Service for building feed items from the home timeline
pub struct TimelineService<MC>
where
    MC: MastodonClient + ?Sized,
{
    mastodon: Arc<MC>,
    home_instance: String,
}

impl<MC> TimelineService<MC>
where
    MC: MastodonClient + ?Sized,
{
    pub fn new(mastodon: Arc<MC>, home_instance: String) -> Self {
        Self {
            mastodon,
            home_instance,
        }
    }

    /// Fetch and normalize the timeline for one output format.
    /// A failed fetch fails the whole feed; there are no partial results.
    pub async fn items(&self, format: OutputFormat) -> Result<Vec<RenderableItem>, MastodonError> {
        let entries = self.mastodon.home_timeline().await?;
        tracing::debug!(
            count = entries.len(),
            boosts = entries.iter().filter(|e| e.is_boost()).count(),
            %format,
            "Fetched home timeline"
        );

        Ok(entries
            .iter()
            .map(|entry| normalize(entry, format, &self.home_instance))
            .collect())
    }
}
