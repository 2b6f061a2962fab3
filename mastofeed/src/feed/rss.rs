//! RSS 2.0 renderer

use askama::Template;
use chrono::{DateTime, Utc};

use crate::app::format_date;
use crate::domain::entities::{OutputFormat, RenderableItem};

pub const CHANNEL_TITLE: &str = "Mastodon Home Feed";
pub const CHANNEL_DESCRIPTION: &str = "Your Mastodon home timeline";

/// Channel-level metadata
#[derive(Debug, Clone)]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub published_at: DateTime<Utc>,
}

impl Channel {
    /// The aggregator's own channel, stamped with the current time
    pub fn home(link: &str) -> Self {
        Self {
            title: CHANNEL_TITLE.to_string(),
            link: link.to_string(),
            description: CHANNEL_DESCRIPTION.to_string(),
            published_at: Utc::now(),
        }
    }
}

#[derive(Template)]
#[template(path = "feed.rss.xml")]
struct RssDocument<'a> {
    channel: &'a Channel,
    published_at: String,
    items: &'a [RenderableItem],
}

/// Render items into an RSS document.
///
/// Items must have been normalized for `OutputFormat::Xml`: their
/// descriptions are CDATA fragments and are written verbatim. Items carry
/// no `<guid>`; the link identifies them.
pub fn render_rss(channel: &Channel, items: &[RenderableItem]) -> askama::Result<String> {
    debug_assert!(
        items.iter().all(|item| item.format == OutputFormat::Xml),
        "RSS items must carry xml descriptions"
    );

    RssDocument {
        channel,
        published_at: format_date(&channel.published_at),
        items,
    }
    .render()
}
