//! Entry normalizer
//!
//! Flattens a timeline entry into a `RenderableItem`. For a boost, everything
//! content-bearing comes from the boosted post; the wrapper only lends the
//! booster's name to the title. Only one level of boosting is unwrapped.

use chrono::{DateTime, Utc};

use crate::domain::entities::{OutputFormat, RenderableItem, TimelineEntry};
use crate::feed::{build_description, links};

/// `Mon, 02 Jan 2006 15:04:05 -0700`
pub const RFC1123_NUMERIC_ZONE: &str = "%a, %d %b %Y %H:%M:%S %z";

pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format(RFC1123_NUMERIC_ZONE).to_string()
}

pub fn display_title(entry: &TimelineEntry) -> String {
    match &entry.reblog {
        Some(original) => format!(
            "{} ↻ {} posted",
            entry.post.account.name(),
            original.account.name()
        ),
        None => format!("{} posted", entry.post.account.name()),
    }
}

pub fn normalize(entry: &TimelineEntry, format: OutputFormat, home_instance: &str) -> RenderableItem {
    let post = entry.resolved();

    RenderableItem {
        format,
        title: display_title(entry),
        link: post.url.clone(),
        description: build_description(post, format),
        published_at: format_date(&post.created_at),
        avatar_url: post.account.avatar.clone(),
        source_id: post.id.clone(),
        actions: links::action_links(post, home_instance),
    }
}
