//! HTML feed renderer
//!
//! Renders the timeline as a single self-contained page. Like and boost
//! buttons POST to the relative proxy paths and update themselves from the
//! JSON reply; the page never talks to the origin instance directly.

use askama::Template;

use crate::domain::entities::{OutputFormat, RenderableItem};

#[derive(Template)]
#[template(path = "feed.html", escape = "html")]
struct FeedPage<'a> {
    home_instance: &'a str,
    items: &'a [RenderableItem],
}

pub fn render_html(items: &[RenderableItem], home_instance: &str) -> askama::Result<String> {
    debug_assert!(
        items.iter().all(|item| item.format == OutputFormat::Html),
        "HTML items must carry html descriptions"
    );

    FeedPage {
        home_instance,
        items,
    }
    .render()
}
