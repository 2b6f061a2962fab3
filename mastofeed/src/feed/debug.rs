//! Debug page
//!
//! Shows how share and search links on the home instance are built, using a
//! fixed sample post.

use askama::Template;
use urlencoding::encode;

use super::links::{reply_share_url, search_url, share_url};

pub const SAMPLE_POST_URL: &str = "https://fosstodon.org/@alice/123456789";
pub const SAMPLE_ACCT: &str = "alice";

#[derive(Template)]
#[template(path = "debug.html")]
struct DebugPage<'a> {
    home_instance: &'a str,
    post_url: &'a str,
    encoded_url: String,
    share: String,
    reply_share: String,
    search: String,
}

pub fn render_debug(home_instance: &str) -> askama::Result<String> {
    DebugPage {
        home_instance,
        post_url: SAMPLE_POST_URL,
        encoded_url: encode(SAMPLE_POST_URL).into_owned(),
        share: share_url(home_instance, SAMPLE_POST_URL),
        reply_share: reply_share_url(home_instance, SAMPLE_ACCT, SAMPLE_POST_URL),
        search: search_url(home_instance, SAMPLE_POST_URL),
    }
    .render()
}
