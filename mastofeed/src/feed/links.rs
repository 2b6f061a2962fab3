//! Link construction
//!
//! Proxy paths for in-page actions, plus share/search URLs on the reader's
//! home instance. The access token never appears in any of these.

use urlencoding::encode;

use crate::domain::entities::{ActionKind, ActionLinks, Post};

/// Relative path of the proxy endpoint, e.g. `/api/like/42`
pub fn action_path(kind: ActionKind, post_id: &str) -> String {
    format!("/api/{}/{}", kind.slug(), encode(post_id))
}

/// Search for a post on the home instance so it can be replied to from there
pub fn search_url(home_instance: &str, post_url: &str) -> String {
    format!("https://{}/search?q={}", home_instance, encode(post_url))
}

/// Open the home instance's compose window with the post URL pre-filled
pub fn share_url(home_instance: &str, post_url: &str) -> String {
    format!("https://{}/share?text={}", home_instance, encode(post_url))
}

/// Like `share_url`, but mentioning the author first
pub fn reply_share_url(home_instance: &str, acct: &str, post_url: &str) -> String {
    format!(
        "https://{}/share?text=@{}%20{}",
        home_instance,
        acct,
        encode(post_url)
    )
}

pub fn action_links(post: &Post, home_instance: &str) -> ActionLinks {
    ActionLinks {
        like: action_path(ActionKind::Like, &post.id),
        boost: action_path(ActionKind::Boost, &post.id),
        reply: search_url(home_instance, &post.url),
        external: share_url(home_instance, &post.url),
    }
}
