//! HTTP handlers
//!
//! Axum request handlers for the feed, debug and action endpoints.

pub mod actions;
pub mod debug;
pub mod feed;

pub use actions::{missing_post_id, post_boost, post_like, post_reply};
pub use debug::get_debug;
pub use feed::{get_html_feed, get_rss_feed};
