//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod mastodon;

pub use mastodon::MastodonClientImpl;
