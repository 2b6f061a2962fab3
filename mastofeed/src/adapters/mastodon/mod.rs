//! Mastodon adapter
//!
//! reqwest implementation of the Mastodon client port.

pub mod client;

pub use client::MastodonClientImpl;
