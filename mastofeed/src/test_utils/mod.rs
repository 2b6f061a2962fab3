//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! `FakeOrigin` stands in for a Mastodon instance when the real HTTP
//! client is under test.

pub mod fake_origin;
pub mod fixtures;
pub mod mocks;

pub use fake_origin::*;
pub use fixtures::*;
pub use mocks::*;
