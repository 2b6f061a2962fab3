//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record every call so tests can verify what reached the "origin".

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::TimelineEntry;
use crate::domain::ports::{MastodonClient, NewReply};
use crate::error::MastodonError;

/// A call received by the mock client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    HomeTimeline,
    Favourite(String),
    Reblog(String),
    Reply(NewReply),
}

/// A mock Mastodon client that tracks calls and returns configurable responses
#[derive(Default)]
pub struct MockMastodonClient {
    timeline: Vec<TimelineEntry>,
    /// When set, every call fails with this upstream status and body
    failure: Option<(u16, String)>,
    calls: Arc<RwLock<Vec<MockCall>>>,
}

impl MockMastodonClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the origin answered `status` with `body`
    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            failure: Some((status, body.to_string())),
            ..Self::default()
        }
    }

    /// Configure the entries returned by the home timeline
    pub fn with_timeline(mut self, entries: Vec<TimelineEntry>) -> Self {
        self.timeline = entries;
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().unwrap().clone()
    }

    fn record(&self, call: MockCall) -> Result<(), MastodonError> {
        self.calls.write().unwrap().push(call);

        match &self.failure {
            Some((status, message)) => Err(MastodonError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MastodonClient for MockMastodonClient {
    async fn home_timeline(&self) -> Result<Vec<TimelineEntry>, MastodonError> {
        self.record(MockCall::HomeTimeline)?;
        Ok(self.timeline.clone())
    }

    async fn favourite(&self, status_id: &str) -> Result<(), MastodonError> {
        self.record(MockCall::Favourite(status_id.to_string()))
    }

    async fn reblog(&self, status_id: &str) -> Result<(), MastodonError> {
        self.record(MockCall::Reblog(status_id.to_string()))
    }

    async fn post_reply(&self, reply: &NewReply) -> Result<(), MastodonError> {
        self.record(MockCall::Reply(reply.clone()))
    }
}
