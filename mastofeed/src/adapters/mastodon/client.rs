//! Mastodon API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::domain::entities::TimelineEntry;
use crate::domain::ports::{MastodonClient, NewReply};
use crate::error::MastodonError;

/// Implementation of the Mastodon API client
pub struct MastodonClientImpl {
    http: Client,
    base_url: String,
    access_token: String,
}

impl MastodonClientImpl {
    pub fn new(
        base_url: String,
        access_token: String,
        timeout: Duration,
    ) -> Result<Self, MastodonError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Write endpoints only count a plain 200 as success
    async fn expect_ok(response: reqwest::Response) -> Result<(), MastodonError> {
        let status = response.status();

        if status == StatusCode::OK {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(MastodonError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn post_empty(&self, path: &str) -> Result<(), MastodonError> {
        let resp = self
            .http
            .post(self.api_url(path))
            .header("Authorization", self.bearer())
            .send()
            .await?;

        Self::expect_ok(resp).await
    }
}

#[async_trait]
impl MastodonClient for MastodonClientImpl {
    async fn home_timeline(&self) -> Result<Vec<TimelineEntry>, MastodonError> {
        let resp = self
            .http
            .get(self.api_url("/timelines/home"))
            .header("Authorization", self.bearer())
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(MastodonError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| MastodonError::Deserialization(e.to_string()))
    }

    async fn favourite(&self, status_id: &str) -> Result<(), MastodonError> {
        self.post_empty(&format!("/statuses/{}/favourite", urlencoding::encode(status_id)))
            .await
    }

    async fn reblog(&self, status_id: &str) -> Result<(), MastodonError> {
        self.post_empty(&format!("/statuses/{}/reblog", urlencoding::encode(status_id)))
            .await
    }

    async fn post_reply(&self, reply: &NewReply) -> Result<(), MastodonError> {
        let resp = self
            .http
            .post(self.api_url("/statuses"))
            .header("Authorization", self.bearer())
            .json(reply)
            .send()
            .await?;

        Self::expect_ok(resp).await
    }
}
