//! Unified error types for the feed server
//!
//! This module defines error types for each layer:
//! - `ConfigError`: Startup configuration errors (fatal)
//! - `MastodonError`: Mastodon API client errors
//! - `AppError`: Application layer errors (mapped to HTTP responses)

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Configuration errors - the process does not serve when one occurs
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Mastodon API client errors
#[derive(Debug, Error)]
pub enum MastodonError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{message} (status {status})")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl MastodonError {
    /// Upstream HTTP status, when the origin answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            MastodonError::Api { status, .. } => Some(*status),
            MastodonError::Request(e) => e.status().map(|s| s.as_u16()),
            MastodonError::Deserialization(_) => None,
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Upstream(#[from] MastodonError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Upstream(e) => {
                tracing::error!("Upstream error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Render(e) => {
                tracing::error!("Render error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}\n", self),
        )
            .into_response()
    }
}
