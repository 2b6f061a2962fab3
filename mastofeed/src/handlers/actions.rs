//! Action proxy handlers
//!
//! POST-only JSON endpoints used by the buttons on the HTML feed.
//! Client errors (missing post id, malformed body) are answered locally
//! and never reach the origin instance.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::Action;
use crate::error::AppError;
use crate::AppState;

/// JSON envelope returned by every action endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request body for POST /api/reply/:post_id
#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    #[serde(default)]
    pub text: String,
}

fn require_post_id(post_id: &str) -> Result<String, AppError> {
    let post_id = post_id.trim();
    if post_id.is_empty() {
        return Err(AppError::BadRequest("Post ID required".to_string()));
    }
    Ok(post_id.to_string())
}

async fn perform(state: &AppState, action: Action) -> Response {
    match state.action_service.perform(&action).await {
        Ok(kind) => Json(ActionResponse {
            success: true,
            action: Some(kind.past_tense().to_string()),
            error: None,
        })
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ActionResponse {
                success: false,
                action: None,
                error: Some(format!("failed to {} post: {}", action.kind().verb(), e)),
            }),
        )
            .into_response(),
    }
}

/// POST /api/like/:post_id
pub async fn post_like(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Response, AppError> {
    let post_id = require_post_id(&post_id)?;
    Ok(perform(&state, Action::Like { post_id }).await)
}

/// POST /api/boost/:post_id
pub async fn post_boost(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Response, AppError> {
    let post_id = require_post_id(&post_id)?;
    Ok(perform(&state, Action::Boost { post_id }).await)
}

/// POST /api/reply/:post_id
///
/// Body: `{"text": "..."}`. The text is forwarded unvalidated, even when empty.
pub async fn post_reply(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    let post_id = require_post_id(&post_id)?;
    let request: ReplyRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON: {}", e)))?;

    Ok(perform(
        &state,
        Action::Reply {
            post_id,
            text: request.text,
        },
    )
    .await)
}

/// POST /api/{like,boost,reply}/ with nothing after the slash
pub async fn missing_post_id() -> AppError {
    AppError::BadRequest("Post ID required".to_string())
}
