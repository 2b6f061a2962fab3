//! Feed handlers
//!
//! Both feeds run the full pipeline on every request: fetch, normalize,
//! describe, render. Any upstream failure is a 500 with the error as text.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::domain::entities::OutputFormat;
use crate::error::AppError;
use crate::feed::{render_html, render_rss, Channel};
use crate::AppState;

/// GET /feed.rss
pub async fn get_rss_feed(State(state): State<AppState>) -> Result<Response, AppError> {
    let items = state.timeline_service.items(OutputFormat::Xml).await?;
    let body = render_rss(&Channel::home(&state.instance_url), &items)?;

    Ok(([(header::CONTENT_TYPE, "application/rss+xml")], body).into_response())
}

/// GET /feed.html
pub async fn get_html_feed(State(state): State<AppState>) -> Result<Response, AppError> {
    let items = state.timeline_service.items(OutputFormat::Html).await?;
    let body = render_html(&items, &state.home_instance)?;

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        body,
    )
        .into_response())
}
