//! Debug page handler

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::feed::render_debug;
use crate::AppState;

/// GET /debug
///
/// Informational only: shows how home-instance links are constructed.
pub async fn get_debug(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = render_debug(&state.home_instance)?;

    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], body).into_response())
}
