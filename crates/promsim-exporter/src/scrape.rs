//! Scrape endpoint handlers.
//!
//! - `/metrics` : advance the simulation one interval, expose the snapshot
//! - anything else : 404, no state mutation

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;

/// Content type of the text exposition format served here.
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.advance_and_render();
    tracing::info!(bytes = body.len(), "scrape served");

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
        body,
    )
        .into_response()
}

pub async fn not_found() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
