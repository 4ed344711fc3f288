//! Axum router wiring.
//!
//! Exposes a single `/metrics` scrape route; every other path falls through
//! to a 404 that does not touch the engine.

use axum::{routing::get, Router};

use crate::{app_state::AppState, scrape};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(scrape::metrics))
        .fallback(scrape::not_found)
        .with_state(state)
}
