//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the server-rendered chat page at `/` and the static folder
//! (including the client's `wasm-bindgen` bundle) under `/static`.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use client::app::{PageOptions, render_page};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    page: Arc<PageOptions>,
}

/// Build the application router from server config.
pub fn app(config: &ServerConfig) -> Router {
    let state = AppState { page: Arc::new(config.page.clone()) };

    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the chat page with an empty banner and message list.
async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(state.page.as_ref().clone()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
