// Copyright 2026 HAC Gateway Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP boundary for the portal pipeline.
//!
//! Four POST endpoints, one per view, each accepting a JSON credential
//! payload. Every core failure is rendered as the same 401 rejection —
//! whether the password was wrong, the portal was down, or its markup
//! drifted is deliberately not revealed to callers. The kinds stay
//! apart in the logs.

use crate::config::Config;
use crate::error::PortalError;
use crate::model::{Credentials, View, ViewResponse};
use crate::pipeline;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared state for the REST handlers.
pub struct AppState {
    pub config: Config,
}

/// Build the axum Router with all endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(docs))
        .route("/health", get(health))
        .route("/api/info", post(handle_info))
        .route("/api/schedule", post(handle_schedule))
        .route("/api/currentclasses", post(handle_current_classes))
        .route("/api/all", post(handle_all))
        .layer(cors)
        .with_state(state)
}

/// Start the REST API server on the configured port.
pub async fn start(config: Config) -> anyhow::Result<()> {
    let port = config.port;
    let state = Arc::new(AppState { config });
    let app = router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("HAC gateway listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.cors_origins.iter().any(|origin| origin == "*") {
        base.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        base.allow_origin(origins)
    }
}

// ── Handlers ────────────────────────────────────────────────────

/// Serve the embedded API documentation page.
async fn docs() -> impl IntoResponse {
    Html(include_str!("docs.html"))
}

async fn health() -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn handle_info(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<Credentials>,
) -> Response {
    respond(pipeline::authenticate_and_fetch(&state.config, &credentials, View::Info).await)
}

async fn handle_schedule(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<Credentials>,
) -> Response {
    respond(pipeline::authenticate_and_fetch(&state.config, &credentials, View::Schedule).await)
}

async fn handle_current_classes(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<Credentials>,
) -> Response {
    respond(pipeline::authenticate_and_fetch(&state.config, &credentials, View::Classes).await)
}

async fn handle_all(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<Credentials>,
) -> Response {
    respond(pipeline::authenticate_and_fetch(&state.config, &credentials, View::All).await)
}

/// Normalize the pipeline result: success passes through as JSON, every
/// error kind collapses into one uniform rejection.
fn respond(result: Result<ViewResponse, PortalError>) -> Response {
    match result {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            tracing::warn!(kind = e.kind(), "request rejected: {e}");
            (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "detail": "Invalid credentials" })),
            )
                .into_response()
        }
    }
}
