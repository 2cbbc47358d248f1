//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the auth endpoints under `/auth` and serves the built
//! single-page client for every other path, falling back to `index.html` so
//! client-side routes like `/dashboard` resolve on reload.

pub mod auth;

use std::path::Path;

use axum::Router;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Auth API routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: API routes, SPA static files, request tracing, and CORS
/// when the client is served from a different origin.
pub fn app(state: AppState, static_dir: &Path, cors_origin: Option<HeaderValue>) -> Router {
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let router = api_routes(state)
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http());

    match cors_origin {
        Some(origin) => router.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_credentials(true)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        ),
        None => router,
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
