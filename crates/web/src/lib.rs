//! Zorglog Web library.
//!
//! This crate provides the care-facility front-end as a library, allowing it
//! to be tested end-to-end and reused.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Askama templates for server-side rendering
//! - Upstream care API (GraphQL) for all domain data
//! - tower-sessions for the per-browser credential store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, routing::get};

use middleware::create_session_layer;
use state::AppState;

/// Assemble the application: routes, health check, and session layer.
///
/// The binary adds tracing and Sentry layers on top; tests serve this
/// directly.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(session_layer)
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
