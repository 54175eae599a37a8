// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module for the DevOps info service
//!
//! Adapts HTTP requests to the payload builders in [`crate::service`].
//!
//! # Endpoints
//! - `GET /` — service, host, runtime and request information
//! - `GET /health` — health check
//! - `GET /docs` — HTML endpoint documentation
//! - `GET /openapi.json` — OpenAPI document
//!
//! Unknown paths answer 404, known paths with another method answer 405,
//! and a panicking handler answers a JSON 500.

pub mod handlers;
mod middleware;
mod state;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::service::endpoints::{DOCS_PATH, HEALTH_PATH, INFO_PATH, OPENAPI_PATH};

pub use state::AppState;

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .route(
            INFO_PATH,
            get(handlers::service_info).fallback(handlers::method_not_allowed),
        )
        .route(
            HEALTH_PATH,
            get(handlers::health_check).fallback(handlers::method_not_allowed),
        )
        .route(
            DOCS_PATH,
            get(handlers::docs_page).fallback(handlers::method_not_allowed),
        )
        .route(
            OPENAPI_PATH,
            get(handlers::openapi_spec).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .with_state(state);

    middleware::apply(routes)
}
