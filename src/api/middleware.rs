// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Cross-cutting layers: CORS, panic recovery and request tracing

use axum::{
    Json, Router,
    extract::Request,
    http::{Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::any::Any;
use tower::{Layer, ServiceExt};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Body of a 500 response
#[derive(Debug, Serialize)]
pub struct InternalErrorPayload {
    pub error: &'static str,
    pub message: &'static str,
}

/// Wraps a fully routed application with the service middleware stack
pub fn apply(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(internal_error))
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
}

/// Permissive CORS for browsers.
///
/// Only a real preflight (`OPTIONS` with `Origin` and
/// `Access-Control-Request-Method`) is answered here; any other `OPTIONS`
/// goes through routing and gets the usual 404/405.
async fn cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS && !is_preflight(&request) {
        return next.run(request).await;
    }

    match CorsLayer::very_permissive().layer(next).oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    }
}

fn is_preflight(request: &Request) -> bool {
    let headers = request.headers();
    request.method() == Method::OPTIONS
        && headers.contains_key(header::ORIGIN)
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

fn internal_error(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!("Internal server error: {}", detail);

    let payload = InternalErrorPayload {
        error: "Internal Server Error",
        message: "An unexpected error occurred. Please try again later.",
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use http_body_util::BodyExt;

    fn app() -> Router {
        apply(
            Router::new()
                .route("/ok", get(|| async { "ok" }))
                .route("/boom", get(|| async { panic!("handler exploded") as () })),
        )
    }

    #[tokio::test]
    async fn test_panicking_handler_returns_json_500() {
        let resp = app()
            .oneshot(Request::get("/boom").body(axum::body::Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(
            body["message"],
            "An unexpected error occurred. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_cross_origin_get_gets_cors_headers() {
        let resp = app()
            .oneshot(
                Request::get("/ok")
                    .header(header::ORIGIN, "https://dashboard.example")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://dashboard.example"
        );
    }

    #[test]
    fn test_is_preflight() {
        let preflight = Request::builder()
            .method(Method::OPTIONS)
            .uri("/ok")
            .header(header::ORIGIN, "https://dashboard.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(axum::body::Body::empty())
            .unwrap();
        assert!(is_preflight(&preflight));

        let plain = Request::builder()
            .method(Method::OPTIONS)
            .uri("/ok")
            .header(header::ORIGIN, "https://dashboard.example")
            .body(axum::body::Body::empty())
            .unwrap();
        assert!(!is_preflight(&plain));
    }
}
