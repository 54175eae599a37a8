// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Handlers for requests that match no route or no method

use axum::{
    Json,
    http::{HeaderValue, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::service::{allowed_methods, build_method_not_allowed, build_not_found};

/// Unknown path: 404 with the list of available endpoints
pub async fn not_found(method: Method, uri: Uri) -> Response {
    tracing::warn!("Not found: {} {}", method, uri.path());

    (StatusCode::NOT_FOUND, Json(build_not_found(uri.path()))).into_response()
}

/// Known path, unsupported method: 405 with the accepted methods
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    let path = uri.path();
    let Some(allowed) = allowed_methods(path) else {
        // Route table and endpoint table disagree; treat as unknown path
        return not_found(method, uri).await;
    };
    tracing::warn!("Method not allowed: {} {}", method, path);

    let allow = HeaderValue::from_str(&allowed.join(", "))
        .unwrap_or_else(|_| HeaderValue::from_static("GET"));
    let payload = build_method_not_allowed(method.as_str(), path, allowed);

    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, allow)],
        Json(payload),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_status() {
        let response = not_found(Method::GET, Uri::from_static("/missing")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_method_not_allowed_sets_allow_header() {
        let response = method_not_allowed(Method::DELETE, Uri::from_static("/health")).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET");
    }

    #[tokio::test]
    async fn test_method_not_allowed_on_unknown_path_is_not_found() {
        let response = method_not_allowed(Method::POST, Uri::from_static("/other")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
