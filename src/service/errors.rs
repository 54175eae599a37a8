// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Structured payloads for unmatched routes and methods

use serde::Serialize;

use super::endpoints::{ENDPOINTS, EndpointDescriptor};

/// Body of a 404 response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    pub message: String,
    pub available_endpoints: &'static [EndpointDescriptor],
}

/// Body of a 405 response
#[derive(Debug, Clone, Serialize)]
pub struct MethodNotAllowedPayload {
    pub error: String,
    pub message: String,
    pub allowed_methods: Vec<&'static str>,
}

pub fn build_not_found(requested_path: &str) -> ErrorPayload {
    ErrorPayload {
        error: format!("Not Found: {}", requested_path),
        message: format!("The requested endpoint {} does not exist", requested_path),
        available_endpoints: ENDPOINTS,
    }
}

pub fn build_method_not_allowed(
    method: &str,
    path: &str,
    allowed_methods: Vec<&'static str>,
) -> MethodNotAllowedPayload {
    MethodNotAllowedPayload {
        error: "Method Not Allowed".to_string(),
        message: format!(
            "Method {} is not supported on {}; use {}",
            method,
            path,
            allowed_methods.join(", ")
        ),
        allowed_methods,
    }
}
