// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Static table of advertised endpoints

use serde::Serialize;

/// Metadata describing one available route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndpointDescriptor {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

pub const INFO_PATH: &str = "/";
pub const HEALTH_PATH: &str = "/health";
pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Every route the service answers, in advertised order
pub const ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor {
        path: INFO_PATH,
        method: "GET",
        description: "Service information",
    },
    EndpointDescriptor {
        path: HEALTH_PATH,
        method: "GET",
        description: "Health check",
    },
    EndpointDescriptor {
        path: DOCS_PATH,
        method: "GET",
        description: "API documentation",
    },
    EndpointDescriptor {
        path: OPENAPI_PATH,
        method: "GET",
        description: "OpenAPI specification",
    },
];

/// Methods accepted on `path`, or `None` if the path is unknown
pub fn allowed_methods(path: &str) -> Option<Vec<&'static str>> {
    let methods: Vec<&'static str> = ENDPOINTS
        .iter()
        .filter(|e| e.path == path)
        .map(|e| e.method)
        .collect();

    if methods.is_empty() { None } else { Some(methods) }
}
