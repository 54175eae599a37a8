// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Facts about the inbound request

use axum::extract::ConnectInfo;
use axum::http::{Request, header};
use serde::Serialize;
use std::net::SocketAddr;

/// Shown when the peer address was not recorded by the server
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Request section of the info payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestInfo {
    pub client_ip: String,
    pub user_agent: String,
    pub method: String,
    pub path: String,
}

impl RequestInfo {
    /// Extracts request facts; absent values become placeholders, never errors
    pub fn from_request<B>(request: &Request<B>) -> Self {
        let client_ip = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| UNKNOWN_CLIENT.to_string());

        let user_agent = request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        RequestInfo {
            client_ip,
            user_agent,
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
        }
    }
}
