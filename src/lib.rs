// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # DevOps Info Service
//!
//! Minimal HTTP service reporting service metadata, host facts, uptime and
//! liveness for operators and orchestration tooling.
//!
//! ## Main modules
//! - `api`: HTTP router and handlers
//! - `clock`: process start time and uptime
//! - `config`: configuration management
//! - `error`: error types
//! - `host`: host facts read from the operating system
//! - `service`: payload builders for each endpoint
//! - `prelude`: commonly used types and traits

mod api;
mod clock;
mod config;
mod error;
mod host;
pub mod prelude;
pub mod service;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Process start time and uptime formatting
pub use clock::{StartupClock, Uptime, format_timestamp, format_uptime};

/// Host facts
pub use host::{HostInfoProvider, SystemHostInfo, SystemInfo};

/// Endpoint table
pub use service::{ENDPOINTS, EndpointDescriptor};
