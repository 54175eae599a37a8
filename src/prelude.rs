// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use devops_info_service::prelude::*;
//! ```

// Core types
pub use crate::clock::StartupClock;
pub use crate::config::Config;
pub use crate::error::{AppError, Result};
pub use crate::host::{HostInfoProvider, SystemHostInfo};

// Payload builders
pub use crate::service::{
    EndpointDescriptor, HealthResponder, HealthStatus, InfoResponder, RequestInfo,
    ServiceInfoPayload,
};
