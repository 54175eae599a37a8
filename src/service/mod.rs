// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Payload builders behind the HTTP endpoints
//!
//! Nothing here touches the network: every builder takes its inputs
//! explicitly and returns a serializable payload.

pub mod endpoints;
pub mod errors;
pub mod health;
pub mod info;
pub mod request;

pub use endpoints::{ENDPOINTS, EndpointDescriptor, allowed_methods};
pub use errors::{ErrorPayload, MethodNotAllowedPayload, build_method_not_allowed, build_not_found};
pub use health::{HealthResponder, HealthState, HealthStatus};
pub use info::{InfoResponder, RuntimeInfo, SERVICE_INFO, ServiceInfo, ServiceInfoPayload};
pub use request::RequestInfo;
