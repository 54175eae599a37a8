// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Service information payload (`GET /`)

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use super::endpoints::{ENDPOINTS, EndpointDescriptor};
use super::request::RequestInfo;
use crate::clock::{StartupClock, format_timestamp};
use crate::host::{HostInfoProvider, SystemInfo};

/// Static service metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub framework: &'static str,
}

pub const SERVICE_INFO: ServiceInfo = ServiceInfo {
    name: "devops-info-service",
    version: env!("CARGO_PKG_VERSION"),
    description: "DevOps course info service",
    framework: "axum",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeInfo {
    pub uptime_seconds: u64,
    pub uptime_human: String,
    pub current_time: String,
    pub timezone: &'static str,
}

/// Body of `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoPayload {
    pub service: ServiceInfo,
    pub system: SystemInfo,
    pub runtime: RuntimeInfo,
    pub request: RequestInfo,
    pub endpoints: &'static [EndpointDescriptor],
}

/// Builds the service information payload
#[derive(Clone)]
pub struct InfoResponder {
    clock: Arc<StartupClock>,
    host: Arc<dyn HostInfoProvider>,
}

impl InfoResponder {
    pub fn new(clock: Arc<StartupClock>, host: Arc<dyn HostInfoProvider>) -> Self {
        Self { clock, host }
    }

    pub fn build_info(&self, request: RequestInfo) -> ServiceInfoPayload {
        self.build_info_at(request, self.clock.now())
    }

    /// Same as [`build_info`](Self::build_info) with an explicit current time
    pub fn build_info_at(&self, request: RequestInfo, now: DateTime<Utc>) -> ServiceInfoPayload {
        let uptime = self.clock.uptime(now);

        ServiceInfoPayload {
            service: SERVICE_INFO,
            system: SystemInfo::collect(self.host.as_ref()),
            runtime: RuntimeInfo {
                uptime_seconds: uptime.seconds,
                uptime_human: uptime.human,
                current_time: format_timestamp(now),
                timezone: "UTC",
            },
            request,
            endpoints: ENDPOINTS,
        }
    }
}
