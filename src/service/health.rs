// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Health payload (`GET /health`)

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::clock::{StartupClock, format_timestamp};

/// Liveness status. The service only ever reports itself healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: HealthState,
    pub timestamp: String,
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct HealthResponder {
    clock: Arc<StartupClock>,
}

impl HealthResponder {
    pub fn new(clock: Arc<StartupClock>) -> Self {
        Self { clock }
    }

    pub fn build_health(&self) -> HealthStatus {
        self.build_health_at(self.clock.now())
    }

    pub fn build_health_at(&self, now: DateTime<Utc>) -> HealthStatus {
        HealthStatus {
            status: HealthState::Healthy,
            timestamp: format_timestamp(now),
            uptime_seconds: self.clock.elapsed_seconds(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    #[test]
    fn test_health_after_five_seconds() {
        let t0 = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let responder = HealthResponder::new(Arc::new(StartupClock::starting_at(t0)));

        let health = responder.build_health_at(t0 + TimeDelta::seconds(5));
        assert_eq!(health.status, HealthState::Healthy);
        assert_eq!(health.uptime_seconds, 5);
        assert_eq!(health.timestamp, "2025-06-01T00:00:05.000000+00:00");
    }

    #[test]
    fn test_serializes_status_as_healthy() {
        let responder = HealthResponder::new(Arc::new(StartupClock::new()));
        let json = serde_json::to_value(responder.build_health()).unwrap();
        assert_eq!(json["status"], "healthy");
        assert!(json["uptime_seconds"].is_u64());
        assert!(json["timestamp"].as_str().unwrap().ends_with("+00:00"));
    }

    #[test]
    fn test_uptime_is_non_decreasing() {
        let responder = HealthResponder::new(Arc::new(StartupClock::new()));
        let readings: Vec<u64> = (0..50)
            .map(|_| responder.build_health().uptime_seconds)
            .collect();
        assert!(readings.windows(2).all(|w| w[0] <= w[1]));
    }
}
