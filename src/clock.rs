// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Process start time and uptime calculation
//!
//! The clock is created once in `main` and shared read-only with every
//! handler through the application state.

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use serde::Serialize;
use std::time::Instant;

/// Records the instant the service started
#[derive(Debug, Clone)]
pub struct StartupClock {
    started_at: DateTime<Utc>,
    monotonic_start: Instant,
}

/// Uptime at a given moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Uptime {
    pub seconds: u64,
    pub human: String,
}

impl StartupClock {
    /// Captures the current time as the start instant
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Uses a fixed start instant.
    ///
    /// Only `started_at` is fixed: [`now`](Self::now) still advances from the
    /// moment of this call, so a clock "started 5s ago" reports about zero
    /// uptime through `now()` and the HTTP handlers. Pass an explicit time to
    /// [`elapsed_seconds`](Self::elapsed_seconds) or [`uptime`](Self::uptime)
    /// to simulate elapsed time.
    pub fn starting_at(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            monotonic_start: Instant::now(),
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Current time as seen by this process.
    ///
    /// Advances with the monotonic clock from `started_at`, so it never moves
    /// backwards even if the system wall clock is adjusted.
    pub fn now(&self) -> DateTime<Utc> {
        let elapsed = TimeDelta::from_std(self.monotonic_start.elapsed()).unwrap_or(TimeDelta::MAX);
        self.started_at
            .checked_add_signed(elapsed)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Whole seconds between start and `now`, clamped to zero on clock skew
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        let delta = now.signed_duration_since(self.started_at);
        if delta < TimeDelta::zero() {
            tracing::debug!(
                "Clock skew: now {} precedes start {}, reporting zero uptime",
                now,
                self.started_at
            );
            return 0;
        }
        delta.num_seconds() as u64
    }

    pub fn uptime(&self, now: DateTime<Utc>) -> Uptime {
        let seconds = self.elapsed_seconds(now);
        Uptime {
            seconds,
            human: format_uptime(seconds),
        }
    }
}

impl Default for StartupClock {
    fn default() -> Self {
        Self::new()
    }
}

/// `"{hours} hours, {minutes} minutes"`; hours do not roll over into days
pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{} hours, {} minutes", hours, minutes)
}

/// RFC 3339 with microseconds and an explicit `+00:00` offset
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}
