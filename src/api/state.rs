// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::clock::StartupClock;
use crate::host::HostInfoProvider;
use crate::service::{HealthResponder, InfoResponder};

/// Shared application state
///
/// Read-only once built. Both responders share the one startup clock.
pub struct AppState {
    pub info: InfoResponder,
    pub health: HealthResponder,
}

impl AppState {
    pub fn new(clock: StartupClock, host: Arc<dyn HostInfoProvider>) -> Self {
        let clock = Arc::new(clock);
        AppState {
            info: InfoResponder::new(clock.clone(), host),
            health: HealthResponder::new(clock),
        }
    }
}
