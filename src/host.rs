// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Host and runtime facts read from the operating system
//!
//! Facts are read on every request without caching. A fact the OS cannot
//! provide degrades to an empty string instead of failing the response.

use serde::Serialize;

/// Source of host facts
pub trait HostInfoProvider: Send + Sync {
    fn hostname(&self) -> Option<String>;
    fn platform(&self) -> Option<String>;
    fn platform_version(&self) -> Option<String>;
    fn architecture(&self) -> Option<String>;
    fn cpu_count(&self) -> Option<usize>;
}

/// Reads host facts from the running system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostInfo;

impl HostInfoProvider for SystemHostInfo {
    fn hostname(&self) -> Option<String> {
        sysinfo::System::host_name()
    }

    fn platform(&self) -> Option<String> {
        sysinfo::System::name()
    }

    fn platform_version(&self) -> Option<String> {
        sysinfo::System::kernel_version()
    }

    fn architecture(&self) -> Option<String> {
        Some(std::env::consts::ARCH.to_string())
    }

    fn cpu_count(&self) -> Option<usize> {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .ok()
    }
}

/// Host section of the info payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
    pub architecture: String,
    pub cpu_count: usize,
    pub rust_version: String,
}

impl SystemInfo {
    pub fn collect(provider: &dyn HostInfoProvider) -> Self {
        SystemInfo {
            hostname: or_sentinel("hostname", provider.hostname()),
            platform: or_sentinel("platform", provider.platform()),
            platform_version: or_sentinel("platform_version", provider.platform_version()),
            architecture: or_sentinel("architecture", provider.architecture()),
            cpu_count: provider.cpu_count().filter(|&n| n > 0).unwrap_or(1),
            rust_version: env!("CARGO_PKG_RUST_VERSION").to_string(),
        }
    }
}

fn or_sentinel(field: &str, value: Option<String>) -> String {
    value.unwrap_or_else(|| {
        tracing::debug!("Host fact '{}' unavailable", field);
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyHost;

    impl HostInfoProvider for EmptyHost {
        fn hostname(&self) -> Option<String> {
            None
        }
        fn platform(&self) -> Option<String> {
            None
        }
        fn platform_version(&self) -> Option<String> {
            None
        }
        fn architecture(&self) -> Option<String> {
            None
        }
        fn cpu_count(&self) -> Option<usize> {
            Some(0)
        }
    }

    #[test]
    fn test_unavailable_facts_degrade_to_empty_strings() {
        let info = SystemInfo::collect(&EmptyHost);
        assert_eq!(info.hostname, "");
        assert_eq!(info.platform, "");
        assert_eq!(info.platform_version, "");
        assert_eq!(info.architecture, "");
    }

    #[test]
    fn test_zero_cpu_count_floors_to_one() {
        let info = SystemInfo::collect(&EmptyHost);
        assert_eq!(info.cpu_count, 1);
    }

    #[test]
    fn test_system_host_info() {
        let info = SystemInfo::collect(&SystemHostInfo);
        assert!(info.cpu_count >= 1);
        assert_eq!(info.architecture, std::env::consts::ARCH);
        assert_eq!(info.rust_version, "1.85");
    }
}
