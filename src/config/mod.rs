// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the DevOps info service
//!
//! Loads `HOST`, `PORT` and `DEBUG` from environment variables (and `.env`).

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 5000;
    pub const DEBUG: bool = false;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    pub const DEBUG: &str = "DEBUG";
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            debug: defaults::DEBUG,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(env_vars::HOST)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| defaults::HOST.to_string());

        let port = match lookup(env_vars::PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::Config(format!("Invalid {} value '{}': {}", env_vars::PORT, raw, e))
            })?,
            None => defaults::PORT,
        };

        let debug = lookup(env_vars::DEBUG)
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults::DEBUG);

        Ok(Config { host, port, debug })
    }

    /// Address pair the HTTP listener binds to
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}
