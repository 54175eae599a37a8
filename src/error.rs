// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the DevOps info service

use thiserror::Error;

/// Main application error type
///
/// Only startup can fail. Per-request problems (unknown route, wrong method,
/// unreadable host facts) are answered with structured payloads instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
