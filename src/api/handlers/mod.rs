// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod docs;
mod fallback;
mod health;
mod info;

pub use docs::{docs_page, openapi_spec};
pub use fallback::{method_not_allowed, not_found};
pub use health::health_check;
pub use info::service_info;
