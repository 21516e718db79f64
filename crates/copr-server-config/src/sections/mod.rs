// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections for the authorization subsystem.

pub mod auth;
pub mod logging;
pub mod roles;

pub use auth::{AuthConfig, AuthConfigLayer, DEFAULT_DENIED_STATUS};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use roles::{RolesConfig, RolesConfigLayer};
