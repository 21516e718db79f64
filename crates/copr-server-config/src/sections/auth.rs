// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization configuration.

use copr_server_auth::{DenialSettings, RoleLevel, DEFAULT_DENIED_MESSAGE, DEFAULT_ROLE_LEVEL};
use http::StatusCode;
use serde::Deserialize;

/// Status returned when a policy refuses a request.
pub const DEFAULT_DENIED_STATUS: u16 = 403;

/// Authorization configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
	pub environment: String,
	/// Role assigned to newly created actors.
	pub default_role: RoleLevel,
	/// 401 or 403; checked by `validate_config`.
	pub denied_status: u16,
	pub denied_message: String,
}

impl Default for AuthConfig {
	fn default() -> Self {
		Self {
			environment: "development".to_string(),
			default_role: DEFAULT_ROLE_LEVEL,
			denied_status: DEFAULT_DENIED_STATUS,
			denied_message: DEFAULT_DENIED_MESSAGE.to_string(),
		}
	}
}

impl AuthConfig {
	/// How the authorization gate presents a denial.
	pub fn denial_settings(&self) -> DenialSettings {
		let status = match self.denied_status {
			401 => StatusCode::UNAUTHORIZED,
			_ => StatusCode::FORBIDDEN,
		};
		DenialSettings::new(status, self.denied_message.clone())
	}
}

/// Authorization configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfigLayer {
	#[serde(default)]
	pub environment: Option<String>,
	#[serde(default)]
	pub default_role: Option<RoleLevel>,
	#[serde(default)]
	pub denied_status: Option<u16>,
	#[serde(default)]
	pub denied_message: Option<String>,
}

impl AuthConfigLayer {
	pub fn merge(&mut self, other: AuthConfigLayer) {
		if other.environment.is_some() {
			self.environment = other.environment;
		}
		if other.default_role.is_some() {
			self.default_role = other.default_role;
		}
		if other.denied_status.is_some() {
			self.denied_status = other.denied_status;
		}
		if other.denied_message.is_some() {
			self.denied_message = other.denied_message;
		}
	}

	pub fn finalize(self) -> AuthConfig {
		AuthConfig {
			environment: self
				.environment
				.unwrap_or_else(|| "development".to_string()),
			default_role: self.default_role.unwrap_or(DEFAULT_ROLE_LEVEL),
			denied_status: self.denied_status.unwrap_or(DEFAULT_DENIED_STATUS),
			denied_message: self
				.denied_message
				.unwrap_or_else(|| DEFAULT_DENIED_MESSAGE.to_string()),
		}
	}
}
