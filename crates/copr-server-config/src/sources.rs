// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use copr_server_auth::RoleLevel;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{AuthConfigLayer, LoggingConfigLayer, RolesConfigLayer};

/// Default system-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/copr/server.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::Unreadable {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::MalformedFile {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: COPR_SERVER_<SECTION>_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		load_layer(&env_var)
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Builds a layer from a variable lookup, so tests need not touch the process environment.
fn load_layer(env: &dyn Fn(&str) -> Option<String>) -> Result<ServerConfigLayer, ConfigError> {
	Ok(ServerConfigLayer {
		auth: Some(load_auth(env)?),
		roles: Some(load_roles(env)),
		logging: Some(load_logging(env)),
	})
}

fn parse_u16(env: &dyn Fn(&str) -> Option<String>, name: &str) -> Result<Option<u16>, ConfigError> {
	match env(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidSetting {
			key: name.to_string(),
			reason: format!("invalid u16 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn parse_role(
	env: &dyn Fn(&str) -> Option<String>,
	name: &str,
) -> Result<Option<RoleLevel>, ConfigError> {
	match env(name) {
		Some(v) => v.parse().map(Some).map_err(|e| ConfigError::InvalidSetting {
			key: name.to_string(),
			reason: format!("{e}"),
		}),
		None => Ok(None),
	}
}

fn load_auth(env: &dyn Fn(&str) -> Option<String>) -> Result<AuthConfigLayer, ConfigError> {
	Ok(AuthConfigLayer {
		environment: env("COPR_SERVER_ENV"),
		default_role: parse_role(env, "COPR_SERVER_AUTH_DEFAULT_ROLE")?,
		denied_status: parse_u16(env, "COPR_SERVER_AUTH_DENIED_STATUS")?,
		denied_message: env("COPR_SERVER_AUTH_DENIED_MESSAGE"),
	})
}

fn load_roles(env: &dyn Fn(&str) -> Option<String>) -> RolesConfigLayer {
	RolesConfigLayer {
		guest: env("COPR_SERVER_ROLE_GUEST_NAME"),
		reader: env("COPR_SERVER_ROLE_READER_NAME"),
		editor: env("COPR_SERVER_ROLE_EDITOR_NAME"),
		admin: env("COPR_SERVER_ROLE_ADMIN_NAME"),
	}
}

fn load_logging(env: &dyn Fn(&str) -> Option<String>) -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env("COPR_SERVER_LOG_LEVEL"),
	}
}
