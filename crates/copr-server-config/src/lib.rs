// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the CoPR authorization subsystem.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`COPR_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use copr_server_config::load_config;
//!
//! let config = load_config()?;
//! let catalog = config.role_catalog();
//! println!("new users start as {}", catalog.default_role());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, SYSTEM_CONFIG_PATH,
};

use copr_server_auth::{DenialSettings, RoleCatalog, RoleLevel};
use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerConfig {
	pub auth: AuthConfig,
	pub roles: RolesConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// The seeded roles with configured display names and default role applied.
	pub fn role_catalog(&self) -> RoleCatalog {
		RoleLevel::all()
			.iter()
			.fold(RoleCatalog::seeded(), |catalog, level| {
				catalog.with_display_name(*level, self.roles.display_name(*level))
			})
			.with_default_level(self.auth.default_role)
	}

	/// How authorization gates present a denial.
	pub fn denial_settings(&self) -> DenialSettings {
		self.auth.denial_settings()
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`COPR_SERVER_*`)
/// 2. Config file (`/etc/copr/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(EnvSource)];
	load_from_sources(sources)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
pub fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let auth = layer.auth.unwrap_or_default().finalize();
	let roles = layer.roles.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&auth, &roles)?;

	info!(
		environment = %auth.environment,
		default_role = %auth.default_role,
		denied_status = auth.denied_status,
		log_level = %logging.level,
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		auth,
		roles,
		logging,
	})
}

/// Validate cross-field configuration rules.
pub fn validate_config(auth: &AuthConfig, roles: &RolesConfig) -> Result<(), ConfigError> {
	if auth.default_role == RoleLevel::Admin {
		return Err(ConfigError::UnsafeSetting {
			key: "auth.default_role".to_string(),
			reason: "admin would make every new account an administrator; choose guest, reader or editor"
				.to_string(),
		});
	}

	if !matches!(auth.denied_status, 401 | 403) {
		return Err(ConfigError::InvalidSetting {
			key: "auth.denied_status".to_string(),
			reason: format!("must be 401 or 403, got {}", auth.denied_status),
		});
	}

	if auth.denied_message.trim().is_empty() {
		return Err(ConfigError::InvalidSetting {
			key: "auth.denied_message".to_string(),
			reason: "must not be empty".to_string(),
		});
	}

	for level in RoleLevel::all() {
		if roles.display_name(*level).trim().is_empty() {
			return Err(ConfigError::InvalidSetting {
				key: format!("roles.{}", level.as_str()),
				reason: "display name must not be empty".to_string(),
			});
		}
	}

	Ok(())
}
