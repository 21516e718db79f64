// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration error types.

use std::path::PathBuf;

/// Why the server configuration could not be loaded.
///
/// `key` is either a `COPR_SERVER_*` variable or a `section.field` path in
/// the TOML file, whichever the bad value came from.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// A value that does not parse or lies outside its allowed set.
	#[error("invalid setting {key}: {reason}")]
	InvalidSetting { key: String, reason: String },

	/// A value that parses but would weaken authorization.
	#[error("refusing setting {key}: {reason}")]
	UnsafeSetting { key: String, reason: String },

	#[error("config file {path} is not valid TOML: {source}")]
	MalformedFile {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("cannot read config file {path}: {source}")]
	Unreadable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl ConfigError {
	/// The offending setting, when the error is about a single value.
	pub fn key(&self) -> Option<&str> {
		match self {
			ConfigError::InvalidSetting { key, .. } | ConfigError::UnsafeSetting { key, .. } => {
				Some(key)
			}
			ConfigError::MalformedFile { .. } | ConfigError::Unreadable { .. } => None,
		}
	}
}
