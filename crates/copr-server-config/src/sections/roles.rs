// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Role display name configuration.
//!
//! Levels are fixed; only the names shown to users can be changed.

use copr_server_auth::RoleLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RolesConfigLayer {
	pub guest: Option<String>,
	pub reader: Option<String>,
	pub editor: Option<String>,
	pub admin: Option<String>,
}

impl RolesConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.guest.is_some() {
			self.guest = other.guest;
		}
		if other.reader.is_some() {
			self.reader = other.reader;
		}
		if other.editor.is_some() {
			self.editor = other.editor;
		}
		if other.admin.is_some() {
			self.admin = other.admin;
		}
	}

	pub fn finalize(self) -> RolesConfig {
		let name = |value: Option<String>, level: RoleLevel| {
			value.unwrap_or_else(|| level.default_display_name().to_string())
		};
		RolesConfig {
			guest: name(self.guest, RoleLevel::Guest),
			reader: name(self.reader, RoleLevel::Reader),
			editor: name(self.editor, RoleLevel::Editor),
			admin: name(self.admin, RoleLevel::Admin),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RolesConfig {
	pub guest: String,
	pub reader: String,
	pub editor: String,
	pub admin: String,
}

impl Default for RolesConfig {
	fn default() -> Self {
		RolesConfigLayer::default().finalize()
	}
}

impl RolesConfig {
	pub fn display_name(&self, level: RoleLevel) -> &str {
		match level {
			RoleLevel::Guest => &self.guest,
			RoleLevel::Reader => &self.reader,
			RoleLevel::Editor => &self.editor,
			RoleLevel::Admin => &self.admin,
		}
	}
}
