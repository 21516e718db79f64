// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The fixed set of roles seeded at process start.

use crate::types::{Role, RoleLevel};

/// Level assigned to newly created actors unless configured otherwise.
pub const DEFAULT_ROLE_LEVEL: RoleLevel = RoleLevel::Reader;

/// Every seeded role, indexed by level.
///
/// The catalog always holds exactly one role per [`RoleLevel`]; only display
/// names and the default level for new actors can vary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCatalog {
	roles: [Role; 4],
	default_level: RoleLevel,
}

impl Default for RoleCatalog {
	fn default() -> Self {
		Self::seeded()
	}
}

impl RoleCatalog {
	/// The seeded roles with their built-in display names.
	pub fn seeded() -> Self {
		Self {
			roles: RoleLevel::ALL.map(Role::seeded),
			default_level: DEFAULT_ROLE_LEVEL,
		}
	}

	/// Builder: override the display name for one level.
	pub fn with_display_name(mut self, level: RoleLevel, display_name: impl Into<String>) -> Self {
		self.roles[usize::from(level.value())].display_name = display_name.into();
		self
	}

	/// Builder: set the level new actors start at.
	pub fn with_default_level(mut self, level: RoleLevel) -> Self {
		self.default_level = level;
		self
	}

	/// Returns the role seeded for `level`.
	pub fn get(&self, level: RoleLevel) -> &Role {
		&self.roles[usize::from(level.value())]
	}

	/// Looks up a role by identifier (`reader`, `leitor`, ...).
	pub fn by_name(&self, name: &str) -> Option<&Role> {
		name.parse::<RoleLevel>().ok().map(|level| self.get(level))
	}

	/// The role assigned to an actor at creation.
	pub fn default_role(&self) -> &Role {
		self.get(self.default_level)
	}

	/// Iterates roles lowest level first.
	pub fn iter(&self) -> impl Iterator<Item = &Role> {
		self.roles.iter()
	}
}
