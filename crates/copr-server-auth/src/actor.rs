// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The authenticated user a decision is made for.

use serde::{Deserialize, Serialize};

use crate::types::{Role, RoleLevel, UserId};

/// An authenticated user as seen by the policies.
///
/// Supplied by the authentication collaborator. Every actor carries exactly one
/// role; the role comparisons below read nothing but `role.level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
	pub id: UserId,
	pub username: String,
	pub role: Role,
	pub is_active: bool,
}

impl Actor {
	/// Creates an active actor.
	pub fn new(id: UserId, username: impl Into<String>, role: Role) -> Self {
		Self {
			id,
			username: username.into(),
			role,
			is_active: true,
		}
	}

	/// Builder: replace the role.
	pub fn with_role(mut self, role: Role) -> Self {
		self.role = role;
		self
	}

	/// Builder: mark the account inactive.
	pub fn deactivated(mut self) -> Self {
		self.is_active = false;
		self
	}

	/// The actor's role level.
	pub fn level(&self) -> RoleLevel {
		self.role.level
	}

	/// Returns true if the actor's role is exactly `level`.
	pub fn has_exact_role(&self, level: RoleLevel) -> bool {
		self.level() == level
	}

	/// Returns true if the actor's role ranks strictly above `level`.
	pub fn has_higher_role_than(&self, level: RoleLevel) -> bool {
		self.level() > level
	}

	/// Returns true if the actor's role is `level` or ranks above it.
	pub fn has_role_or_higher(&self, level: RoleLevel) -> bool {
		self.level() >= level
	}

	/// Returns true if the actor's role ranks strictly below `level`.
	pub fn has_lower_role_than(&self, level: RoleLevel) -> bool {
		self.level() < level
	}

	/// Returns true if the actor's role is `level` or ranks below it.
	pub fn has_role_or_lower(&self, level: RoleLevel) -> bool {
		self.level() <= level
	}
}
