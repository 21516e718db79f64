// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core type definitions for authorization.
//!
//! This module defines the foundational types used throughout the auth system:
//!
//! - **ID newtypes**: Type-safe wrappers around UUIDs for the catalog entities
//!   ([`UserId`], [`ProblemId`], [`SuggestionId`], etc.) preventing accidental mixing
//! - **Role levels**: The totally ordered [`RoleLevel`] ladder and the [`Role`] entity
//!   carrying it
//!
//! All ID types implement transparent serde serialization (as UUID strings) and
//! provide conversion to/from [`uuid::Uuid`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

// =============================================================================
// ID Newtypes
// =============================================================================

macro_rules! define_id_type {
	($name:ident, $doc:expr) => {
		#[doc = $doc]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(Uuid);

		impl $name {
			/// Create a new ID from a UUID.
			pub fn new(id: Uuid) -> Self {
				Self(id)
			}

			/// Generate a new random ID.
			pub fn generate() -> Self {
				Self(Uuid::new_v4())
			}

			/// Get the inner UUID value.
			pub fn into_inner(self) -> Uuid {
				self.0
			}

			/// Get a reference to the inner UUID.
			pub fn as_uuid(&self) -> &Uuid {
				&self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}", self.0)
			}
		}

		impl From<Uuid> for $name {
			fn from(id: Uuid) -> Self {
				Self(id)
			}
		}

		impl From<$name> for Uuid {
			fn from(id: $name) -> Self {
				id.0
			}
		}
	};
}

define_id_type!(UserId, "Unique identifier for a user.");
define_id_type!(ProblemId, "Unique identifier for a problem.");
define_id_type!(SuggestionId, "Unique identifier for an improvement suggestion.");
define_id_type!(EventId, "Unique identifier for a contest event.");
define_id_type!(TagId, "Unique identifier for a tag.");

// =============================================================================
// Role Levels
// =============================================================================

/// Rank of a role. Levels are distinct and totally ordered; every role
/// comparison is derived from [`RoleLevel::value`].
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum RoleLevel {
	/// Unregistered visitor.
	#[serde(alias = "convidado")]
	Guest = 0,
	/// Registered user. Can create and vote on suggestions.
	#[serde(alias = "leitor")]
	Reader = 1,
	/// Can upload problems and curate tags and events.
	Editor = 2,
	/// Bypasses every policy.
	#[serde(alias = "administrador")]
	Admin = 3,
}

impl RoleLevel {
	/// Every level, lowest first.
	pub const ALL: [RoleLevel; 4] = [
		RoleLevel::Guest,
		RoleLevel::Reader,
		RoleLevel::Editor,
		RoleLevel::Admin,
	];

	/// Returns all levels, lowest first.
	pub fn all() -> &'static [RoleLevel] {
		&Self::ALL
	}

	/// The numeric rank of this level.
	pub fn value(self) -> u8 {
		self as u8
	}

	/// Looks up a level by its numeric rank.
	pub fn from_value(value: u8) -> Option<RoleLevel> {
		Self::ALL.iter().copied().find(|level| level.value() == value)
	}

	/// Stable identifier used in configuration and logs.
	pub fn as_str(self) -> &'static str {
		match self {
			RoleLevel::Guest => "guest",
			RoleLevel::Reader => "reader",
			RoleLevel::Editor => "editor",
			RoleLevel::Admin => "admin",
		}
	}

	/// Display name the role is seeded with.
	pub fn default_display_name(self) -> &'static str {
		match self {
			RoleLevel::Guest => "Convidado",
			RoleLevel::Reader => "Leitor",
			RoleLevel::Editor => "Editor",
			RoleLevel::Admin => "Administrador",
		}
	}
}

impl fmt::Display for RoleLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

/// Error returned when a role identifier does not name any [`RoleLevel`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for RoleLevel {
	type Err = UnknownRole;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"guest" | "convidado" => Ok(RoleLevel::Guest),
			"reader" | "leitor" => Ok(RoleLevel::Reader),
			"editor" => Ok(RoleLevel::Editor),
			"admin" | "administrador" => Ok(RoleLevel::Admin),
			_ => Err(UnknownRole(s.to_string())),
		}
	}
}

// =============================================================================
// Role
// =============================================================================

/// A seeded role: a level plus the name shown to users.
///
/// Roles are immutable once seeded; ordinary request handling never creates
/// or edits them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
	pub level: RoleLevel,
	pub display_name: String,
}

impl Role {
	pub fn new(level: RoleLevel, display_name: impl Into<String>) -> Self {
		Self {
			level,
			display_name: display_name.into(),
		}
	}

	/// The role for `level` with its seeded display name.
	pub fn seeded(level: RoleLevel) -> Self {
		Self::new(level, level.default_display_name())
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.display_name, self.level)
	}
}
