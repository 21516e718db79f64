// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Type definitions for policy evaluation.
//!
//! This module defines the core data structures the policies work on:
//!
//! - [`ResourceKind`]: The closed set of resource kinds that carry a policy
//! - Ability enums ([`ProblemAbility`], [`SuggestionAbility`], ...): the operations
//!   valid for one resource kind, so an unsupported pair cannot be written down
//! - [`Permission`]: A resource kind paired with one of its abilities
//! - Target attributes ([`ProblemAttrs`], [`SuggestionAttrs`], ...): the instance
//!   being acted on, with its ownership associations already loaded
//! - [`Override`]: The three-state result of a policy's `before` hook
//!
//! # Design Principles
//!
//! 1. **Immutable evaluation**: All attributes are loaded before policy evaluation
//! 2. **No storage access**: Policy functions are pure; all data is pre-loaded
//! 3. **Closed sets**: Resource kinds and abilities are enums, string names are
//!    parsed once at the edge

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AuthzError;
use crate::types::{EventId, ProblemId, RoleLevel, SuggestionId, TagId, UserId};

// =============================================================================
// Resource Kinds
// =============================================================================

/// Kinds of resources protected by a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
	Role,
	Problem,
	Suggestion,
	Event,
	Tag,
	User,
}

impl ResourceKind {
	/// Returns every resource kind.
	pub fn all() -> &'static [ResourceKind] {
		&[
			ResourceKind::Role,
			ResourceKind::Problem,
			ResourceKind::Suggestion,
			ResourceKind::Event,
			ResourceKind::Tag,
			ResourceKind::User,
		]
	}

	pub fn as_str(self) -> &'static str {
		match self {
			ResourceKind::Role => "role",
			ResourceKind::Problem => "problem",
			ResourceKind::Suggestion => "suggestion",
			ResourceKind::Event => "event",
			ResourceKind::Tag => "tag",
			ResourceKind::User => "user",
		}
	}

	/// Names of the abilities the policy for this kind defines.
	pub fn ability_names(self) -> Vec<&'static str> {
		fn names<A: Ability>() -> Vec<&'static str> {
			A::all().iter().map(|a| a.as_str()).collect()
		}

		match self {
			ResourceKind::Role => names::<RoleAbility>(),
			ResourceKind::Problem => names::<ProblemAbility>(),
			ResourceKind::Suggestion => names::<SuggestionAbility>(),
			ResourceKind::Event | ResourceKind::Tag => names::<CatalogAbility>(),
			ResourceKind::User => names::<UserAbility>(),
		}
	}
}

impl fmt::Display for ResourceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

impl FromStr for ResourceKind {
	type Err = AuthzError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"role" | "papel" => Ok(ResourceKind::Role),
			"problem" | "problema" => Ok(ResourceKind::Problem),
			"suggestion" | "sugestao" => Ok(ResourceKind::Suggestion),
			"event" | "evento" => Ok(ResourceKind::Event),
			"tag" => Ok(ResourceKind::Tag),
			"user" => Ok(ResourceKind::User),
			other => Err(AuthzError::UnknownResource(other.to_string())),
		}
	}
}

// =============================================================================
// Abilities
// =============================================================================

/// An operation defined by one resource kind's policy.
pub trait Ability: Copy + fmt::Debug + fmt::Display + Send + Sync + 'static {
	/// Every ability of this kind, in declaration order.
	fn all() -> &'static [Self];

	/// Canonical snake-case name.
	fn as_str(&self) -> &'static str;

	/// Looks up an ability by its canonical name or an accepted alias.
	fn from_name(name: &str) -> Option<Self>;
}

macro_rules! define_ability {
	(
		$(#[$meta:meta])*
		$name:ident {
			$( $(#[$vmeta:meta])* $variant:ident => $primary:literal $(| $alias:literal)* ),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(rename_all = "snake_case")]
		pub enum $name {
			$( $(#[$vmeta])* $variant ),+
		}

		impl Ability for $name {
			fn all() -> &'static [Self] {
				&[$($name::$variant),+]
			}

			fn as_str(&self) -> &'static str {
				match self {
					$($name::$variant => $primary),+
				}
			}

			fn from_name(name: &str) -> Option<Self> {
				match name {
					$($primary $(| $alias)* => Some($name::$variant),)+
					_ => None,
				}
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}
	};
}

define_ability!(
	/// Abilities on roles.
	RoleAbility {
		Store => "store",
		Update => "update",
		Delete => "delete",
		Read => "read",
		ReadAny => "read_any",
	}
);

define_ability!(
	/// Abilities on problems.
	ProblemAbility {
		Store => "store",
		Update => "update",
		Delete => "delete",
		Read => "read",
		ReadAny => "read_any",
	}
);

define_ability!(
	/// Abilities on improvement suggestions.
	SuggestionAbility {
		Store => "store",
		/// Cast or change a vote.
		Vote => "vote" | "votar",
		Update => "update",
		Delete => "delete",
		/// Accept or reject a suggestion; reserved to the problem's uploaders.
		UpdateStatus => "update_status",
		Read => "read",
		ReadAny => "read_any",
	}
);

define_ability!(
	/// Abilities shared by the curated catalog entities (tags and events).
	CatalogAbility {
		Store => "store",
		Update => "update",
		Delete => "delete",
		Read => "read",
		ReadAny => "read_any",
	}
);

define_ability!(
	/// Abilities on user accounts.
	UserAbility {
		Store => "store",
		Update => "update",
		Delete => "delete",
		ForceDelete => "force_delete",
		Restore => "restore",
		Read => "read",
		ReadAny => "read_any",
	}
);

// =============================================================================
// Permissions
// =============================================================================

/// A resource kind paired with one of its abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "resource", content = "ability", rename_all = "snake_case")]
pub enum Permission {
	Role(RoleAbility),
	Problem(ProblemAbility),
	Suggestion(SuggestionAbility),
	Event(CatalogAbility),
	Tag(CatalogAbility),
	User(UserAbility),
}

impl Permission {
	/// Parses a string-keyed `(resource, ability)` pair.
	///
	/// # Errors
	///
	/// Returns [`AuthzError::UnknownResource`] or [`AuthzError::UnknownAbility`];
	/// an unknown name is never treated as a denial.
	pub fn parse(resource: &str, ability: &str) -> Result<Self, AuthzError> {
		let kind: ResourceKind = resource.parse()?;
		Self::for_kind(kind, ability)
	}

	/// Resolves an ability name against an already known resource kind.
	pub fn for_kind(kind: ResourceKind, ability: &str) -> Result<Self, AuthzError> {
		fn lookup<A: Ability>(kind: ResourceKind, ability: &str) -> Result<A, AuthzError> {
			A::from_name(ability).ok_or_else(|| AuthzError::UnknownAbility {
				resource: kind,
				ability: ability.to_string(),
			})
		}

		Ok(match kind {
			ResourceKind::Role => Permission::Role(lookup(kind, ability)?),
			ResourceKind::Problem => Permission::Problem(lookup(kind, ability)?),
			ResourceKind::Suggestion => Permission::Suggestion(lookup(kind, ability)?),
			ResourceKind::Event => Permission::Event(lookup(kind, ability)?),
			ResourceKind::Tag => Permission::Tag(lookup(kind, ability)?),
			ResourceKind::User => Permission::User(lookup(kind, ability)?),
		})
	}

	pub fn resource_kind(&self) -> ResourceKind {
		match self {
			Permission::Role(_) => ResourceKind::Role,
			Permission::Problem(_) => ResourceKind::Problem,
			Permission::Suggestion(_) => ResourceKind::Suggestion,
			Permission::Event(_) => ResourceKind::Event,
			Permission::Tag(_) => ResourceKind::Tag,
			Permission::User(_) => ResourceKind::User,
		}
	}

	pub fn ability_name(&self) -> &'static str {
		match self {
			Permission::Role(a) => a.as_str(),
			Permission::Problem(a) => a.as_str(),
			Permission::Suggestion(a) => a.as_str(),
			Permission::Event(a) | Permission::Tag(a) => a.as_str(),
			Permission::User(a) => a.as_str(),
		}
	}
}

impl fmt::Display for Permission {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.resource_kind(), self.ability_name())
	}
}

// =============================================================================
// Targets
// =============================================================================

/// A problem with its uploaders loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemAttrs {
	pub id: ProblemId,
	pub uploaders: Vec<UserId>,
}

impl ProblemAttrs {
	/// Creates a problem with no uploaders.
	pub fn new(id: ProblemId) -> Self {
		Self {
			id,
			uploaders: Vec::new(),
		}
	}

	/// Builder: add an uploader.
	pub fn with_uploader(mut self, user_id: UserId) -> Self {
		self.uploaders.push(user_id);
		self
	}

	/// Returns true if `user_id` is one of the uploaders.
	pub fn is_uploaded_by(&self, user_id: UserId) -> bool {
		self.uploaders.contains(&user_id)
	}
}

/// A suggestion with its author and parent problem loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionAttrs {
	pub id: SuggestionId,
	pub author_id: UserId,
	pub problem: ProblemAttrs,
}

impl SuggestionAttrs {
	pub fn new(id: SuggestionId, author_id: UserId, problem: ProblemAttrs) -> Self {
		Self {
			id,
			author_id,
			problem,
		}
	}

	/// Returns true if `user_id` wrote this suggestion.
	pub fn is_authored_by(&self, user_id: UserId) -> bool {
		self.author_id == user_id
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttrs {
	pub id: EventId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagAttrs {
	pub id: TagId,
}

/// A user account as the object of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAttrs {
	pub id: UserId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAttrs {
	pub level: RoleLevel,
}

/// The specific instance an instance-level check is made against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
	Role(RoleAttrs),
	Problem(ProblemAttrs),
	Suggestion(SuggestionAttrs),
	Event(EventAttrs),
	Tag(TagAttrs),
	User(UserAttrs),
}

impl Target {
	pub fn kind(&self) -> ResourceKind {
		match self {
			Target::Role(_) => ResourceKind::Role,
			Target::Problem(_) => ResourceKind::Problem,
			Target::Suggestion(_) => ResourceKind::Suggestion,
			Target::Event(_) => ResourceKind::Event,
			Target::Tag(_) => ResourceKind::Tag,
			Target::User(_) => ResourceKind::User,
		}
	}

	pub fn as_role(&self) -> Option<&RoleAttrs> {
		match self {
			Target::Role(attrs) => Some(attrs),
			_ => None,
		}
	}

	pub fn as_problem(&self) -> Option<&ProblemAttrs> {
		match self {
			Target::Problem(attrs) => Some(attrs),
			_ => None,
		}
	}

	pub fn as_suggestion(&self) -> Option<&SuggestionAttrs> {
		match self {
			Target::Suggestion(attrs) => Some(attrs),
			_ => None,
		}
	}

	pub fn as_event(&self) -> Option<&EventAttrs> {
		match self {
			Target::Event(attrs) => Some(attrs),
			_ => None,
		}
	}

	pub fn as_tag(&self) -> Option<&TagAttrs> {
		match self {
			Target::Tag(attrs) => Some(attrs),
			_ => None,
		}
	}

	pub fn as_user(&self) -> Option<&UserAttrs> {
		match self {
			Target::User(attrs) => Some(attrs),
			_ => None,
		}
	}
}

impl From<RoleAttrs> for Target {
	fn from(attrs: RoleAttrs) -> Self {
		Target::Role(attrs)
	}
}

impl From<ProblemAttrs> for Target {
	fn from(attrs: ProblemAttrs) -> Self {
		Target::Problem(attrs)
	}
}

impl From<SuggestionAttrs> for Target {
	fn from(attrs: SuggestionAttrs) -> Self {
		Target::Suggestion(attrs)
	}
}

impl From<EventAttrs> for Target {
	fn from(attrs: EventAttrs) -> Self {
		Target::Event(attrs)
	}
}

impl From<TagAttrs> for Target {
	fn from(attrs: TagAttrs) -> Self {
		Target::Tag(attrs)
	}
}

impl From<UserAttrs> for Target {
	fn from(attrs: UserAttrs) -> Self {
		Target::User(attrs)
	}
}

// =============================================================================
// Override Hook Result
// =============================================================================

/// Result of a policy's `before` hook.
///
/// `Defer` means "no opinion" and hands the decision to the ability rule. It is
/// distinct from `Deny`, which ends resolution with a refusal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Override {
	Grant,
	Deny,
	Defer,
}

impl Override {
	/// The final decision, or `None` when the hook defers.
	pub fn decision(self) -> Option<bool> {
		match self {
			Override::Grant => Some(true),
			Override::Deny => Some(false),
			Override::Defer => None,
		}
	}
}

impl From<Option<bool>> for Override {
	fn from(decision: Option<bool>) -> Self {
		match decision {
			Some(true) => Override::Grant,
			Some(false) => Override::Deny,
			None => Override::Defer,
		}
	}
}
