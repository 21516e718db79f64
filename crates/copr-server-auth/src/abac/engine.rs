// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Policy evaluation engine.
//!
//! This module contains the [`Policy`] contract, the generic [`evaluate`]
//! function and the [`PolicyRegistry`] that routes a [`Permission`] to the
//! policy for its resource kind. Evaluation is two-phase:
//!
//! 1. **Override hook**: the policy's `before` may grant or deny outright
//! 2. **Ability rule**: otherwise the rule for the requested ability decides
//!
//! All policy decisions are pure functions with no side effects, making them
//! easy to test and reason about.

use tracing::{debug, instrument};

use super::policies::{EventPolicy, ProblemPolicy, RolePolicy, SuggestionPolicy, TagPolicy, UserPolicy};
use super::types::{Ability, Override, Permission, ResourceKind, Target};
use crate::actor::Actor;
use crate::error::AuthzError;

/// A stateless rule set bound to one resource kind.
pub trait Policy: Send + Sync {
	/// The abilities this policy defines.
	type Ability: Ability;
	/// The instance type instance-level checks receive.
	type Target;

	/// The resource kind this policy guards.
	const KIND: ResourceKind;

	/// Cross-cutting rule evaluated before any ability rule.
	fn before(&self, _actor: &Actor, _ability: Self::Ability) -> Override {
		Override::Defer
	}

	/// The rule for one ability.
	///
	/// `None` asks whether the actor may attempt the action at all (route
	/// level). `Some` asks about this specific instance.
	fn check(&self, actor: &Actor, ability: Self::Ability, target: Option<&Self::Target>) -> bool;
}

/// Runs a policy's override hook, then its ability rule.
#[instrument(
	level = "debug",
	skip(policy, actor, target),
	fields(
		resource = %P::KIND,
		ability = %ability,
		actor_id = %actor.id,
		role = %actor.role.level,
	)
)]
pub fn evaluate<P: Policy>(
	policy: &P,
	actor: &Actor,
	ability: P::Ability,
	target: Option<&P::Target>,
) -> bool {
	if let Some(decision) = policy.before(actor, ability).decision() {
		debug!(allowed = decision, decided_by = "before", "authorization resolved");
		return decision;
	}

	let allowed = policy.check(actor, ability, target);
	debug!(
		allowed,
		decided_by = "ability",
		has_target = target.is_some(),
		"authorization resolved"
	);
	allowed
}

/// Maps every resource kind to its policy.
///
/// Constructed explicitly and passed to whoever needs decisions; there is no
/// process-wide registry.
#[derive(Debug, Clone, Default)]
pub struct PolicyRegistry {
	role: RolePolicy,
	problem: ProblemPolicy,
	suggestion: SuggestionPolicy,
	event: EventPolicy,
	tag: TagPolicy,
	user: UserPolicy,
}

impl PolicyRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Looks up a resource kind by name.
	pub fn lookup(&self, resource: &str) -> Result<ResourceKind, AuthzError> {
		resource.parse()
	}

	/// Ability names defined for `kind`.
	pub fn abilities(&self, kind: ResourceKind) -> Vec<&'static str> {
		kind.ability_names()
	}

	/// Every resource kind with its ability names.
	pub fn supported(&self) -> Vec<(ResourceKind, Vec<&'static str>)> {
		ResourceKind::all()
			.iter()
			.map(|kind| (*kind, kind.ability_names()))
			.collect()
	}

	/// Decides whether `actor` holds `permission`, optionally on `target`.
	///
	/// # Errors
	///
	/// Returns [`AuthzError::TargetMismatch`] if `target` belongs to a different
	/// resource kind than `permission`.
	pub fn resolve(
		&self,
		permission: Permission,
		actor: &Actor,
		target: Option<&Target>,
	) -> Result<bool, AuthzError> {
		if let Some(target) = target {
			let expected = permission.resource_kind();
			if target.kind() != expected {
				return Err(AuthzError::TargetMismatch {
					expected,
					found: target.kind(),
				});
			}
		}

		let allowed = match permission {
			Permission::Role(ability) => {
				evaluate(&self.role, actor, ability, target.and_then(Target::as_role))
			}
			Permission::Problem(ability) => evaluate(
				&self.problem,
				actor,
				ability,
				target.and_then(Target::as_problem),
			),
			Permission::Suggestion(ability) => evaluate(
				&self.suggestion,
				actor,
				ability,
				target.and_then(Target::as_suggestion),
			),
			Permission::Event(ability) => {
				evaluate(&self.event, actor, ability, target.and_then(Target::as_event))
			}
			Permission::Tag(ability) => {
				evaluate(&self.tag, actor, ability, target.and_then(Target::as_tag))
			}
			Permission::User(ability) => {
				evaluate(&self.user, actor, ability, target.and_then(Target::as_user))
			}
		};

		Ok(allowed)
	}

	/// Like [`resolve`](Self::resolve), but a denial becomes
	/// [`AuthzError::PermissionDenied`].
	pub fn authorize(
		&self,
		permission: Permission,
		actor: &Actor,
		target: Option<&Target>,
	) -> Result<(), AuthzError> {
		if self.resolve(permission, actor, target)? {
			Ok(())
		} else {
			Err(AuthzError::PermissionDenied {
				resource: permission.resource_kind(),
				ability: permission.ability_name(),
			})
		}
	}

	/// String-keyed [`resolve`](Self::resolve).
	pub fn resolve_named(
		&self,
		resource: &str,
		ability: &str,
		actor: &Actor,
		target: Option<&Target>,
	) -> Result<bool, AuthzError> {
		self.resolve(Permission::parse(resource, ability)?, actor, target)
	}

	/// String-keyed [`authorize`](Self::authorize).
	pub fn authorize_named(
		&self,
		resource: &str,
		ability: &str,
		actor: &Actor,
		target: Option<&Target>,
	) -> Result<(), AuthzError> {
		self.authorize(Permission::parse(resource, ability)?, actor, target)
	}
}
