// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User account access policy.

use crate::abac::{Override, Policy, ResourceKind, UserAbility, UserAttrs};
use crate::actor::Actor;
use crate::types::RoleLevel;

use super::admin_bypass;

/// Accounts are created by admins and otherwise only touched by their owner.
///
/// Unlike the ownership rules elsewhere there is no collection-level form:
/// without a target, a non-admin is refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserPolicy;

impl Policy for UserPolicy {
	type Ability = UserAbility;
	type Target = UserAttrs;

	const KIND: ResourceKind = ResourceKind::User;

	fn before(&self, actor: &Actor, _ability: UserAbility) -> Override {
		admin_bypass(actor)
	}

	fn check(&self, actor: &Actor, ability: UserAbility, target: Option<&UserAttrs>) -> bool {
		match ability {
			UserAbility::Read | UserAbility::ReadAny => true,
			UserAbility::Store => actor.has_exact_role(RoleLevel::Admin),
			UserAbility::Update
			| UserAbility::Delete
			| UserAbility::ForceDelete
			| UserAbility::Restore => target.is_some_and(|user| user.id == actor.id),
		}
	}
}
