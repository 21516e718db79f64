// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Role access policy. Roles are seeded, so only admins ever change them.

use crate::abac::{Override, Policy, ResourceKind, RoleAbility, RoleAttrs};
use crate::actor::Actor;

use super::admin_bypass;

#[derive(Debug, Clone, Copy, Default)]
pub struct RolePolicy;

impl Policy for RolePolicy {
	type Ability = RoleAbility;
	type Target = RoleAttrs;

	const KIND: ResourceKind = ResourceKind::Role;

	fn before(&self, actor: &Actor, _ability: RoleAbility) -> Override {
		admin_bypass(actor)
	}

	fn check(&self, _actor: &Actor, ability: RoleAbility, _target: Option<&RoleAttrs>) -> bool {
		match ability {
			RoleAbility::Read | RoleAbility::ReadAny => true,
			RoleAbility::Store | RoleAbility::Update | RoleAbility::Delete => false,
		}
	}
}
