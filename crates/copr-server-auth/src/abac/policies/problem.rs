// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Problem access policy.
//!
//! Editors upload problems. Changing or removing one additionally requires
//! being among its uploaders, checked once the handler has loaded it.

use crate::abac::{Override, Policy, ProblemAbility, ProblemAttrs, ResourceKind};
use crate::actor::Actor;
use crate::types::RoleLevel;

use super::admin_bypass;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemPolicy;

impl Policy for ProblemPolicy {
	type Ability = ProblemAbility;
	type Target = ProblemAttrs;

	const KIND: ResourceKind = ResourceKind::Problem;

	fn before(&self, actor: &Actor, _ability: ProblemAbility) -> Override {
		admin_bypass(actor)
	}

	fn check(&self, actor: &Actor, ability: ProblemAbility, target: Option<&ProblemAttrs>) -> bool {
		match ability {
			ProblemAbility::Read | ProblemAbility::ReadAny => true,
			ProblemAbility::Store => actor.has_role_or_higher(RoleLevel::Editor),
			ProblemAbility::Update | ProblemAbility::Delete => {
				actor.has_role_or_higher(RoleLevel::Editor)
					&& target.map_or(true, |problem| problem.is_uploaded_by(actor.id))
			}
		}
	}
}
