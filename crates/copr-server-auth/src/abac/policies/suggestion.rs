// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Suggestion access policy.

use crate::abac::{Override, Policy, ResourceKind, SuggestionAbility, SuggestionAttrs};
use crate::actor::Actor;
use crate::types::RoleLevel;

use super::admin_bypass;

/// Readers propose, vote on and maintain their own suggestions; the
/// uploaders of the suggested-on problem decide its status.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionPolicy;

impl Policy for SuggestionPolicy {
	type Ability = SuggestionAbility;
	type Target = SuggestionAttrs;

	const KIND: ResourceKind = ResourceKind::Suggestion;

	fn before(&self, actor: &Actor, _ability: SuggestionAbility) -> Override {
		admin_bypass(actor)
	}

	fn check(
		&self,
		actor: &Actor,
		ability: SuggestionAbility,
		target: Option<&SuggestionAttrs>,
	) -> bool {
		match ability {
			SuggestionAbility::Read | SuggestionAbility::ReadAny => true,
			SuggestionAbility::Store | SuggestionAbility::Vote => {
				actor.has_role_or_higher(RoleLevel::Reader)
			}
			SuggestionAbility::Update | SuggestionAbility::Delete => {
				actor.has_role_or_higher(RoleLevel::Reader)
					&& target.map_or(true, |suggestion| suggestion.is_authored_by(actor.id))
			}
			SuggestionAbility::UpdateStatus => {
				actor.has_role_or_higher(RoleLevel::Editor)
					&& target.map_or(true, |suggestion| {
						suggestion.problem.is_uploaded_by(actor.id)
					})
			}
		}
	}
}
