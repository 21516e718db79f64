// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tag and event access policies.
//!
//! Both are curated lists with no ownership: editors maintain them.

use crate::abac::{CatalogAbility, EventAttrs, Override, Policy, ResourceKind, TagAttrs};
use crate::actor::Actor;
use crate::types::RoleLevel;

use super::admin_bypass;

fn evaluate_catalog(actor: &Actor, ability: CatalogAbility) -> bool {
	match ability {
		CatalogAbility::Read | CatalogAbility::ReadAny => true,
		CatalogAbility::Store | CatalogAbility::Update | CatalogAbility::Delete => {
			actor.has_role_or_higher(RoleLevel::Editor)
		}
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EventPolicy;

impl Policy for EventPolicy {
	type Ability = CatalogAbility;
	type Target = EventAttrs;

	const KIND: ResourceKind = ResourceKind::Event;

	fn before(&self, actor: &Actor, _ability: CatalogAbility) -> Override {
		admin_bypass(actor)
	}

	fn check(&self, actor: &Actor, ability: CatalogAbility, _target: Option<&EventAttrs>) -> bool {
		evaluate_catalog(actor, ability)
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TagPolicy;

impl Policy for TagPolicy {
	type Ability = CatalogAbility;
	type Target = TagAttrs;

	const KIND: ResourceKind = ResourceKind::Tag;

	fn before(&self, actor: &Actor, _ability: CatalogAbility) -> Override {
		admin_bypass(actor)
	}

	fn check(&self, actor: &Actor, ability: CatalogAbility, _target: Option<&TagAttrs>) -> bool {
		evaluate_catalog(actor, ability)
	}
}
