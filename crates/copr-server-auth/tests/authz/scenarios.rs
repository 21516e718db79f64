// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end decision scenarios and registry-wide properties.

use copr_server_auth::{
	Actor, AuthzError, PolicyRegistry, ProblemAttrs, ProblemId, ResourceKind, Role, RoleLevel,
	SuggestionAttrs, SuggestionId, Target, UserId,
};
use proptest::prelude::*;

use super::support::Fixtures;

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn reader_votes_but_cannot_triage() {
	let registry = PolicyRegistry::new();
	let f = Fixtures::new();

	assert_eq!(
		registry.resolve_named("sugestao", "votar", &f.reader, None),
		Ok(true)
	);
	assert_eq!(
		registry.resolve_named("sugestao", "update_status", &f.reader, None),
		Ok(false)
	);
}

#[test]
fn update_status_is_not_a_problem_ability() {
	let registry = PolicyRegistry::new();
	let f = Fixtures::new();

	// Triage lives on suggestions; asking for it on a problem is a wiring mistake.
	assert_eq!(
		registry.resolve_named("problema", "update_status", &f.reader, None),
		Err(AuthzError::UnknownAbility {
			resource: ResourceKind::Problem,
			ability: "update_status".to_string(),
		})
	);
	assert!(registry
		.resolve_named("problema", "update_status", &f.admin, None)
		.is_err());
}

#[test]
fn editor_deletes_only_what_they_uploaded() {
	let registry = PolicyRegistry::new();
	let f = Fixtures::new();
	let own = Target::from(f.own_problem.clone());
	let foreign = Target::from(f.foreign_problem.clone());

	assert_eq!(
		registry.resolve_named("problema", "delete", &f.editor, Some(&own)),
		Ok(true)
	);
	assert_eq!(
		registry.resolve_named("problema", "delete", &f.editor, Some(&foreign)),
		Ok(false)
	);
}

#[test]
fn editor_update_is_target_sensitive() {
	let registry = PolicyRegistry::new();
	let f = Fixtures::new();
	let own = Target::from(f.own_problem.clone());
	let foreign = Target::from(f.foreign_problem.clone());

	assert_eq!(
		registry.resolve_named("problema", "update", &f.editor, Some(&foreign)),
		Ok(false)
	);
	assert_eq!(
		registry.resolve_named("problema", "update", &f.editor, Some(&own)),
		Ok(true)
	);
	assert_eq!(
		registry.resolve_named("problema", "update", &f.editor, None),
		Ok(true)
	);
}

#[test]
fn admin_deletes_anything() {
	let registry = PolicyRegistry::new();
	let f = Fixtures::new();
	let targets = [
		Target::from(f.foreign_problem.clone()),
		Target::from(f.foreign_suggestion.clone()),
		Fixtures::account(&f.other_reader),
	];

	for target in &targets {
		let resource = target.kind().as_str();
		assert_eq!(
			registry.resolve_named(resource, "delete", &f.admin, Some(target)),
			Ok(true)
		);
	}
	for kind in ResourceKind::all() {
		assert_eq!(
			registry.resolve_named(kind.as_str(), "delete", &f.admin, None),
			Ok(true)
		);
	}
}

#[test]
fn authorize_reports_what_was_denied() {
	let registry = PolicyRegistry::new();
	let f = Fixtures::new();

	assert_eq!(
		registry.authorize_named("evento", "store", &f.reader, None),
		Err(AuthzError::PermissionDenied {
			resource: ResourceKind::Event,
			ability: "store",
		})
	);
	assert_eq!(
		registry.authorize_named("evento", "store", &f.editor, None),
		Ok(())
	);
}

#[test]
fn unknown_names_are_never_a_plain_denial() {
	let registry = PolicyRegistry::new();
	let f = Fixtures::new();

	let err = registry
		.resolve_named("widget", "read", &f.reader, None)
		.unwrap_err();
	assert!(err.is_configuration());

	let err = registry
		.resolve_named("user", "votar", &f.reader, None)
		.unwrap_err();
	assert_eq!(
		err,
		AuthzError::UnknownAbility {
			resource: ResourceKind::User,
			ability: "votar".to_string(),
		}
	);
}

// ============================================================================
// Properties
// ============================================================================

fn arb_level() -> impl Strategy<Value = RoleLevel> {
	prop::sample::select(RoleLevel::ALL.to_vec())
}

fn arb_named_permission() -> impl Strategy<Value = (ResourceKind, &'static str)> {
	let pairs: Vec<(ResourceKind, &'static str)> = ResourceKind::all()
		.iter()
		.flat_map(|kind| kind.ability_names().into_iter().map(move |a| (*kind, a)))
		.collect();
	prop::sample::select(pairs)
}

fn owned_target(kind: ResourceKind, actor: &Actor) -> Option<Target> {
	let problem = ProblemAttrs::new(ProblemId::generate()).with_uploader(actor.id);
	match kind {
		ResourceKind::Problem => Some(problem.into()),
		ResourceKind::Suggestion => {
			Some(SuggestionAttrs::new(SuggestionId::generate(), actor.id, problem).into())
		}
		ResourceKind::User => Some(Fixtures::account(actor)),
		_ => None,
	}
}

proptest! {
	#[test]
	fn admin_is_granted_every_ability((kind, ability) in arb_named_permission(), with_target in any::<bool>()) {
		let registry = PolicyRegistry::new();
		let admin = Actor::new(UserId::generate(), "root", Role::seeded(RoleLevel::Admin));
		let stranger = Actor::new(UserId::generate(), "x", Role::seeded(RoleLevel::Reader));
		let target = if with_target { owned_target(kind, &stranger) } else { None };

		prop_assert_eq!(
			registry.resolve_named(kind.as_str(), ability, &admin, target.as_ref()),
			Ok(true)
		);
	}

	#[test]
	fn reads_are_public(kind in prop::sample::select(ResourceKind::all().to_vec()), level in arb_level(), read_any in any::<bool>()) {
		let registry = PolicyRegistry::new();
		let actor = Actor::new(UserId::generate(), "anyone", Role::seeded(level));
		let ability = if read_any { "read_any" } else { "read" };

		prop_assert_eq!(registry.resolve_named(kind.as_str(), ability, &actor, None), Ok(true));
	}

	#[test]
	fn grants_are_monotonic_in_role((kind, ability) in arb_named_permission(), level in arb_level()) {
		let registry = PolicyRegistry::new();
		let actor = Actor::new(UserId::generate(), "member", Role::seeded(level));
		let target = owned_target(kind, &actor);

		let allowed = registry.resolve_named(kind.as_str(), ability, &actor, target.as_ref());
		prop_assert!(allowed.is_ok());

		// A denial at this level is a denial at every level below it.
		if allowed == Ok(false) {
			for lower in RoleLevel::ALL.iter().filter(|l| **l < level) {
				let below = actor.clone().with_role(Role::seeded(*lower));
				prop_assert_eq!(
					registry.resolve_named(kind.as_str(), ability, &below, target.as_ref()),
					Ok(false)
				);
			}
		}
	}

	#[test]
	fn resolution_is_idempotent((kind, ability) in arb_named_permission(), level in arb_level()) {
		let registry = PolicyRegistry::new();
		let actor = Actor::new(UserId::generate(), "member", Role::seeded(level));
		let target = owned_target(kind, &actor);

		let first = registry.resolve_named(kind.as_str(), ability, &actor, target.as_ref());
		for _ in 0..3 {
			prop_assert_eq!(
				registry.resolve_named(kind.as_str(), ability, &actor, target.as_ref()),
				first.clone()
			);
		}
	}
}
