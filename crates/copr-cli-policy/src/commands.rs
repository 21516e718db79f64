// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use copr_server_auth::{
	Actor, AuthContext, Authorizer, EventAttrs, EventId, PolicyRegistry, ProblemAttrs, ProblemId,
	ResourceKind, RoleAttrs, RoleLevel, SuggestionAttrs, SuggestionId, TagAttrs, TagId, Target,
	UserAttrs, UserId,
};
use copr_server_config::ServerConfig;
use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Args)]
pub struct AbilitiesArgs {
	/// Only list this resource kind (English or Portuguese name)
	#[arg(long)]
	pub resource: Option<String>,

	/// Print JSON instead of text
	#[arg(long)]
	pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
	/// Resource kind, e.g. `problema` or `suggestion`
	#[arg(long)]
	pub resource: String,

	/// Ability name, e.g. `update` or `votar`
	#[arg(long)]
	pub ability: String,

	/// Role of the synthetic actor; defaults to the configured default role
	#[arg(long)]
	pub role: Option<RoleLevel>,

	/// Also run the instance-level check against a synthetic target
	#[arg(long)]
	pub target: bool,

	/// Make the synthetic actor own the target (implies --target)
	#[arg(long)]
	pub owner: bool,

	/// Mark the synthetic actor's account inactive
	#[arg(long)]
	pub inactive: bool,

	/// Print JSON instead of text
	#[arg(long)]
	pub json: bool,
}

#[derive(Debug, Serialize)]
struct AbilityListing {
	resource: ResourceKind,
	abilities: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
	pub permission: String,
	pub role: RoleLevel,
	pub active: bool,
	pub target: Option<TargetReport>,
	pub allowed: bool,
	pub status: u16,
	pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TargetReport {
	pub kind: ResourceKind,
	pub owned: bool,
}

pub fn abilities(args: &AbilitiesArgs) -> Result<String> {
	let registry = PolicyRegistry::new();

	let listings: Vec<AbilityListing> = match &args.resource {
		Some(name) => {
			let kind = registry
				.lookup(name)
				.with_context(|| format!("cannot list abilities for '{name}'"))?;
			vec![AbilityListing {
				resource: kind,
				abilities: registry.abilities(kind),
			}]
		}
		None => registry
			.supported()
			.into_iter()
			.map(|(resource, abilities)| AbilityListing {
				resource,
				abilities,
			})
			.collect(),
	};

	if args.json {
		return Ok(serde_json::to_string_pretty(&listings)?);
	}

	let mut out = String::new();
	for listing in &listings {
		writeln!(out, "{:<12} {}", listing.resource, listing.abilities.join(", "))?;
	}
	Ok(out.trim_end().to_string())
}

pub fn roles(config: &ServerConfig) -> String {
	let catalog = config.role_catalog();
	let default = catalog.default_role().level;

	catalog
		.iter()
		.map(|role| {
			let marker = if role.level == default { " (default)" } else { "" };
			format!(
				"{}  {:<8} {}{}",
				role.level.value(),
				role.level,
				role.display_name,
				marker
			)
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// Builds an instance of `kind` that `actor` does or does not own.
fn synthetic_target(kind: ResourceKind, actor: &Actor, owned: bool) -> Target {
	let owner = if owned { actor.id } else { UserId::generate() };
	match kind {
		ResourceKind::Role => RoleAttrs {
			level: actor.level(),
		}
		.into(),
		ResourceKind::Problem => ProblemAttrs::new(ProblemId::generate())
			.with_uploader(owner)
			.into(),
		ResourceKind::Suggestion => {
			let problem = ProblemAttrs::new(ProblemId::generate()).with_uploader(owner);
			SuggestionAttrs::new(SuggestionId::generate(), owner, problem).into()
		}
		ResourceKind::Event => EventAttrs {
			id: EventId::generate(),
		}
		.into(),
		ResourceKind::Tag => TagAttrs {
			id: TagId::generate(),
		}
		.into(),
		ResourceKind::User => UserAttrs { id: owner }.into(),
	}
}

#[instrument(skip(config), fields(resource = %args.resource, ability = %args.ability))]
pub fn evaluate_check(args: &CheckArgs, config: &ServerConfig) -> Result<CheckReport> {
	let registry = Arc::new(PolicyRegistry::new());
	let gate = Authorizer::named(registry, &args.resource, &args.ability)
		.with_context(|| format!("invalid permission {}:{}", args.resource, args.ability))?
		.with_denial(config.denial_settings());

	let catalog = config.role_catalog();
	let level = args.role.unwrap_or(catalog.default_role().level);
	let mut actor = Actor::new(UserId::generate(), "copr-policy", catalog.get(level).clone());
	if args.inactive {
		actor = actor.deactivated();
	}

	let kind = gate.permission().resource_kind();
	let target = (args.target || args.owner).then(|| synthetic_target(kind, &actor, args.owner));
	let ctx = AuthContext::authenticated(actor.clone());

	// With a target only the instance check runs; user self-service has no route form.
	let result = match &target {
		Some(target) => gate.check_target(&ctx, target),
		None => gate.check(&ctx),
	};
	debug!(allowed = result.is_ok(), "check evaluated");

	let (allowed, status, message) = match result {
		Ok(()) => (true, 200, None),
		Err(err) => {
			let rejection = gate.rejection(&err);
			(false, rejection.status.as_u16(), Some(rejection.message))
		}
	};

	Ok(CheckReport {
		permission: gate.permission().to_string(),
		role: actor.level(),
		active: actor.is_active,
		target: target.map(|t| TargetReport {
			kind: t.kind(),
			owned: args.owner,
		}),
		allowed,
		status,
		message,
	})
}

pub fn check(args: &CheckArgs, config: &ServerConfig) -> Result<String> {
	let report = evaluate_check(args, config)?;

	if args.json {
		return Ok(serde_json::to_string_pretty(&report)?);
	}

	let subject = match &report.target {
		Some(t) if t.owned => format!("{} on own {}", report.role, t.kind),
		Some(t) => format!("{} on someone else's {}", report.role, t.kind),
		None => report.role.to_string(),
	};
	let verdict = if report.allowed { "ALLOW" } else { "DENY" };

	let mut out = format!("{verdict} {} as {subject}", report.permission);
	if let Some(message) = &report.message {
		write!(out, " ({} {message})", report.status)?;
	}
	Ok(out)
}
