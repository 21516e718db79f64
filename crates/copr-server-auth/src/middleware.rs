// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization gate for the request pipeline.
//!
//! This module provides:
//! - [`AuthContext`] - the authenticated actor, attached to requests by the
//!   authentication layer
//! - [`Authorizer`] - a guard bound to one permission, run before a handler
//! - [`DenialSettings`] / [`Rejection`] - how a refusal is presented at the
//!   HTTP boundary
//!
//! # Gate Flow
//!
//! ```text
//! Request → AuthContext (extensions) → Actor present? → Actor active? → authorize
//!                                          │                 │              │
//!                                          └── 401           └── 400        └── denied → 403
//! ```
//!
//! The gate fails closed: anything short of a grant is an error.

use std::sync::Arc;

use http::{Request, StatusCode};
use tracing::{debug, instrument, warn};

use crate::abac::{Permission, PolicyRegistry, Target};
use crate::actor::Actor;
use crate::error::AuthzError;

/// Message shown to the client when a policy refuses the request.
pub const DEFAULT_DENIED_MESSAGE: &str = "you do not have permission to perform this action";

/// Authentication state for request processing.
///
/// Inserted into the request extensions by the authentication layer.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
	/// The current actor, if authenticated.
	pub current_user: Option<Actor>,
}

impl AuthContext {
	/// Create a new unauthenticated context.
	pub fn unauthenticated() -> Self {
		Self { current_user: None }
	}

	/// Create a new authenticated context.
	pub fn authenticated(actor: Actor) -> Self {
		Self {
			current_user: Some(actor),
		}
	}

	/// Get the current actor, if authenticated.
	pub fn user(&self) -> Option<&Actor> {
		self.current_user.as_ref()
	}

	/// Require authentication, returning the current actor or an error.
	pub fn require_user(&self) -> Result<&Actor, AuthzError> {
		self.current_user
			.as_ref()
			.ok_or(AuthzError::AuthenticationRequired)
	}

	/// Store this context on a request for later guards to read.
	pub fn attach<B>(self, request: &mut Request<B>) {
		request.extensions_mut().insert(self);
	}
}

/// How a policy denial is presented to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenialSettings {
	pub status: StatusCode,
	pub message: String,
}

impl Default for DenialSettings {
	fn default() -> Self {
		Self {
			status: StatusCode::FORBIDDEN,
			message: DEFAULT_DENIED_MESSAGE.to_string(),
		}
	}
}

impl DenialSettings {
	pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
		Self {
			status,
			message: message.into(),
		}
	}
}

/// Status and body the routing layer should answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
	pub status: StatusCode,
	pub message: String,
}

/// A guard bound to one `(resource, ability)` pair.
///
/// Holds no per-request state; one instance can be shared by every request
/// to a route.
///
/// [`check`](Self::check) and [`check_target`](Self::check_target) are
/// alternatives, not steps. User account abilities (`update`, `delete`,
/// `force_delete`, `restore`) have no collection form: the route check denies
/// every non-admin, so self-service routes must go straight to the instance
/// check once the account is loaded.
#[derive(Debug, Clone)]
pub struct Authorizer {
	registry: Arc<PolicyRegistry>,
	permission: Permission,
	denial: DenialSettings,
}

impl Authorizer {
	pub fn new(registry: Arc<PolicyRegistry>, permission: Permission) -> Self {
		Self {
			registry,
			permission,
			denial: DenialSettings::default(),
		}
	}

	/// Builds a guard from string names.
	///
	/// Unknown names fail here, when routes are registered, not on the first
	/// request.
	pub fn named(
		registry: Arc<PolicyRegistry>,
		resource: &str,
		ability: &str,
	) -> Result<Self, AuthzError> {
		let permission = Permission::parse(resource, ability)?;
		Ok(Self::new(registry, permission))
	}

	/// Builder: set how denials are presented.
	pub fn with_denial(mut self, denial: DenialSettings) -> Self {
		self.denial = denial;
		self
	}

	pub fn permission(&self) -> Permission {
		self.permission
	}

	/// Route-level check: may the current actor attempt this action at all?
	#[instrument(level = "debug", skip_all, fields(permission = %self.permission))]
	pub fn check(&self, ctx: &AuthContext) -> Result<(), AuthzError> {
		self.run(ctx, None)
	}

	/// Instance-level check, once the handler has loaded the target.
	///
	/// Runs the same authentication and active-account checks as
	/// [`check`](Self::check); it does not require a prior route-level grant.
	#[instrument(level = "debug", skip_all, fields(permission = %self.permission, target = %target.kind()))]
	pub fn check_target(&self, ctx: &AuthContext, target: &Target) -> Result<(), AuthzError> {
		self.run(ctx, Some(target))
	}

	/// Route-level check against the [`AuthContext`] stored on `request`.
	pub fn guard<B>(&self, request: &Request<B>) -> Result<(), AuthzError> {
		match request.extensions().get::<AuthContext>() {
			Some(ctx) => self.check(ctx),
			None => {
				debug!(permission = %self.permission, "no auth context on request");
				Err(AuthzError::AuthenticationRequired)
			}
		}
	}

	/// Instance-level check against the [`AuthContext`] stored on `request`.
	pub fn guard_target<B>(&self, request: &Request<B>, target: &Target) -> Result<(), AuthzError> {
		match request.extensions().get::<AuthContext>() {
			Some(ctx) => self.check_target(ctx, target),
			None => {
				debug!(permission = %self.permission, "no auth context on request");
				Err(AuthzError::AuthenticationRequired)
			}
		}
	}

	/// Maps a gate error to the response the routing layer should send.
	pub fn rejection(&self, error: &AuthzError) -> Rejection {
		match error {
			AuthzError::PermissionDenied { .. } => Rejection {
				status: self.denial.status,
				message: self.denial.message.clone(),
			},
			err if err.is_configuration() => Rejection {
				status: StatusCode::INTERNAL_SERVER_ERROR,
				message: "internal server error".to_string(),
			},
			err => Rejection {
				status: StatusCode::from_u16(err.status_code())
					.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
				message: err.to_string(),
			},
		}
	}

	fn run(&self, ctx: &AuthContext, target: Option<&Target>) -> Result<(), AuthzError> {
		let actor = ctx.require_user()?;
		if !actor.is_active {
			debug!(actor_id = %actor.id, "inactive user refused");
			return Err(AuthzError::InactiveUser);
		}

		let result = self.registry.authorize(self.permission, actor, target);
		match &result {
			Err(err) if err.is_configuration() => {
				warn!(permission = %self.permission, error = %err, "authorization misconfigured");
			}
			Err(err) => {
				debug!(actor_id = %actor.id, error = %err, "request refused");
			}
			Ok(()) => {}
		}
		result
	}
}
