// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization error types.

use thiserror::Error;

use crate::abac::ResourceKind;

/// Errors that can occur while authorizing a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
	// =========================================================================
	// Configuration Errors
	// =========================================================================
	/// No policy is registered under this resource name.
	#[error("unknown resource kind: {0}")]
	UnknownResource(String),

	/// The resource kind has no ability with this name.
	#[error("resource {resource} has no ability named {ability}")]
	UnknownAbility {
		resource: ResourceKind,
		ability: String,
	},

	/// The target supplied for an instance check is of a different resource kind.
	#[error("expected a {expected} target, got a {found} target")]
	TargetMismatch {
		expected: ResourceKind,
		found: ResourceKind,
	},

	// =========================================================================
	// Authentication Errors
	// =========================================================================
	/// No authenticated actor on the request.
	#[error("authentication required")]
	AuthenticationRequired,

	/// The actor's account is deactivated.
	#[error("inactive user")]
	InactiveUser,

	// =========================================================================
	// Authorization Errors
	// =========================================================================
	/// A well-formed decision came out as a denial.
	#[error("permission denied: {resource}:{ability}")]
	PermissionDenied {
		resource: ResourceKind,
		ability: &'static str,
	},
}

impl AuthzError {
	/// Returns true for programmer/setup defects rather than request outcomes.
	pub fn is_configuration(&self) -> bool {
		matches!(
			self,
			AuthzError::UnknownResource(_)
				| AuthzError::UnknownAbility { .. }
				| AuthzError::TargetMismatch { .. }
		)
	}

	/// Returns the HTTP status code for this error.
	pub fn status_code(&self) -> u16 {
		match self {
			AuthzError::AuthenticationRequired => 401,
			AuthzError::InactiveUser => 400,
			AuthzError::PermissionDenied { .. } => 403,
			AuthzError::UnknownResource(_)
			| AuthzError::UnknownAbility { .. }
			| AuthzError::TargetMismatch { .. } => 500,
		}
	}
}
