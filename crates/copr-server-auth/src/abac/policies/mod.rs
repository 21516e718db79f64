// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resource-specific policies.

pub mod catalog;
pub mod problem;
pub mod role;
pub mod suggestion;
pub mod user;

pub use catalog::{EventPolicy, TagPolicy};
pub use problem::ProblemPolicy;
pub use role::RolePolicy;
pub use suggestion::SuggestionPolicy;
pub use user::UserPolicy;

use crate::abac::Override;
use crate::actor::Actor;
use crate::types::RoleLevel;

/// The `before` hook every current policy shares: admins may do anything.
pub(crate) fn admin_bypass(actor: &Actor) -> Override {
	if actor.has_exact_role(RoleLevel::Admin) {
		Override::Grant
	} else {
		Override::Defer
	}
}
