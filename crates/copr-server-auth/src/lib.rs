// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization for the CoPR problem catalog.
//!
//! This crate provides:
//! - The ordered role model (guest < reader < editor < admin) and role comparisons
//! - One stateless policy per resource kind (roles, problems, suggestions,
//!   events, tags, users)
//! - A registry that routes a `(resource, ability)` pair to its policy
//! - An authorization gate that runs before request handlers
//!
//! # Decision Model
//!
//! Every decision is a pure function of three inputs:
//!
//! - **Actor**: who is asking (id, role level, active flag)
//! - **Permission**: the resource kind and one of its abilities
//! - **Target**: optionally, the attributes of the instance being acted on
//!
//! Route-level checks pass no target and answer "may this actor attempt the
//! action at all?". Instance-level checks pass the loaded resource and apply
//! ownership rules on top.
//!
//! # Security Considerations
//!
//! - Unknown resource or ability names are configuration errors, never grants
//! - Deactivated accounts are refused before any policy runs
//! - Only the admin role is a blanket override; nothing ranked below inherits it

pub mod abac;
pub mod actor;
pub mod error;
pub mod middleware;
pub mod roles;
pub mod types;

pub use abac::{
	evaluate, Ability, CatalogAbility, EventAttrs, Override, Permission, Policy, PolicyRegistry,
	ProblemAbility, ProblemAttrs, ResourceKind, RoleAbility, RoleAttrs, SuggestionAbility,
	SuggestionAttrs, TagAttrs, Target, UserAbility, UserAttrs,
};
pub use actor::Actor;
pub use error::AuthzError;
pub use middleware::{AuthContext, Authorizer, DenialSettings, Rejection, DEFAULT_DENIED_MESSAGE};
pub use roles::{RoleCatalog, DEFAULT_ROLE_LEVEL};
pub use types::*;
