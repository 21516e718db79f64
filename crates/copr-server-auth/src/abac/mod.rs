// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-resource policy engine.
//!
//! This module decides whether an actor may perform an ability on a resource
//! kind, optionally against a specific instance.
//!
//! # Architecture
//!
//! The engine is structured in three layers:
//!
//! 1. **Types** ([`types`]): Resource kinds, per-resource abilities, permissions, targets
//! 2. **Policies** ([`policies`]): One stateless rule set per resource kind
//! 3. **Engine** ([`engine`]): The [`Policy`] contract and the [`PolicyRegistry`]
//!    routing a permission to its policy
//!
//! # Policy Evaluation Flow
//!
//! ```text
//! PolicyRegistry::resolve(permission, actor, target?)
//!     │
//!     ├── Target kind must match the permission's resource kind
//!     │
//!     └── Route to the policy for the resource kind:
//!         ├── before(actor, ability) → Grant / Deny  → done
//!         │                          → Defer
//!         └── check(actor, ability, target?) → bool
//! ```
//!
//! # Example
//!
//! ```
//! use copr_server_auth::abac::{Permission, PolicyRegistry, ProblemAbility, ProblemAttrs, Target};
//! use copr_server_auth::{Actor, ProblemId, Role, RoleLevel, UserId};
//!
//! let registry = PolicyRegistry::new();
//! let editor = Actor::new(UserId::generate(), "maria", Role::seeded(RoleLevel::Editor));
//! let update = Permission::Problem(ProblemAbility::Update);
//!
//! // Route-level gate: no instance loaded yet.
//! assert_eq!(registry.resolve(update, &editor, None), Ok(true));
//!
//! // Instance-level check: only uploaders may edit.
//! let theirs = Target::from(ProblemAttrs::new(ProblemId::generate()));
//! assert_eq!(registry.resolve(update, &editor, Some(&theirs)), Ok(false));
//! ```

pub mod engine;
pub mod policies;
pub mod types;

pub use engine::*;
pub use types::*;
