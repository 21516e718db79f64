// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization tests for user account routes.

use http::StatusCode;

use super::support::{run_authz_cases, AuthzCase, Fixtures, TestApp};

#[test]
fn only_admins_create_accounts() {
	let app = TestApp::new();
	let f = &app.fixtures;

	let cases = [
		AuthzCase {
			name: "editor cannot create accounts",
			resource: "user",
			ability: "store",
			user: Some(f.editor.clone()),
			target: None,
			expected_status: StatusCode::FORBIDDEN,
		},
		AuthzCase {
			name: "admin creates accounts",
			resource: "user",
			ability: "store",
			user: Some(f.admin.clone()),
			target: None,
			expected_status: StatusCode::OK,
		},
	];

	run_authz_cases(&app, &cases);
}

#[test]
fn account_management_is_self_service() {
	let app = TestApp::new();
	let f = &app.fixtures;
	let own = Fixtures::account(&f.reader);
	let other = Fixtures::account(&f.other_reader);

	let mut cases = Vec::new();
	for ability in ["update", "delete", "force_delete", "restore"] {
		cases.extend([
			AuthzCase {
				name: "user manages their own account",
				resource: "user",
				ability,
				user: Some(f.reader.clone()),
				target: Some(own.clone()),
				expected_status: StatusCode::OK,
			},
			AuthzCase {
				name: "user cannot manage another account",
				resource: "user",
				ability,
				user: Some(f.reader.clone()),
				target: Some(other.clone()),
				expected_status: StatusCode::FORBIDDEN,
			},
			AuthzCase {
				name: "editor rank grants nothing over other accounts",
				resource: "user",
				ability,
				user: Some(f.editor.clone()),
				target: Some(other.clone()),
				expected_status: StatusCode::FORBIDDEN,
			},
			AuthzCase {
				name: "no collection form without a target",
				resource: "user",
				ability,
				user: Some(f.editor.clone()),
				target: None,
				expected_status: StatusCode::FORBIDDEN,
			},
			AuthzCase {
				name: "admin manages any account",
				resource: "user",
				ability,
				user: Some(f.admin.clone()),
				target: Some(other.clone()),
				expected_status: StatusCode::OK,
			},
		]);
	}

	run_authz_cases(&app, &cases);
}

#[test]
fn profiles_are_public() {
	let app = TestApp::new();
	let f = &app.fixtures;
	let other = Fixtures::account(&f.admin);

	assert_eq!(app.status("user", "read", Some(&f.guest), Some(&other)), StatusCode::OK);
	assert_eq!(app.status("user", "read_any", Some(&f.guest), None), StatusCode::OK);
}
