// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization tests for role administration routes.

use copr_server_auth::{RoleAttrs, RoleLevel, Target};
use http::StatusCode;

use super::support::TestApp;

#[test]
fn roles_are_administered_by_admins_only() {
	let app = TestApp::new();
	let f = &app.fixtures;
	let editor_role = Target::from(RoleAttrs {
		level: RoleLevel::Editor,
	});

	for ability in ["store", "update", "delete"] {
		for user in [&f.guest, &f.reader, &f.editor] {
			assert_eq!(
				app.status("papel", ability, Some(user), None),
				StatusCode::FORBIDDEN,
				"{} must not {ability} roles",
				user.role.level
			);
		}
		assert_eq!(app.status("role", ability, Some(&f.admin), None), StatusCode::OK);
		assert_eq!(
			app.status("role", ability, Some(&f.admin), Some(&editor_role)),
			StatusCode::OK
		);
	}
}

#[test]
fn editors_cannot_touch_their_own_role() {
	let app = TestApp::new();
	let f = &app.fixtures;
	let own_role = Target::from(RoleAttrs {
		level: f.editor.role.level,
	});

	assert_eq!(
		app.status("papel", "update", Some(&f.editor), Some(&own_role)),
		StatusCode::FORBIDDEN
	);
}

#[test]
fn roles_are_listed_publicly() {
	let app = TestApp::new();
	let guest = &app.fixtures.guest;

	assert_eq!(app.status("papel", "read_any", Some(guest), None), StatusCode::OK);
	assert_eq!(app.status("papel", "read", Some(guest), None), StatusCode::OK);
}
