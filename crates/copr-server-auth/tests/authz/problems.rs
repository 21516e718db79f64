// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization tests for problem routes.

use copr_server_auth::{ProblemAttrs, ProblemId, Target};
use http::StatusCode;

use super::support::{run_authz_cases, AuthzCase, TestApp};

// ============================================================================
// Upload
// ============================================================================

#[test]
fn problem_store_requires_editor() {
	let app = TestApp::new();
	let f = &app.fixtures;

	let cases = [
		AuthzCase {
			name: "guest cannot upload",
			resource: "problema",
			ability: "store",
			user: Some(f.guest.clone()),
			target: None,
			expected_status: StatusCode::FORBIDDEN,
		},
		AuthzCase {
			name: "reader cannot upload",
			resource: "problema",
			ability: "store",
			user: Some(f.reader.clone()),
			target: None,
			expected_status: StatusCode::FORBIDDEN,
		},
		AuthzCase {
			name: "editor can upload",
			resource: "problema",
			ability: "store",
			user: Some(f.editor.clone()),
			target: None,
			expected_status: StatusCode::OK,
		},
		AuthzCase {
			name: "admin can upload",
			resource: "problem",
			ability: "store",
			user: Some(f.admin.clone()),
			target: None,
			expected_status: StatusCode::OK,
		},
		AuthzCase {
			name: "anonymous is asked to authenticate",
			resource: "problem",
			ability: "store",
			user: None,
			target: None,
			expected_status: StatusCode::UNAUTHORIZED,
		},
	];

	run_authz_cases(&app, &cases);
}

// ============================================================================
// Edit and Delete
// ============================================================================

#[test]
fn problem_mutation_is_restricted_to_uploaders() {
	let app = TestApp::new();
	let f = &app.fixtures;
	let own = Target::from(f.own_problem.clone());
	let foreign = Target::from(f.foreign_problem.clone());

	let mut cases = Vec::new();
	for ability in ["update", "delete"] {
		cases.extend([
			AuthzCase {
				name: "editor passes the route gate",
				resource: "problema",
				ability,
				user: Some(f.editor.clone()),
				target: None,
				expected_status: StatusCode::OK,
			},
			AuthzCase {
				name: "editor may change a problem they uploaded",
				resource: "problema",
				ability,
				user: Some(f.editor.clone()),
				target: Some(own.clone()),
				expected_status: StatusCode::OK,
			},
			AuthzCase {
				name: "editor may not change someone else's problem",
				resource: "problema",
				ability,
				user: Some(f.editor.clone()),
				target: Some(foreign.clone()),
				expected_status: StatusCode::FORBIDDEN,
			},
			AuthzCase {
				name: "admin may change any problem",
				resource: "problema",
				ability,
				user: Some(f.admin.clone()),
				target: Some(foreign.clone()),
				expected_status: StatusCode::OK,
			},
			AuthzCase {
				name: "reader is stopped at the route gate",
				resource: "problema",
				ability,
				user: Some(f.reader.clone()),
				target: None,
				expected_status: StatusCode::FORBIDDEN,
			},
		]);
	}

	run_authz_cases(&app, &cases);
}

#[test]
fn uploader_status_does_not_lift_reader_role() {
	let app = TestApp::new();
	let reader = app.fixtures.reader.clone();
	let uploaded_by_reader =
		Target::from(ProblemAttrs::new(ProblemId::generate()).with_uploader(reader.id));

	assert_eq!(
		app.status("problema", "update", Some(&reader), Some(&uploaded_by_reader)),
		StatusCode::FORBIDDEN
	);
}

#[test]
fn co_uploaders_may_each_edit() {
	let app = TestApp::new();
	let f = &app.fixtures;
	let shared = Target::from(
		ProblemAttrs::new(ProblemId::generate())
			.with_uploader(f.editor.id)
			.with_uploader(f.other_editor.id),
	);

	assert_eq!(
		app.status("problema", "update", Some(&f.editor), Some(&shared)),
		StatusCode::OK
	);
	assert_eq!(
		app.status("problema", "update", Some(&f.other_editor), Some(&shared)),
		StatusCode::OK
	);
}

// ============================================================================
// Reading
// ============================================================================

#[test]
fn problems_are_readable_by_every_role() {
	let app = TestApp::new();
	let f = &app.fixtures;
	let foreign = Target::from(f.foreign_problem.clone());

	for user in [&f.guest, &f.reader, &f.editor, &f.admin] {
		assert_eq!(
			app.status("problema", "read_any", Some(user), None),
			StatusCode::OK
		);
		assert_eq!(
			app.status("problema", "read", Some(user), Some(&foreign)),
			StatusCode::OK
		);
	}
}
