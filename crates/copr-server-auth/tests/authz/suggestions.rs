// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization tests for improvement suggestion routes.

use copr_server_auth::Target;
use http::StatusCode;

use super::support::{run_authz_cases, AuthzCase, TestApp};

#[test]
fn suggestion_store_and_vote_require_reader() {
	let app = TestApp::new();
	let f = &app.fixtures;

	let mut cases = Vec::new();
	for ability in ["store", "votar", "vote"] {
		cases.extend([
			AuthzCase {
				name: "guest cannot participate",
				resource: "sugestao",
				ability,
				user: Some(f.guest.clone()),
				target: None,
				expected_status: StatusCode::FORBIDDEN,
			},
			AuthzCase {
				name: "reader can participate",
				resource: "sugestao",
				ability,
				user: Some(f.reader.clone()),
				target: None,
				expected_status: StatusCode::OK,
			},
			AuthzCase {
				name: "editor can participate",
				resource: "suggestion",
				ability,
				user: Some(f.editor.clone()),
				target: None,
				expected_status: StatusCode::OK,
			},
		]);
	}

	run_authz_cases(&app, &cases);
}

#[test]
fn suggestion_edits_are_restricted_to_the_author() {
	let app = TestApp::new();
	let f = &app.fixtures;
	let own = Target::from(f.reader_suggestion.clone());
	let foreign = Target::from(f.foreign_suggestion.clone());

	let mut cases = Vec::new();
	for ability in ["update", "delete"] {
		cases.extend([
			AuthzCase {
				name: "author edits their suggestion",
				resource: "sugestao",
				ability,
				user: Some(f.reader.clone()),
				target: Some(own.clone()),
				expected_status: StatusCode::OK,
			},
			AuthzCase {
				name: "another reader cannot edit it",
				resource: "sugestao",
				ability,
				user: Some(f.other_reader.clone()),
				target: Some(own.clone()),
				expected_status: StatusCode::FORBIDDEN,
			},
			AuthzCase {
				name: "problem uploader cannot edit it either",
				resource: "sugestao",
				ability,
				user: Some(f.editor.clone()),
				target: Some(own.clone()),
				expected_status: StatusCode::FORBIDDEN,
			},
			AuthzCase {
				name: "admin edits any suggestion",
				resource: "sugestao",
				ability,
				user: Some(f.admin.clone()),
				target: Some(foreign.clone()),
				expected_status: StatusCode::OK,
			},
			AuthzCase {
				name: "guest is stopped at the route gate",
				resource: "sugestao",
				ability,
				user: Some(f.guest.clone()),
				target: None,
				expected_status: StatusCode::FORBIDDEN,
			},
		]);
	}

	run_authz_cases(&app, &cases);
}

#[test]
fn status_changes_belong_to_the_problem_uploaders() {
	let app = TestApp::new();
	let f = &app.fixtures;
	let on_own_problem = Target::from(f.reader_suggestion.clone());
	let on_foreign_problem = Target::from(f.foreign_suggestion.clone());

	let cases = [
		AuthzCase {
			name: "reader cannot triage",
			resource: "sugestao",
			ability: "update_status",
			user: Some(f.reader.clone()),
			target: None,
			expected_status: StatusCode::FORBIDDEN,
		},
		AuthzCase {
			name: "author cannot accept their own suggestion",
			resource: "sugestao",
			ability: "update_status",
			user: Some(f.reader.clone()),
			target: Some(on_own_problem.clone()),
			expected_status: StatusCode::FORBIDDEN,
		},
		AuthzCase {
			name: "editor passes the route gate",
			resource: "sugestao",
			ability: "update_status",
			user: Some(f.editor.clone()),
			target: None,
			expected_status: StatusCode::OK,
		},
		AuthzCase {
			name: "uploader triages suggestions on their problem",
			resource: "sugestao",
			ability: "update_status",
			user: Some(f.editor.clone()),
			target: Some(on_own_problem),
			expected_status: StatusCode::OK,
		},
		AuthzCase {
			name: "editor cannot triage someone else's problem",
			resource: "sugestao",
			ability: "update_status",
			user: Some(f.editor.clone()),
			target: Some(on_foreign_problem.clone()),
			expected_status: StatusCode::FORBIDDEN,
		},
		AuthzCase {
			name: "admin triages anything",
			resource: "sugestao",
			ability: "update_status",
			user: Some(f.admin.clone()),
			target: Some(on_foreign_problem),
			expected_status: StatusCode::OK,
		},
	];

	run_authz_cases(&app, &cases);
}

#[test]
fn suggestions_are_readable_by_every_role() {
	let app = TestApp::new();
	let f = &app.fixtures;
	let foreign = Target::from(f.foreign_suggestion.clone());

	for user in [&f.guest, &f.reader, &f.editor, &f.admin] {
		assert_eq!(app.status("sugestao", "read_any", Some(user), None), StatusCode::OK);
		assert_eq!(
			app.status("sugestao", "read", Some(user), Some(&foreign)),
			StatusCode::OK
		);
	}
}
