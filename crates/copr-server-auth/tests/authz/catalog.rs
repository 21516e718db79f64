// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization tests for tag and event routes.

use copr_server_auth::{EventAttrs, EventId, TagAttrs, TagId, Target};
use http::StatusCode;

use super::support::{run_authz_cases, AuthzCase, TestApp};

#[test]
fn catalog_mutation_requires_editor() {
	let app = TestApp::new();
	let f = &app.fixtures;

	let mut cases = Vec::new();
	for resource in ["tag", "evento", "event"] {
		for ability in ["store", "update", "delete"] {
			cases.extend([
				AuthzCase {
					name: "reader cannot curate",
					resource,
					ability,
					user: Some(f.reader.clone()),
					target: None,
					expected_status: StatusCode::FORBIDDEN,
				},
				AuthzCase {
					name: "editor curates",
					resource,
					ability,
					user: Some(f.editor.clone()),
					target: None,
					expected_status: StatusCode::OK,
				},
				AuthzCase {
					name: "admin curates",
					resource,
					ability,
					user: Some(f.admin.clone()),
					target: None,
					expected_status: StatusCode::OK,
				},
			]);
		}
	}

	run_authz_cases(&app, &cases);
}

#[test]
fn catalog_entries_have_no_owner() {
	let app = TestApp::new();
	let f = &app.fixtures;
	let tag = Target::from(TagAttrs { id: TagId::generate() });
	let event = Target::from(EventAttrs { id: EventId::generate() });

	assert_eq!(
		app.status("tag", "delete", Some(&f.other_editor), Some(&tag)),
		StatusCode::OK
	);
	assert_eq!(
		app.status("evento", "update", Some(&f.editor), Some(&event)),
		StatusCode::OK
	);
	assert_eq!(
		app.status("evento", "update", Some(&f.reader), Some(&event)),
		StatusCode::FORBIDDEN
	);
}

#[test]
fn catalog_is_readable_by_guests() {
	let app = TestApp::new();
	let guest = &app.fixtures.guest;

	for resource in ["tag", "evento"] {
		assert_eq!(app.status(resource, "read_any", Some(guest), None), StatusCode::OK);
		assert_eq!(app.status(resource, "read", Some(guest), None), StatusCode::OK);
	}
}
