// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod catalog;
mod problems;
mod roles;
mod scenarios;
mod suggestions;
mod users;
