// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Response types for the collaborators endpoint.

use serde::{Deserialize, Serialize};

/// One entry of `GET /repos/{owner}/{repo}/collaborators`.
///
/// Only `login` and the permission flags are required; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
	/// Account login, unique within one response.
	pub login: String,
	#[serde(default)]
	pub id: Option<u64>,
	#[serde(default)]
	pub html_url: Option<String>,
	#[serde(default)]
	pub site_admin: bool,
	/// Role as reported by GitHub (`admin`, `maintain`, `write`, `triage`, `read`).
	#[serde(default)]
	pub role_name: Option<String>,
	#[serde(default)]
	pub permissions: Permissions,
}

impl Collaborator {
	pub fn new(login: impl Into<String>, permissions: Permissions) -> Self {
		Self {
			login: login.into(),
			id: None,
			html_url: None,
			site_admin: false,
			role_name: None,
			permissions,
		}
	}
}

/// Permission flags. The flags are independent booleans in the API; nothing
/// stops `admin` being set without `push`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
	#[serde(default)]
	pub admin: bool,
	#[serde(default)]
	pub maintain: bool,
	#[serde(default)]
	pub push: bool,
	#[serde(default)]
	pub triage: bool,
	#[serde(default)]
	pub pull: bool,
}

impl Permissions {
	/// Build from the three flags the audit looks at.
	pub fn new(admin: bool, push: bool, pull: bool) -> Self {
		Self {
			admin,
			push,
			pull,
			..Self::default()
		}
	}
}
