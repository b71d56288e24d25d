// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Compile-time identity of the collab-audit binary.
//!
//! Feeds the HTTP User-Agent sent to GitHub and the startup log line.

use std::fmt;

shadow_rs::shadow!(build);

pub const PRODUCT: &str = "collab-audit";

/// `{os}-{arch}`, e.g. "linux-x86_64".
pub const PLATFORM: &str = env!("COLLAB_AUDIT_PLATFORM");

const UNKNOWN_SHA: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
	pub version: &'static str,
	/// Short commit hash, or "unknown" outside a git checkout.
	pub git_sha: &'static str,
	pub platform: &'static str,
}

impl BuildInfo {
	pub fn current() -> Self {
		let sha = build::SHORT_COMMIT;
		Self {
			version: build::PKG_VERSION,
			git_sha: if sha.is_empty() { UNKNOWN_SHA } else { sha },
			platform: PLATFORM,
		}
	}

	/// `collab-audit/{platform}/{git_sha}`
	pub fn user_agent(&self) -> String {
		format!("{PRODUCT}/{}/{}", self.platform, self.git_sha)
	}
}

/// `collab-audit 0.1.0 (abc1234, linux-x86_64)`
impl fmt::Display for BuildInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{PRODUCT} {} ({}, {})",
			self.version, self.git_sha, self.platform
		)
	}
}
