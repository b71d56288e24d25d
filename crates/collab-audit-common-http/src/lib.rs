// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with a consistent User-Agent header.
//!
//! GitHub rejects API requests that carry no User-Agent, so every client in
//! this workspace is built from [`builder`].

use collab_audit_common_version::BuildInfo;
use reqwest::{Client, ClientBuilder};

/// Creates a new HTTP client builder with the standard User-Agent header,
/// `collab-audit/{platform}/{git_sha}`.
///
/// Library defaults are kept for redirects and timeouts.
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(BuildInfo::current().user_agent())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn client_builds() {
		assert!(builder().build().is_ok());
	}
}
