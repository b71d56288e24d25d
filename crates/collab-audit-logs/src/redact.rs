// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Classic tokens (`ghp_`, `gho_`, `ghu_`, `ghs_`, `ghr_`) and fine-grained
/// personal access tokens (`github_pat_`).
static GITHUB_TOKEN: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"\b(?:gh[pousr]_[A-Za-z0-9]{20,255}|github_pat_[A-Za-z0-9_]{22,255})\b")
		.expect("token pattern is valid")
});

/// Basic Auth header values, which carry the token base64-encoded.
static BASIC_AUTH: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"(?i)(authorization\W{0,3}basic)\s+[A-Za-z0-9+/]{8,}={0,2}")
		.expect("basic auth pattern is valid")
});

/// Replace every GitHub token shape in `input`.
pub fn redact(input: &str) -> Cow<'_, str> {
	let tokens = GITHUB_TOKEN.replace_all(input, "[REDACTED:github-token]");
	if !BASIC_AUTH.is_match(&tokens) {
		return tokens;
	}
	Cow::Owned(
		BASIC_AUTH
			.replace_all(&tokens, "$1 [REDACTED:basic-auth]")
			.into_owned(),
	)
}
