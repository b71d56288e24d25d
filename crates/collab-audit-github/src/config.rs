// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration for the GitHub client.

use std::net::IpAddr;

use collab_audit_common_config::{Env, SecretString};
use reqwest::Url;

use crate::error::GithubError;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Principal identifier used for HTTP Basic Auth.
pub const USERNAME_VAR: &str = "GITHUB_USERNAME";
/// Access token used as the Basic Auth password. `GITHUB_TOKEN_FILE` is also accepted.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
/// Optional API base URL override (GitHub Enterprise, local mirrors).
pub const BASE_URL_VAR: &str = "GITHUB_API_URL";

/// Configuration for the GitHub client.
///
/// The token is held as a [`SecretString`] so `Debug` output stays safe to log.
#[derive(Clone)]
pub struct GithubConfig {
	username: String,
	token: SecretString,
	base_url: Url,
}

impl std::fmt::Debug for GithubConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("GithubConfig")
			.field("username", &self.username)
			.field("token", &self.token)
			.field("base_url", &self.base_url.as_str())
			.finish()
	}
}

impl GithubConfig {
	/// Validate and normalize a base URL.
	///
	/// Requirements:
	/// - Must be a valid URL with a host
	/// - Must use HTTPS, except plain HTTP on a loopback host
	/// - The path always ends in `/` so endpoint paths join beneath it
	pub fn validate_and_normalize_base_url(raw: &str) -> Result<Url, GithubError> {
		let mut url = Url::parse(raw)
			.map_err(|e| GithubError::Config(format!("Invalid GitHub base URL '{raw}': {e}")))?;

		let host = url
			.host_str()
			.ok_or_else(|| GithubError::Config("GitHub base URL must include a host".to_string()))?;

		match url.scheme() {
			"https" => {}
			"http" if is_loopback(host) => {}
			"http" => {
				return Err(GithubError::Config(format!(
					"GitHub base URL must use https unless the host is loopback, got '{raw}'"
				)));
			}
			other => {
				return Err(GithubError::Config(format!(
					"GitHub base URL must use https, got '{other}'"
				)));
			}
		}

		if !url.path().ends_with('/') {
			let path = format!("{}/", url.path());
			url.set_path(&path);
		}

		Ok(url)
	}

	/// Create a configuration against the public GitHub API.
	pub fn new(username: impl Into<String>, token: SecretString) -> Self {
		Self {
			username: username.into(),
			token,
			base_url: Url::parse(DEFAULT_BASE_URL).expect("default URL is valid"),
		}
	}

	/// Set a custom base URL (GitHub Enterprise `https://host/api/v3`, or a
	/// loopback mock server).
	pub fn with_base_url(mut self, raw: &str) -> Result<Self, GithubError> {
		self.base_url = Self::validate_and_normalize_base_url(raw)?;
		Ok(self)
	}

	/// Apply the optional [`BASE_URL_VAR`] override from `env`.
	pub fn with_base_url_from<E: Env + ?Sized>(self, env: &E) -> Result<Self, GithubError> {
		match env.get(BASE_URL_VAR) {
			Some(raw) if !raw.trim().is_empty() => self.with_base_url(raw.trim()),
			_ => Ok(self),
		}
	}

	pub fn username(&self) -> &str {
		&self.username
	}

	pub(crate) fn token(&self) -> &SecretString {
		&self.token
	}

	/// Get the validated base URL.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}
}

fn is_loopback(host: &str) -> bool {
	if host.eq_ignore_ascii_case("localhost") {
		return true;
	}
	host
		.trim_start_matches('[')
		.trim_end_matches(']')
		.parse::<IpAddr>()
		.map(|ip| ip.is_loopback())
		.unwrap_or(false)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn config() -> GithubConfig {
		GithubConfig::new("octocat", SecretString::new("ghp_secret_token".to_string()))
	}

	#[test]
	fn test_config_new() {
		let config = config();
		assert_eq!(config.username(), "octocat");
		assert_eq!(config.base_url().as_str(), "https://api.github.com/");
	}

	#[test]
	fn test_base_url_validation_rejects_remote_http() {
		let err = GithubConfig::validate_and_normalize_base_url("http://api.github.com").unwrap_err();
		assert!(err.to_string().contains("https"));
	}

	#[test]
	fn test_base_url_validation_accepts_loopback_http() {
		for raw in ["http://127.0.0.1:8080", "http://localhost:9000", "http://[::1]:4000"] {
			assert!(
				GithubConfig::validate_and_normalize_base_url(raw).is_ok(),
				"{raw} should be accepted"
			);
		}
	}

	#[test]
	fn test_base_url_validation_rejects_invalid_url() {
		assert!(GithubConfig::validate_and_normalize_base_url("not-a-url").is_err());
		assert!(GithubConfig::validate_and_normalize_base_url("ftp://example.com").is_err());
	}

	/// Enterprise base URLs carry a path prefix that must survive joining.
	#[test]
	fn test_enterprise_base_url_keeps_path_prefix() {
		let config = config()
			.with_base_url("https://github.example.com/api/v3")
			.unwrap();
		assert_eq!(config.base_url().as_str(), "https://github.example.com/api/v3/");
		assert_eq!(
			config.base_url().join("repos/a/b/collaborators").unwrap().as_str(),
			"https://github.example.com/api/v3/repos/a/b/collaborators"
		);
	}

	#[test]
	fn test_base_url_from_env() {
		let mut env = HashMap::new();
		let unchanged = config().with_base_url_from(&env).unwrap();
		assert_eq!(unchanged.base_url().as_str(), "https://api.github.com/");

		env.insert(
			BASE_URL_VAR.to_string(),
			"https://github.example.com/api/v3".to_string(),
		);
		let custom = config().with_base_url_from(&env).unwrap();
		assert_eq!(custom.base_url().host_str(), Some("github.example.com"));

		env.insert(BASE_URL_VAR.to_string(), "http://example.com".to_string());
		assert!(config().with_base_url_from(&env).is_err());
	}

	/// Tokens must never leak through Debug formatting of the config.
	#[test]
	fn test_debug_redacts_token() {
		let debug_str = format!("{:?}", config());
		assert!(!debug_str.contains("ghp_secret_token"));
		assert!(debug_str.contains("[REDACTED]"));
		assert!(debug_str.contains("octocat"));
	}
}
