// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the GitHub client.

use thiserror::Error;

/// Errors that can occur when fetching collaborators from GitHub.
///
/// Every variant is terminal for an audit run; nothing here is retried.
#[derive(Debug, Error)]
pub enum GithubError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Bad credentials.
	#[error("Unauthorized: check GITHUB_USERNAME and GITHUB_TOKEN")]
	Unauthorized,

	/// Authenticated, but the token lacks access.
	#[error("Forbidden or insufficient token permissions")]
	Forbidden,

	/// Repository does not exist or is invisible to the principal.
	#[error("Repository not found or not visible to this account")]
	NotFound,

	/// Rate limit exceeded.
	#[error("Rate limit exceeded")]
	RateLimited,

	/// GitHub API returned an error.
	#[error("GitHub API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	/// The API answered with an empty body.
	#[error("Empty response from GitHub")]
	EmptyResponse,

	/// Invalid or unparseable response.
	#[error("Invalid response from GitHub: {0}")]
	InvalidResponse(String),

	/// Configuration error.
	#[error("Configuration error: {0}")]
	Config(String),
}
