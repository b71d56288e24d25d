// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! GitHub client implementation.

use reqwest::header::{HeaderMap, ACCEPT, LINK};
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, error, info, instrument, warn};

use crate::config::GithubConfig;
use crate::error::GithubError;
use crate::types::Collaborator;

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

/// Page size GitHub uses when `per_page` is not sent.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Client for the collaborators endpoint.
///
/// One request per call, authenticated with HTTP Basic Auth. No retries,
/// no pagination, and the library's default timeout and redirect policy.
#[derive(Clone)]
pub struct GithubClient {
	http_client: Client,
	config: GithubConfig,
}

impl GithubClient {
	pub fn new(config: GithubConfig) -> Result<Self, GithubError> {
		let http_client = collab_audit_common_http::builder()
			.build()
			.map_err(|e| GithubError::Config(format!("Failed to create HTTP client: {e}")))?;

		debug!(
			username = %config.username(),
			base_url = %config.base_url(),
			"Created GitHub client"
		);

		Ok(Self {
			http_client,
			config,
		})
	}

	/// Build `{base}/repos/{owner}/{repo}/collaborators`.
	///
	/// `.` and `..` are refused because `Url::join` would resolve them and
	/// move the request off the collaborators endpoint.
	pub fn collaborators_url(&self, owner: &str, repo: &str) -> Result<Url, GithubError> {
		for segment in [owner, repo] {
			if matches!(segment, "" | "." | "..") {
				return Err(GithubError::Config(format!(
					"Invalid repository path segment '{segment}'"
				)));
			}
		}

		let path = format!(
			"repos/{}/{}/collaborators",
			urlencoding::encode(owner),
			urlencoding::encode(repo)
		);
		self
			.config
			.base_url()
			.join(&path)
			.map_err(|e| GithubError::Config(format!("Invalid URL: {e}")))
	}

	/// Fetch the raw body of the collaborators endpoint.
	///
	/// A non-success status or an empty body is an error; a literal `[]` is
	/// returned as-is.
	#[instrument(skip(self), fields(owner = %owner, repo = %repo))]
	pub async fn fetch_collaborators_raw(&self, owner: &str, repo: &str) -> Result<String, GithubError> {
		let url = self.collaborators_url(owner, repo)?;

		debug!(url = %url, "Fetching collaborators");

		let response = self
			.http_client
			.get(url)
			.basic_auth(self.config.username(), Some(self.config.token().expose()))
			.header(ACCEPT, ACCEPT_GITHUB_JSON)
			.header(API_VERSION_HEADER, API_VERSION)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Collaborators request timed out");
					return GithubError::Timeout;
				}
				error!(error = %e, "Network error fetching collaborators");
				GithubError::Network(e)
			})?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(map_github_error(status, &body));
		}

		if has_next_page(response.headers()) {
			warn!("GitHub reports further pages of collaborators; only the first page is audited");
		}

		let body = response.text().await?;
		if body.trim().is_empty() {
			warn!("GitHub returned an empty body");
			return Err(GithubError::EmptyResponse);
		}

		Ok(body)
	}

	/// Fetch and decode the collaborator list for one repository.
	pub async fn list_collaborators(
		&self,
		owner: &str,
		repo: &str,
	) -> Result<Vec<Collaborator>, GithubError> {
		let body = self.fetch_collaborators_raw(owner, repo).await?;
		let collaborators = parse_collaborators(&body)?;

		info!(count = collaborators.len(), "Collaborators fetched");
		if collaborators.len() >= DEFAULT_PAGE_SIZE {
			warn!(
				count = collaborators.len(),
				"Collaborator count reached the default page size; totals may be undercounted"
			);
		}

		Ok(collaborators)
	}
}

/// Decode a collaborators response body.
pub fn parse_collaborators(body: &str) -> Result<Vec<Collaborator>, GithubError> {
	serde_json::from_str(body).map_err(|e| {
		error!(error = %e, "Failed to parse collaborators response");
		GithubError::InvalidResponse(format!("JSON parse error: {e}"))
	})
}

fn has_next_page(headers: &HeaderMap) -> bool {
	headers
		.get(LINK)
		.and_then(|v| v.to_str().ok())
		.map(|link| link.contains("rel=\"next\""))
		.unwrap_or(false)
}

pub(crate) fn map_github_error(status: StatusCode, body: &str) -> GithubError {
	let status_code = status.as_u16();

	match status_code {
		401 => {
			warn!(status = status_code, "Unauthorized request to GitHub");
			GithubError::Unauthorized
		}
		403 => {
			let lower = body.to_lowercase();
			if lower.contains("rate limit") || lower.contains("api rate") {
				warn!(status = status_code, "GitHub rate limit exceeded");
				GithubError::RateLimited
			} else {
				warn!(status = status_code, "Forbidden request to GitHub");
				GithubError::Forbidden
			}
		}
		404 => {
			warn!(status = status_code, "Repository not found");
			GithubError::NotFound
		}
		_ => {
			error!(status = status_code, body = %body, "GitHub API error");
			GithubError::ApiError {
				status: status_code,
				message: body.to_string(),
			}
		}
	}
}
