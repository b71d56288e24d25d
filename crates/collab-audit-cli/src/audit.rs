// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The audit pipeline: fetch, classify, report.

use std::io::Write;
use std::path::PathBuf;

use collab_audit_core::{classify, Classification, ReportFile, Reporter};
use collab_audit_github::{GithubClient, GithubError};
use tracing::{info, instrument, warn};

use crate::config::AuditConfig;
use crate::error::{AuditError, UsageError};

#[derive(Debug)]
pub enum AuditOutcome {
	Completed {
		report_path: PathBuf,
		classification: Classification,
	},
	/// The repository has no collaborators. No report file is created.
	NoCollaborators,
}

/// Run one audit, writing console output to `out`.
///
/// The report file is only created once a non-empty collaborator list has
/// been fetched, so a failed fetch leaves nothing behind.
#[instrument(skip_all, fields(repo = %config.repo))]
pub async fn run_audit<O: Write>(config: &AuditConfig, mut out: O) -> Result<AuditOutcome, AuditError> {
	let client = GithubClient::new(config.github.clone())
		.map_err(|e| AuditError::Usage(UsageError::InvalidConfig(e)))?;

	writeln!(out, "Fetching collaborators for {}...", config.repo)?;

	let collaborators = client
		.list_collaborators(&config.repo.owner, &config.repo.name)
		.await
		.map_err(|source| transport_error(config, source))?;

	if collaborators.is_empty() {
		info!("repository has no collaborators");
		writeln!(out, "No collaborators found for {}.", config.repo)?;
		return Ok(AuditOutcome::NoCollaborators);
	}

	let classification = classify(&collaborators);
	if !classification.unclassified.is_empty() {
		warn!(
			logins = ?classification.unclassified,
			"collaborators matched no permission tier"
		);
	}

	let mut report = ReportFile::create(&config.report_path)?;

	Reporter::new(&mut out, &mut report).write_report(
		&config.repo,
		&classification,
		&config.generated_at,
		&config.report_path,
	)?;

	Ok(AuditOutcome::Completed {
		report_path: config.report_path.clone(),
		classification,
	})
}

fn transport_error(config: &AuditConfig, source: GithubError) -> AuditError {
	AuditError::Transport {
		repo: config.repo.clone(),
		base_url: config.github.base_url().to_string(),
		source,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::Local;
	use collab_audit_common_config::SecretString;
	use collab_audit_core::{report_file_name, RepoRef};
	use collab_audit_github::GithubConfig;
	use wiremock::matchers::{method, path};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	const BODY: &str = r#"[
		{"login":"alice","permissions":{"admin":true,"push":true,"pull":true}},
		{"login":"bob","permissions":{"admin":false,"push":true,"pull":true}},
		{"login":"carol","permissions":{"admin":false,"push":false,"pull":true}}
	]"#;

	fn config_for(server: &MockServer, dir: &std::path::Path) -> AuditConfig {
		let generated_at = Local::now();
		AuditConfig {
			repo: RepoRef::new("octo-org", "hello-world"),
			github: GithubConfig::new("octocat", SecretString::new("ghp_pipeline".to_string()))
				.with_base_url(&server.uri())
				.unwrap(),
			report_path: dir.join(report_file_name(&generated_at)),
			generated_at,
		}
	}

	async fn serve(status: u16, body: &str) -> MockServer {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/repos/octo-org/hello-world/collaborators"))
			.respond_with(ResponseTemplate::new(status).set_body_string(body))
			.expect(1)
			.mount(&server)
			.await;
		server
	}

	fn report_files(dir: &std::path::Path) -> Vec<PathBuf> {
		std::fs::read_dir(dir)
			.unwrap()
			.map(|e| e.unwrap().path())
			.collect()
	}

	#[tokio::test]
	async fn completes_and_writes_report() {
		let server = serve(200, BODY).await;
		let dir = tempfile::tempdir().unwrap();
		let mut out = Vec::new();

		let outcome = run_audit(&config_for(&server, dir.path()), &mut out)
			.await
			.unwrap();

		let AuditOutcome::Completed {
			report_path,
			classification,
		} = outcome
		else {
			panic!("expected a completed audit");
		};
		assert_eq!(classification.admins, ["alice"]);
		assert_eq!(classification.writers, ["bob"]);
		assert_eq!(classification.readers, ["carol"]);

		let report = std::fs::read_to_string(&report_path).unwrap();
		assert!(report.contains("Repository: octo-org/hello-world"));
		assert!(report.contains("Total collaborators: 3"));
		assert!(!report.contains("ghp_pipeline"));

		let console = String::from_utf8(out).unwrap();
		assert!(console.contains("Audit complete. Report saved to:"));
	}

	#[tokio::test]
	async fn empty_collection_creates_no_report() {
		let server = serve(200, "[]").await;
		let dir = tempfile::tempdir().unwrap();
		let mut out = Vec::new();

		let outcome = run_audit(&config_for(&server, dir.path()), &mut out)
			.await
			.unwrap();

		assert!(matches!(outcome, AuditOutcome::NoCollaborators));
		let console = String::from_utf8(out).unwrap();
		assert!(console.contains("No collaborators found for octo-org/hello-world."));
		assert!(!console.contains("Statistics"));
		assert!(report_files(dir.path()).is_empty());
	}

	#[tokio::test]
	async fn transport_failure_creates_no_report() {
		let server = serve(404, r#"{"message":"Not Found"}"#).await;
		let dir = tempfile::tempdir().unwrap();

		let err = run_audit(&config_for(&server, dir.path()), Vec::new())
			.await
			.unwrap_err();

		assert!(matches!(
			err,
			AuditError::Transport {
				source: GithubError::NotFound,
				..
			}
		));
		assert!(report_files(dir.path()).is_empty());
	}
}
