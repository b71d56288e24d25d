// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Run-terminating errors and how they are shown to the operator.

use std::io;
use std::process::ExitCode;

use collab_audit_common_config::{RequiredSecretError, SecretEnvError};
use collab_audit_core::{RepoRef, ReportError};
use collab_audit_github::GithubError;
use thiserror::Error;

/// Problems with the invocation itself. Nothing has been fetched or written.
#[derive(Debug, Error)]
pub enum UsageError {
	#[error("missing required arguments: <owner> <repo-name>")]
	MissingArguments,

	#[error("argument <{0}> must not be empty")]
	EmptyArgument(&'static str),

	#[error("argument <{arg}> is not a valid GitHub name: '{value}'")]
	InvalidName { arg: &'static str, value: String },

	#[error("{0}")]
	InvalidArguments(String),

	#[error("GitHub credentials not set: {0}")]
	MissingCredentials(RequiredSecretError),

	#[error("failed to load GitHub credentials: {0}")]
	CredentialLoad(SecretEnvError),

	#[error("invalid configuration: {0}")]
	InvalidConfig(GithubError),
}

#[derive(Debug, Error)]
pub enum AuditError {
	#[error(transparent)]
	Usage(#[from] UsageError),

	#[error("failed to fetch collaborators for {repo}: {source}")]
	Transport {
		repo: RepoRef,
		base_url: String,
		#[source]
		source: GithubError,
	},

	#[error(transparent)]
	Report(#[from] ReportError),

	#[error("failed to write output: {0}")]
	Output(#[from] io::Error),
}

impl From<RequiredSecretError> for UsageError {
	fn from(err: RequiredSecretError) -> Self {
		match err {
			RequiredSecretError::Load(load) => UsageError::CredentialLoad(load),
			other => UsageError::MissingCredentials(other),
		}
	}
}

impl AuditError {
	/// Every error ends the run with status 1.
	pub fn exit_code(&self) -> ExitCode {
		ExitCode::FAILURE
	}

	pub fn is_usage(&self) -> bool {
		matches!(self, AuditError::Usage(_))
	}

	/// Checklist printed after a failed fetch.
	pub fn troubleshooting(&self) -> Option<String> {
		match self {
			AuditError::Transport { repo, base_url, .. } => Some(format!(
				"Please check:\n  \
				 1. The repository {repo} exists and the owner and name are spelled correctly\n  \
				 2. The token has permission to read collaborators (the `repo` scope, or admin access to {repo})\n  \
				 3. Network connectivity to {base_url}"
			)),
			_ => None,
		}
	}
}
