// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Input validation: positional arguments and credentials.
//!
//! Runs before any network access or file creation. JSON decoding is
//! compiled into the binary, so there is no runtime dependency to probe.

use collab_audit_common_config::{require_secret, require_value, Env, SecretString};
use collab_audit_core::RepoRef;
use collab_audit_github::config::{TOKEN_VAR, USERNAME_VAR};

use crate::error::UsageError;

/// Validated positional arguments and credentials.
#[derive(Debug)]
pub struct ValidatedInput {
	pub repo: RepoRef,
	pub username: String,
	pub token: SecretString,
}

pub fn usage() -> String {
	format!(
		"Usage: collab-audit <owner> <repo-name>\n\
		 \n\
		 Examples:\n  \
		 collab-audit octocat hello-world\n  \
		 collab-audit my-org my-private-repo\n\
		 \n\
		 Required environment variables:\n  \
		 {USERNAME_VAR}  GitHub account used for authentication\n  \
		 {TOKEN_VAR}     personal access token ({TOKEN_VAR}_FILE may point to a file instead)"
	)
}

/// GitHub account and repository names use `[A-Za-z0-9._-]`. `.` and `..`
/// are never valid names.
fn check_name(arg: &'static str, value: &str) -> Result<(), UsageError> {
	if value.is_empty() {
		return Err(UsageError::EmptyArgument(arg));
	}
	let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');
	if matches!(value, "." | "..") || !value.chars().all(allowed) {
		return Err(UsageError::InvalidName {
			arg,
			value: value.to_string(),
		});
	}
	Ok(())
}

/// Check arguments first, then credentials. The first failure wins.
pub fn validate<E: Env + ?Sized>(
	owner: Option<&str>,
	repo: Option<&str>,
	env: &E,
) -> Result<ValidatedInput, UsageError> {
	let (owner, repo) = match (owner, repo) {
		(Some(owner), Some(repo)) => (owner.trim(), repo.trim()),
		_ => return Err(UsageError::MissingArguments),
	};
	check_name("owner", owner)?;
	check_name("repo-name", repo)?;

	let username = require_value(env, USERNAME_VAR)?;
	let token = require_secret(env, TOKEN_VAR)?;

	Ok(ValidatedInput {
		repo: RepoRef::new(owner, repo),
		username,
		token,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	fn credentials() -> HashMap<String, String> {
		env_of(&[(USERNAME_VAR, "octocat"), (TOKEN_VAR, "ghp_validate_token")])
	}

	#[test]
	fn accepts_complete_input() {
		let input = validate(Some("octo-org"), Some("hello-world"), &credentials()).unwrap();
		assert_eq!(input.repo, RepoRef::new("octo-org", "hello-world"));
		assert_eq!(input.username, "octocat");
		assert_eq!(input.token.expose(), "ghp_validate_token");
	}

	#[test]
	fn rejects_missing_arguments() {
		for (owner, repo) in [(None, None), (Some("octo-org"), None)] {
			let err = validate(owner, repo, &credentials()).unwrap_err();
			assert!(matches!(err, UsageError::MissingArguments));
		}
	}

	#[test]
	fn rejects_empty_arguments() {
		let err = validate(Some(""), Some("repo"), &credentials()).unwrap_err();
		assert!(matches!(err, UsageError::EmptyArgument("owner")));
		let err = validate(Some("owner"), Some("  "), &credentials()).unwrap_err();
		assert!(matches!(err, UsageError::EmptyArgument("repo-name")));
	}

	#[test]
	fn rejects_path_like_names() {
		for (owner, repo) in [
			("octo-org", ".."),
			("..", "hello-world"),
			(".", "hello-world"),
			("octo-org", "a/b"),
			("octo org", "hello-world"),
			("octo-org", "repo?x=1"),
		] {
			let err = validate(Some(owner), Some(repo), &credentials()).unwrap_err();
			assert!(
				matches!(err, UsageError::InvalidName { .. }),
				"{owner}/{repo} gave {err:?}"
			);
		}
	}

	#[test]
	fn accepts_dots_and_underscores_inside_names() {
		let input = validate(Some("octo-org"), Some("my_repo.rs"), &credentials()).unwrap();
		assert_eq!(input.repo.name, "my_repo.rs");
	}

	#[test]
	fn username_is_trimmed() {
		let env = env_of(&[(USERNAME_VAR, " octocat "), (TOKEN_VAR, "ghp_x")]);
		let input = validate(Some("o"), Some("r"), &env).unwrap();
		assert_eq!(input.username, "octocat");
	}

	/// Arguments are checked before credentials.
	#[test]
	fn argument_errors_win_over_credential_errors() {
		let err = validate(None, None, &env_of(&[])).unwrap_err();
		assert!(matches!(err, UsageError::MissingArguments));
	}

	#[test]
	fn rejects_missing_or_empty_credentials() {
		let no_token = env_of(&[(USERNAME_VAR, "octocat")]);
		let err = validate(Some("o"), Some("r"), &no_token).unwrap_err();
		assert!(matches!(err, UsageError::MissingCredentials(_)));
		assert!(err.to_string().contains(TOKEN_VAR));

		let empty_user = env_of(&[(USERNAME_VAR, ""), (TOKEN_VAR, "ghp_x")]);
		let err = validate(Some("o"), Some("r"), &empty_user).unwrap_err();
		assert!(err.to_string().contains(USERNAME_VAR));
	}

	#[test]
	fn usage_lists_examples_and_variables() {
		let text = usage();
		assert!(text.contains("collab-audit <owner> <repo-name>"));
		assert!(text.contains("collab-audit octocat hello-world"));
		assert!(text.contains("collab-audit my-org my-private-repo"));
		assert!(text.contains("GITHUB_USERNAME"));
		assert!(text.contains("GITHUB_TOKEN"));
	}
}
