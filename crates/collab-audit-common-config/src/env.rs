// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment lookup and secret loading.
//!
//! Secrets can be supplied directly (`GITHUB_TOKEN=...`) or through a file
//! reference (`GITHUB_TOKEN_FILE=/run/secrets/github_token`), the convention
//! used by Docker and Kubernetes secret mounts.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use collab_audit_common_secret::Secret;
use thiserror::Error;
use tracing::debug;

/// Source of configuration values keyed by variable name.
pub trait Env {
	fn get(&self, key: &str) -> Option<String>;
}

/// Reads from the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
	fn get(&self, key: &str) -> Option<String> {
		std::env::var(key).ok()
	}
}

impl Env for HashMap<String, String> {
	fn get(&self, key: &str) -> Option<String> {
		HashMap::get(self, key).cloned()
	}
}

/// Errors that can occur when loading secrets.
#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Error returned when a required value is absent or blank.
#[derive(Debug, Error)]
pub enum RequiredSecretError {
	#[error("{var} is not set")]
	Missing { var: String },

	#[error("{var} is set but empty")]
	Empty { var: String },

	#[error(transparent)]
	Load(#[from] SecretEnvError),
}

/// Load a secret using the `VAR` / `VAR_FILE` convention.
///
/// `{var}_FILE` wins over `{var}`. A single trailing newline is stripped from
/// file content. Returns `Ok(None)` when neither is set.
fn load_secret<E: Env + ?Sized>(
	env: &E,
	var: &str,
) -> Result<Option<Secret<String>>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Some(path_str) = env.get(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(&path_str);
		let content = fs::read_to_string(&path).map_err(|source| SecretEnvError::Io {
			path: path.clone(),
			source,
		})?;

		debug!(var = %file_var, "loaded secret from file");
		let secret = content.strip_suffix('\n').unwrap_or(&content).to_string();
		return Ok(Some(Secret::new(secret)));
	}

	Ok(env.get(var).map(Secret::new))
}

/// Load a secret that must be present and non-blank.
pub fn require_secret<E: Env + ?Sized>(
	env: &E,
	var: &str,
) -> Result<Secret<String>, RequiredSecretError> {
	let secret = load_secret(env, var)?.ok_or_else(|| RequiredSecretError::Missing {
		var: var.to_string(),
	})?;

	if secret.is_blank() {
		return Err(RequiredSecretError::Empty {
			var: var.to_string(),
		});
	}

	Ok(secret)
}

/// Load a plain (non-secret) value that must be present and non-blank.
/// Surrounding whitespace is stripped.
pub fn require_value<E: Env + ?Sized>(env: &E, var: &str) -> Result<String, RequiredSecretError> {
	let value = env.get(var).ok_or_else(|| RequiredSecretError::Missing {
		var: var.to_string(),
	})?;

	let value = value.trim();
	if value.is_empty() {
		return Err(RequiredSecretError::Empty {
			var: var.to_string(),
		});
	}

	Ok(value.to_string())
}
