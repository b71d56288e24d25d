// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Run configuration, resolved once at startup and passed to every stage.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use collab_audit_common_config::Env;
use collab_audit_core::{report_file_name, RepoRef};
use collab_audit_github::GithubConfig;

use crate::error::UsageError;
use crate::validate::ValidatedInput;

pub const LOG_LEVEL_VAR: &str = "COLLAB_AUDIT_LOG_LEVEL";
pub const LOG_FORMAT_VAR: &str = "COLLAB_AUDIT_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
	Error,
	#[default]
	Warn,
	Info,
	Debug,
	Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
	Pretty,
	#[default]
	Compact,
	Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggingConfig {
	pub level: LogLevel,
	pub format: LogFormat,
}

impl LoggingConfig {
	/// Unknown values fall back to the defaults rather than failing the run.
	pub fn from_env<E: Env + ?Sized>(env: &E) -> Self {
		Self {
			level: parse_log_level(env.get(LOG_LEVEL_VAR).as_deref()),
			format: parse_log_format(env.get(LOG_FORMAT_VAR).as_deref()),
		}
	}
}

fn parse_log_level(s: Option<&str>) -> LogLevel {
	match s.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
		Some("error") => LogLevel::Error,
		Some("warn") => LogLevel::Warn,
		Some("info") => LogLevel::Info,
		Some("debug") => LogLevel::Debug,
		Some("trace") => LogLevel::Trace,
		_ => LogLevel::default(),
	}
}

fn parse_log_format(s: Option<&str>) -> LogFormat {
	match s.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
		Some("json") => LogFormat::Json,
		Some("pretty") => LogFormat::Pretty,
		Some("compact") => LogFormat::Compact,
		_ => LogFormat::default(),
	}
}

/// Everything one audit run needs. Built once; no stage reads the
/// environment or the clock afterwards.
#[derive(Debug, Clone)]
pub struct AuditConfig {
	pub repo: RepoRef,
	pub github: GithubConfig,
	/// Where the report goes. The file itself is only created once a
	/// non-empty collaborator list has been fetched.
	pub report_path: PathBuf,
	/// Run timestamp, shared by the file name and the report header.
	pub generated_at: DateTime<Local>,
}

impl AuditConfig {
	pub fn resolve<E: Env + ?Sized>(
		input: ValidatedInput,
		env: &E,
		report_dir: &Path,
		generated_at: DateTime<Local>,
	) -> Result<Self, UsageError> {
		let github = GithubConfig::new(input.username, input.token)
			.with_base_url_from(env)
			.map_err(UsageError::InvalidConfig)?;

		Ok(Self {
			repo: input.repo,
			github,
			report_path: report_dir.join(report_file_name(&generated_at)),
			generated_at,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use collab_audit_common_config::SecretString;
	use std::collections::HashMap;

	fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	fn input() -> ValidatedInput {
		ValidatedInput {
			repo: RepoRef::new("octo-org", "hello-world"),
			username: "octocat".to_string(),
			token: SecretString::new("ghp_config_token".to_string()),
		}
	}

	#[test]
	fn logging_defaults() {
		let config = LoggingConfig::from_env(&env_of(&[]));
		assert_eq!(config.level, LogLevel::Warn);
		assert_eq!(config.format, LogFormat::Compact);
	}

	#[test]
	fn logging_from_env_is_case_insensitive() {
		let config = LoggingConfig::from_env(&env_of(&[
			(LOG_LEVEL_VAR, "DEBUG"),
			(LOG_FORMAT_VAR, " json "),
		]));
		assert_eq!(config.level, LogLevel::Debug);
		assert_eq!(config.format, LogFormat::Json);
	}

	#[test]
	fn unknown_logging_values_fall_back() {
		let config = LoggingConfig::from_env(&env_of(&[
			(LOG_LEVEL_VAR, "loud"),
			(LOG_FORMAT_VAR, "xml"),
		]));
		assert_eq!(config, LoggingConfig::default());
	}

	fn fixed_time() -> DateTime<Local> {
		Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 1).single().unwrap()
	}

	#[test]
	fn resolve_uses_default_api() {
		let config = AuditConfig::resolve(input(), &env_of(&[]), Path::new("."), fixed_time()).unwrap();
		assert_eq!(config.github.base_url().as_str(), "https://api.github.com/");
		assert_eq!(config.repo.to_string(), "octo-org/hello-world");
	}

	#[test]
	fn resolve_fixes_report_path_up_front() {
		let dir = tempfile::tempdir().unwrap();
		let config = AuditConfig::resolve(input(), &env_of(&[]), dir.path(), fixed_time()).unwrap();
		assert_eq!(
			config.report_path,
			dir.path().join("collaborators_report_20260307_090501.txt")
		);
		assert_eq!(config.generated_at, fixed_time());
		assert!(!config.report_path.exists());
	}

	#[test]
	fn resolve_rejects_insecure_api_url() {
		let env = env_of(&[("GITHUB_API_URL", "http://github.example.com")]);
		let err = AuditConfig::resolve(input(), &env, Path::new("."), fixed_time()).unwrap_err();
		assert!(matches!(err, UsageError::InvalidConfig(_)));
	}

	#[test]
	fn debug_output_redacts_token() {
		let config = AuditConfig::resolve(input(), &env_of(&[]), Path::new("."), fixed_time()).unwrap();
		let debug = format!("{config:?}");
		assert!(!debug.contains("ghp_config_token"));
	}
}
