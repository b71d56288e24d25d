// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! collab-audit: list the collaborators of a GitHub repository by
//! permission tier and save the result to a timestamped report file.
//!
//! ```text
//! GITHUB_USERNAME=octocat GITHUB_TOKEN=ghp_... collab-audit octo-org hello-world
//! ```

use std::io;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use collab_audit_common_config::ProcessEnv;
use collab_audit_common_version::BuildInfo;
use tracing::{debug, info};

mod audit;
mod config;
mod error;
mod logging;
mod validate;

use audit::{run_audit, AuditOutcome};
use config::{AuditConfig, LoggingConfig};
use error::{AuditError, UsageError};

/// Audit repository collaborators by permission tier.
#[derive(Parser, Debug)]
#[command(
	name = "collab-audit",
	disable_help_flag = true,
	disable_version_flag = true
)]
struct Args {
	/// Repository owner (user or organization)
	owner: Option<String>,

	/// Repository name
	repo: Option<String>,
}

async fn run(args: Args) -> Result<AuditOutcome, AuditError> {
	let input = validate::validate(args.owner.as_deref(), args.repo.as_deref(), &ProcessEnv)?;
	let report_dir = std::env::current_dir()?;
	let config = AuditConfig::resolve(input, &ProcessEnv, &report_dir, Local::now())?;
	debug!(?config, "resolved configuration");

	run_audit(&config, io::stdout().lock()).await
}

fn report_failure(err: &AuditError) {
	eprintln!("Error: {err}");
	if err.is_usage() {
		eprintln!();
		eprintln!("{}", validate::usage());
	}
	if let Some(checklist) = err.troubleshooting() {
		eprintln!("{checklist}");
	}
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	logging::init_tracing(&LoggingConfig::from_env(&ProcessEnv));

	debug!(build = %BuildInfo::current(), "starting collab-audit");

	let args = match Args::try_parse() {
		Ok(args) => args,
		Err(e) => {
			let err = AuditError::from(UsageError::InvalidArguments(
				e.kind().as_str().unwrap_or("invalid arguments").to_string(),
			));
			report_failure(&err);
			return err.exit_code();
		}
	};

	match run(args).await {
		Ok(AuditOutcome::Completed {
			report_path,
			classification,
		}) => {
			info!(
				report = %report_path.display(),
				total = classification.total,
				admin = classification.admin_count,
				write = classification.write_count,
				read = classification.read_count,
				"audit completed"
			);
			ExitCode::SUCCESS
		}
		Ok(AuditOutcome::NoCollaborators) => {
			info!("audit completed with no collaborators");
			ExitCode::SUCCESS
		}
		Err(err) => {
			debug!(error = ?err, "audit failed");
			report_failure(&err);
			err.exit_code()
		}
	}
}
