// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tracing setup. Logs go to stderr so stdout carries only audit output.

use collab_audit_logs::RedactingMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LogLevel, LoggingConfig};

const CRATES: [&str; 4] = [
	"collab_audit",
	"collab_audit_core",
	"collab_audit_github",
	"collab_audit_common_config",
];

fn log_level_to_tracing(level: LogLevel) -> tracing::Level {
	match level {
		LogLevel::Trace => tracing::Level::TRACE,
		LogLevel::Debug => tracing::Level::DEBUG,
		LogLevel::Info => tracing::Level::INFO,
		LogLevel::Warn => tracing::Level::WARN,
		LogLevel::Error => tracing::Level::ERROR,
	}
}

/// `RUST_LOG` wins over the configured level when set.
fn default_directives(level: LogLevel) -> String {
	let level = log_level_to_tracing(level);
	CRATES
		.iter()
		.map(|krate| format!("{krate}={level}"))
		.collect::<Vec<_>>()
		.join(",")
}

pub fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directives(logging.level)));

	let redacting_writer = RedactingMakeWriter::new(std::io::stderr);

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(redacting_writer))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(redacting_writer))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(redacting_writer))
				.init();
		}
	}
}
