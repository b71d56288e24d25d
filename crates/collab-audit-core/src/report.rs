// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Console and report-file rendering of a [`Classification`].
//!
//! Every section is written to both sinks except the completion banner,
//! which only goes to the console. The header block is written to the file
//! once, before any tier output.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::{debug, info};

use crate::classify::{Classification, Tier};
use crate::repo::RepoRef;

const REPORT_EXTENSION: &str = "txt";
const REPORT_PREFIX: &str = "collaborators_report";
const RULE: &str = "========================================";

#[derive(Debug, Error)]
pub enum ReportError {
	#[error("failed to create report file {path}: {source}")]
	Create {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to write report: {0}")]
	Write(#[from] io::Error),
}

/// `collaborators_report_<YYYYMMDD>_<HHMMSS>.txt`
pub fn report_file_name(now: &DateTime<Local>) -> String {
	format!(
		"{REPORT_PREFIX}_{}.{REPORT_EXTENSION}",
		now.format("%Y%m%d_%H%M%S")
	)
}

/// The append-only report file of one run.
#[derive(Debug)]
pub struct ReportFile {
	writer: BufWriter<File>,
}

impl ReportFile {
	/// Create (or append to) the report file at `path`.
	pub fn create(path: &Path) -> Result<Self, ReportError> {
		let file = OpenOptions::new()
			.create(true)
			.append(true)
			.open(path)
			.map_err(|source| ReportError::Create {
				path: path.to_path_buf(),
				source,
			})?;

		debug!(path = %path.display(), "opened report file");
		Ok(Self {
			writer: BufWriter::new(file),
		})
	}
}

impl Write for ReportFile {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.writer.write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		self.writer.flush()
	}
}

/// Writes audit output to the console sink `O` and the report sink `F`.
pub struct Reporter<O: Write, F: Write> {
	out: O,
	file: F,
}

impl<O: Write, F: Write> Reporter<O, F> {
	pub fn new(out: O, file: F) -> Self {
		Self { out, file }
	}

	fn both(&mut self, line: &str) -> io::Result<()> {
		writeln!(self.out, "{line}")?;
		writeln!(self.file, "{line}")
	}

	/// Title, repository and generation time. File only.
	fn write_header(&mut self, repo: &RepoRef, generated_at: &DateTime<Local>) -> io::Result<()> {
		writeln!(self.file, "GitHub Repository Collaborator Audit")?;
		writeln!(self.file, "Repository: {repo}")?;
		writeln!(
			self.file,
			"Generated: {}",
			generated_at.format("%Y-%m-%d %H:%M:%S %Z")
		)?;
		writeln!(self.file, "{RULE}")
	}

	/// One tier section: header, then one login per line or the tier's
	/// "none found" sentence.
	fn write_tier(&mut self, tier: Tier, logins: &[String]) -> io::Result<()> {
		self.both("")?;
		self.both(&format!("=== {} ===", tier.label()))?;
		if logins.is_empty() {
			return self.both(tier.none_found());
		}
		for login in logins {
			self.both(login)?;
		}
		Ok(())
	}

	fn write_statistics(&mut self, classification: &Classification) -> io::Result<()> {
		self.both("")?;
		self.both("=== Statistics ===")?;
		self.both(&format!("Total collaborators: {}", classification.total))?;
		for tier in Tier::ALL {
			self.both(&format!("{}: {}", tier.stat_label(), classification.count(tier)))?;
		}
		Ok(())
	}

	/// Console only.
	fn write_completion(&mut self, report_path: &Path) -> io::Result<()> {
		writeln!(self.out)?;
		writeln!(self.out, "{RULE}")?;
		writeln!(self.out, "Audit complete. Report saved to: {}", report_path.display())?;
		writeln!(self.out, "{RULE}")
	}

	/// Header, the three tiers in order, statistics, completion banner.
	pub fn write_report(
		&mut self,
		repo: &RepoRef,
		classification: &Classification,
		generated_at: &DateTime<Local>,
		report_path: &Path,
	) -> Result<(), ReportError> {
		self.write_header(repo, generated_at)?;
		for tier in Tier::ALL {
			self.write_tier(tier, classification.bucket(tier))?;
		}
		self.write_statistics(classification)?;
		self.file.flush()?;
		self.write_completion(report_path)?;
		self.out.flush()?;

		info!(report = %report_path.display(), "report written");
		Ok(())
	}
}
