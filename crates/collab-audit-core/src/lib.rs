// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Classification and reporting for repository collaborator audits.
//!
//! [`classify`] sorts a collaborator list into the Admin, Write and Read
//! tiers; [`Reporter`] renders the result to the console and the report file.

pub mod classify;
pub mod report;
pub mod repo;

pub use classify::{classify, Classification, Tier};
pub use repo::RepoRef;
pub use report::{report_file_name, ReportError, ReportFile, Reporter};
