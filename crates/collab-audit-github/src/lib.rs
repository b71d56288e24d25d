// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! GitHub REST client for collab-audit.
//!
//! Provides a typed client that fetches the collaborator list of a single
//! repository with HTTP Basic Auth. Only the first page GitHub returns is
//! read; pagination is never followed.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{parse_collaborators, GithubClient};
pub use config::GithubConfig;
pub use error::GithubError;
pub use types::{Collaborator, Permissions};
