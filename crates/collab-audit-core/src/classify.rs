// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Permission-tier classification.
//!
//! Each tier has its own predicate over the permission flags and every
//! collaborator is tested against all three independently:
//!
//! | Tier  | Predicate                  |
//! |-------|----------------------------|
//! | Admin | `admin`                    |
//! | Write | `push && !admin`           |
//! | Read  | `pull && !push`            |
//!
//! The buckets are therefore not a true partition. A collaborator with
//! `admin` set but neither `push` nor a pull-only grant lands only in Admin,
//! and one with `admin && pull && !push` lands in both Admin and Read.

use collab_audit_github::{Collaborator, Permissions};
use tracing::debug;

/// Permission tier, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
	Admin,
	Write,
	Read,
}

impl Tier {
	/// Every tier in the fixed report order.
	pub const ALL: [Tier; 3] = [Tier::Admin, Tier::Write, Tier::Read];

	/// Whether `permissions` satisfies this tier's predicate.
	pub fn matches(self, permissions: &Permissions) -> bool {
		match self {
			Tier::Admin => permissions.admin,
			Tier::Write => permissions.push && !permissions.admin,
			Tier::Read => permissions.pull && !permissions.push,
		}
	}

	/// Human label used in section headers.
	pub fn label(self) -> &'static str {
		match self {
			Tier::Admin => "Admin Access",
			Tier::Write => "Write Access",
			Tier::Read => "Read-Only Access",
		}
	}

	/// Sentence reported when the bucket is empty.
	pub fn none_found(self) -> &'static str {
		match self {
			Tier::Admin => "No users with admin access found.",
			Tier::Write => "No users with write access found.",
			Tier::Read => "No users with read-only access found.",
		}
	}

	/// Label used on the statistics line.
	pub fn stat_label(self) -> &'static str {
		match self {
			Tier::Admin => "Admin users",
			Tier::Write => "Write users",
			Tier::Read => "Read-only users",
		}
	}
}

/// Logins per tier plus aggregate counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
	pub admins: Vec<String>,
	pub writers: Vec<String>,
	pub readers: Vec<String>,
	pub total: usize,
	pub admin_count: usize,
	pub write_count: usize,
	pub read_count: usize,
	/// Logins that matched none of the three predicates.
	pub unclassified: Vec<String>,
}

impl Classification {
	pub fn bucket(&self, tier: Tier) -> &[String] {
		match tier {
			Tier::Admin => &self.admins,
			Tier::Write => &self.writers,
			Tier::Read => &self.readers,
		}
	}

	pub fn count(&self, tier: Tier) -> usize {
		match tier {
			Tier::Admin => self.admin_count,
			Tier::Write => self.write_count,
			Tier::Read => self.read_count,
		}
	}

	/// Sum of the three tier counts. Exceeds `total` when a collaborator is
	/// both Admin and Read.
	pub fn classified_count(&self) -> usize {
		self.admin_count + self.write_count + self.read_count
	}
}

/// Classify `collaborators`, keeping source order inside every bucket.
pub fn classify(collaborators: &[Collaborator]) -> Classification {
	let bucket = |tier: Tier| -> Vec<String> {
		collaborators
			.iter()
			.filter(|c| tier.matches(&c.permissions))
			.map(|c| c.login.clone())
			.collect()
	};
	let count = |tier: Tier| collaborators.iter().filter(|c| tier.matches(&c.permissions)).count();

	let unclassified: Vec<String> = collaborators
		.iter()
		.filter(|c| !Tier::ALL.iter().any(|t| t.matches(&c.permissions)))
		.map(|c| c.login.clone())
		.collect();

	let classification = Classification {
		admins: bucket(Tier::Admin),
		writers: bucket(Tier::Write),
		readers: bucket(Tier::Read),
		total: collaborators.len(),
		admin_count: count(Tier::Admin),
		write_count: count(Tier::Write),
		read_count: count(Tier::Read),
		unclassified,
	};

	debug!(
		total = classification.total,
		admin = classification.admin_count,
		write = classification.write_count,
		read = classification.read_count,
		unclassified = classification.unclassified.len(),
		"classified collaborators"
	);

	classification
}
