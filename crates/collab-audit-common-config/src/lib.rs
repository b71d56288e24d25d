// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Common configuration primitives for collab-audit.
//!
//! - [`Env`]: a lookup seam so configuration is resolved from an explicit
//!   source instead of ambient process state
//! - [`require_secret`] / [`require_value`]: the `VAR` / `VAR_FILE` convention
//!   for credentials
//! - [`SecretString`] re-exported from [`collab_audit_common_secret`]

pub mod env;

pub use collab_audit_common_secret::SecretString;

pub use env::{
	require_secret, require_value, Env, ProcessEnv,
	RequiredSecretError, SecretEnvError,
};
