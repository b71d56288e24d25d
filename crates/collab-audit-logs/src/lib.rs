// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Log output redaction.
//!
//! Tokens are wrapped in `SecretString` everywhere they are held, so they
//! should never be formatted into a log event. [`RedactingMakeWriter`] scrubs
//! GitHub token shapes from whatever does reach the writer anyway.

mod redact;
mod redacting_writer;

pub use redact::redact;
pub use redacting_writer::{RedactingMakeWriter, RedactingWriter};
