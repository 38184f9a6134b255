// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Display;

use super::Diagnostic;

/// CACHE_001: a wrapper references a descriptor hash the store does not hold
pub fn descriptor_not_found(hash: impl Display) -> Diagnostic {
	Diagnostic {
		code: "CACHE_001".to_string(),
		message: format!("storage descriptor `{}` not found in descriptor store", hash),
		label: Some("unresolvable descriptor reference".to_string()),
		help: Some(
			"a cached table or partition must only reference descriptors that are published in the store"
				.to_string(),
		),
		notes: vec![
			"the descriptor was either never published or released while still referenced".to_string(),
		],
		cause: None,
	}
}

/// CACHE_002: a name filter is not a valid regular expression
pub fn invalid_pattern(pattern: &str, reason: impl Display) -> Diagnostic {
	Diagnostic {
		code: "CACHE_002".to_string(),
		message: format!("invalid name pattern `{}`", pattern),
		label: Some("pattern does not compile".to_string()),
		help: Some("use `*` to match every name, or a valid regular expression".to_string()),
		notes: vec![reason.to_string()],
		cause: None,
	}
}
