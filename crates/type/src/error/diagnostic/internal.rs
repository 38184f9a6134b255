// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

/// Creates an internal error diagnostic with source location context
pub fn internal_with_context(reason: impl Into<String>, file: &str, line: u32, column: u32, module_path: &str) -> Diagnostic {
	let reason = reason.into();

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		message: format!("Internal error: {}", reason),
		label: Some(format!("Internal invariant violated at {}:{}:{}", file, line, column)),
		help: Some(format!(
			"This is an internal error that should never occur in normal operation.\n\
			 Module: {}\n\
			 Version: {}",
			module_path,
			env!("CARGO_PKG_VERSION")
		)),
		notes: vec!["This error indicates an internal inconsistency of the metadata cache.".to_string()],
		cause: None,
	}
}
