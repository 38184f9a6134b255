// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Canonical form of a catalog identifier: surrounding whitespace removed and
/// lower-cased.
pub fn normalize_identifier(name: &str) -> String {
	IdentifierNormalization::default().apply(name)
}

/// How identifiers are canonicalized before they are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierNormalization {
	/// Strip leading and trailing whitespace.
	pub trim: bool,
	/// Fold to lower case.
	pub case_insensitive: bool,
}

impl Default for IdentifierNormalization {
	fn default() -> Self {
		Self {
			trim: true,
			case_insensitive: true,
		}
	}
}

impl IdentifierNormalization {
	/// Leaves identifiers untouched.
	pub const fn verbatim() -> Self {
		Self {
			trim: false,
			case_insensitive: false,
		}
	}

	pub fn trim(mut self, trim: bool) -> Self {
		self.trim = trim;
		self
	}

	pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
		self.case_insensitive = case_insensitive;
		self
	}

	pub fn apply(&self, name: &str) -> String {
		let name = if self.trim {
			name.trim()
		} else {
			name
		};

		if self.case_insensitive {
			name.to_lowercase()
		} else {
			name.to_string()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_normalize_identifier() {
		assert_eq!(normalize_identifier("Sales"), "sales");
		assert_eq!(normalize_identifier("  Web_Logs "), "web_logs");
		assert_eq!(normalize_identifier(""), "");
	}

	#[test]
	fn test_verbatim() {
		let normalization = IdentifierNormalization::verbatim();
		assert_eq!(normalization.apply(" Sales "), " Sales ");
	}

	#[test]
	fn test_builder() {
		let normalization = IdentifierNormalization::default().trim(false);
		assert_eq!(normalization.apply(" Sales"), " sales");

		let normalization = IdentifierNormalization::default().case_insensitive(false);
		assert_eq!(normalization.apply(" Sales"), "Sales");
	}
}
