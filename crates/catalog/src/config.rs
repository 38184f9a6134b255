// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metacache_core::util::identifier::IdentifierNormalization;
use serde::{Deserialize, Serialize};

/// Configuration for [`CatalogCache`](crate::CatalogCache).
///
/// Deserializable so that a host can embed it in its own configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogCacheConfig {
	/// How names are canonicalized before they are tested against a filter.
	pub normalization: IdentifierNormalization,
	/// Reject malformed filters with `CACHE_002` instead of matching nothing.
	///
	/// Default: false
	pub strict_patterns: bool,
}

impl CatalogCacheConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn normalization(mut self, normalization: IdentifierNormalization) -> Self {
		self.normalization = normalization;
		self
	}

	pub fn strict_patterns(mut self, strict: bool) -> Self {
		self.strict_patterns = strict;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default() {
		let config = CatalogCacheConfig::new();
		assert_eq!(config.normalization, IdentifierNormalization::default());
		assert!(!config.strict_patterns);
	}

	#[test]
	fn test_deserialize_partial() {
		let config: CatalogCacheConfig =
			serde_json::from_str(r#"{ "normalization": { "case_insensitive": false } }"#).unwrap();

		assert!(config.normalization.trim);
		assert!(!config.normalization.case_insensitive);
		assert!(!config.strict_patterns);
	}

	#[test]
	fn test_deserialize_empty() {
		let config: CatalogCacheConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, CatalogCacheConfig::default());
	}

	#[test]
	fn test_builder() {
		let config = CatalogCacheConfig::new().strict_patterns(true).normalization(IdentifierNormalization::verbatim());
		assert!(config.strict_patterns);
		assert_eq!(config.normalization, IdentifierNormalization::verbatim());
	}
}
