// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{CacheKey, DELIMITER};

/// Builds a [`CacheKey`] part by part, inserting the delimiter between parts.
#[derive(Debug, Default)]
pub struct KeySerializer {
	buffer: String,
	parts: usize,
}

impl KeySerializer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buffer: String::with_capacity(capacity),
			parts: 0,
		}
	}

	pub fn extend_part(&mut self, part: &str) -> &mut Self {
		if self.parts > 0 {
			self.buffer.push(DELIMITER);
		}
		self.buffer.push_str(part);
		self.parts += 1;
		self
	}

	pub fn extend_parts<P: AsRef<str>>(&mut self, parts: &[P]) -> &mut Self {
		for part in parts {
			self.extend_part(part.as_ref());
		}
		self
	}

	/// Number of parts written so far; empty parts count.
	pub fn parts(&self) -> usize {
		self.parts
	}

	pub fn is_empty(&self) -> bool {
		self.parts == 0
	}

	pub fn to_cache_key(self) -> CacheKey {
		CacheKey(self.buffer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_first_part_has_no_leading_delimiter() {
		let mut serializer = KeySerializer::new();
		serializer.extend_part("db");
		assert_eq!(serializer.to_cache_key(), "db");
	}

	#[test]
	fn test_empty_parts_still_count() {
		let mut serializer = KeySerializer::new();
		serializer.extend_part("").extend_part("");
		assert_eq!(serializer.parts(), 2);
		assert_eq!(serializer.to_cache_key(), "\t");
	}

	#[test]
	fn test_extend_parts() {
		let mut serializer = KeySerializer::with_capacity(16);
		assert!(serializer.is_empty());
		serializer.extend_part("d").extend_parts(&["a".to_string(), "b".to_string()]);
		assert_eq!(serializer.to_cache_key(), "d\ta\tb");
	}

	#[test]
	fn test_parts_counts_parts_not_bytes() {
		let mut serializer = KeySerializer::new();
		serializer.extend_part("sales_db").extend_part("orders");
		assert_eq!(serializer.parts(), 2);
		assert_eq!(serializer.to_cache_key().len(), "sales_db\torders".len());
	}
}
