// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Composite lookup keys for cached catalog objects.
//!
//! A key is the parts of an object's identity joined by a single horizontal
//! tab. Components are neither normalized nor escaped: callers pass
//! identifiers that are already canonical and must not contain the delimiter,
//! otherwise differently shaped inputs can produce the same key.

use std::{
	borrow::Borrow,
	fmt::{Display, Formatter},
	ops::Deref,
};

pub use partition::PartitionKey;
pub use partition_column::PartitionColumnKey;
pub use serializer::KeySerializer;
pub use table::TableKey;

mod partition;
mod partition_column;
mod serializer;
mod table;

pub const DELIMITER: char = '\t';

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CacheKey(String);

impl CacheKey {
	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

impl Deref for CacheKey {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Borrow<str> for CacheKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for CacheKey {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Display for CacheKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<CacheKey> for String {
	fn from(key: CacheKey) -> Self {
		key.0
	}
}

impl PartialEq<str> for CacheKey {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for CacheKey {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

pub trait EncodableKey {
	fn encode(&self) -> CacheKey;
}

/// `db \t table`
pub fn build_key(db: &str, table: &str) -> CacheKey {
	let mut serializer = KeySerializer::with_capacity(db.len() + table.len() + 1);
	serializer.extend_part(db).extend_part(table);
	serializer.to_cache_key()
}

/// `db \t table \t v1 \t ... \t vN`, or the table key when there are no values.
pub fn build_partition_key<V: AsRef<str>>(db: &str, table: &str, values: &[V]) -> CacheKey {
	let capacity = db.len() + table.len() + values.iter().map(|v| v.as_ref().len() + 1).sum::<usize>() + 1;
	let mut serializer = KeySerializer::with_capacity(capacity);
	serializer.extend_part(db).extend_part(table).extend_parts(values);
	serializer.to_cache_key()
}

/// The partition key suffixed with `\t column`, used for column statistics.
pub fn build_column_key<V: AsRef<str>>(db: &str, table: &str, values: &[V], column: &str) -> CacheKey {
	let capacity = db.len()
		+ table.len() + values.iter().map(|v| v.as_ref().len() + 1).sum::<usize>()
		+ column.len() + 2;
	let mut serializer = KeySerializer::with_capacity(capacity);
	serializer.extend_part(db).extend_part(table).extend_parts(values).extend_part(column);
	serializer.to_cache_key()
}
