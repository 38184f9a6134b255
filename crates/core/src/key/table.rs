// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{CacheKey, EncodableKey, build_key};
use crate::interface::catalog::Table;

/// Identifies a table: `db \t table`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableKey {
	pub db: String,
	pub table: String,
}

impl TableKey {
	pub fn new(db: impl Into<String>, table: impl Into<String>) -> Self {
		Self {
			db: db.into(),
			table: table.into(),
		}
	}

	pub fn encoded(db: &str, table: &str) -> CacheKey {
		build_key(db, table)
	}

	pub fn of(table: &Table) -> Self {
		Self::new(&table.db_name, &table.table_name)
	}
}

impl EncodableKey for TableKey {
	fn encode(&self) -> CacheKey {
		build_key(&self.db, &self.table)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_encode() {
		let key = TableKey::new("sales", "orders");
		assert_eq!(key.encode(), "sales\torders");
		assert_eq!(key.encode(), TableKey::encoded("sales", "orders"));
	}

	#[test]
	fn test_of_table() {
		let table = Table::new("sales", "orders");
		assert_eq!(TableKey::of(&table), TableKey::new("sales", "orders"));
	}
}
