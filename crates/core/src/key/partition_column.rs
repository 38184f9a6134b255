// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{CacheKey, EncodableKey, PartitionKey, build_column_key};

/// Identifies column statistics of a partition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartitionColumnKey {
	pub partition: PartitionKey,
	pub column: String,
}

impl PartitionColumnKey {
	pub fn new(partition: PartitionKey, column: impl Into<String>) -> Self {
		Self {
			partition,
			column: column.into(),
		}
	}

	pub fn encoded<V: AsRef<str>>(db: &str, table: &str, values: &[V], column: &str) -> CacheKey {
		build_column_key(db, table, values, column)
	}
}

impl EncodableKey for PartitionColumnKey {
	fn encode(&self) -> CacheKey {
		let table = &self.partition.table;
		build_column_key(&table.db, &table.table, &self.partition.values, &self.column)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::key::TableKey;

	#[test]
	fn test_encode() {
		let partition = PartitionKey::new(TableKey::new("d", "t"), ["2020", "01"]);
		let key = PartitionColumnKey::new(partition, "colA");
		assert_eq!(key.encode(), "d\tt\t2020\t01\tcolA");
	}

	#[test]
	fn test_distinct_columns_distinct_keys() {
		let partition = PartitionKey::new(TableKey::new("d", "t"), ["2020"]);
		let a = PartitionColumnKey::new(partition.clone(), "a").encode();
		let b = PartitionColumnKey::new(partition, "b").encode();
		assert_ne!(a, b);
	}
}
