// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::{CacheKey, EncodableKey, TableKey, build_partition_key};
use crate::interface::catalog::Partition;

/// Identifies a partition: the table key followed by the partition values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartitionKey {
	pub table: TableKey,
	pub values: Vec<String>,
}

impl PartitionKey {
	pub fn new<V: Into<String>>(table: TableKey, values: impl IntoIterator<Item = V>) -> Self {
		Self {
			table,
			values: values.into_iter().map(Into::into).collect(),
		}
	}

	pub fn encoded<V: AsRef<str>>(db: &str, table: &str, values: &[V]) -> CacheKey {
		build_partition_key(db, table, values)
	}

	pub fn of(partition: &Partition) -> Self {
		Self {
			table: TableKey::new(&partition.db_name, &partition.table_name),
			values: partition.values.clone(),
		}
	}
}

impl EncodableKey for PartitionKey {
	fn encode(&self) -> CacheKey {
		build_partition_key(&self.table.db, &self.table.table, &self.values)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_encode() {
		let key = PartitionKey::new(TableKey::new("d", "t"), ["2020", "01"]);
		assert_eq!(key.encode(), "d\tt\t2020\t01");
	}

	#[test]
	fn test_encode_without_values_matches_table() {
		let table = TableKey::new("d", "t");
		let key = PartitionKey::new(table.clone(), Vec::<String>::new());
		assert_eq!(key.encode(), table.encode());
	}

	#[test]
	fn test_of_partition() {
		let partition = Partition::new("d", "t", ["2021"]);
		let key = PartitionKey::of(&partition);
		assert_eq!(key.encode(), PartitionKey::encoded("d", "t", &["2021"]));
	}
}
