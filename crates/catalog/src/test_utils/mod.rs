// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeMap;

use metacache_core::interface::catalog::{FieldSchema, Partition, SerDeInfo, StorageDescriptor, Table};

pub fn orc_descriptor() -> StorageDescriptor {
	StorageDescriptor {
		columns: vec![
			FieldSchema::new("id", "bigint"),
			FieldSchema::new("customer", "string"),
			FieldSchema::new("amount", "decimal(10,2)"),
		],
		input_format: Some("org.apache.hadoop.hive.ql.io.orc.OrcInputFormat".to_string()),
		output_format: Some("org.apache.hadoop.hive.ql.io.orc.OrcOutputFormat".to_string()),
		num_buckets: -1,
		serde_info: Some(SerDeInfo {
			name: None,
			serialization_lib: Some("org.apache.hadoop.hive.ql.io.orc.OrcSerde".to_string()),
			parameters: BTreeMap::from([("serialization.format".to_string(), "1".to_string())]),
		}),
		..Default::default()
	}
}

pub fn parquet_descriptor() -> StorageDescriptor {
	StorageDescriptor {
		columns: vec![FieldSchema::new("id", "bigint"), FieldSchema::new("payload", "string")],
		input_format: Some("org.apache.hadoop.hive.ql.io.parquet.MapredParquetInputFormat".to_string()),
		output_format: Some("org.apache.hadoop.hive.ql.io.parquet.MapredParquetOutputFormat".to_string()),
		num_buckets: -1,
		serde_info: Some(SerDeInfo {
			name: None,
			serialization_lib: Some(
				"org.apache.hadoop.hive.ql.io.parquet.serde.ParquetHiveSerDe".to_string(),
			),
			parameters: BTreeMap::new(),
		}),
		..Default::default()
	}
}

/// A table stored as ORC under `/warehouse/<db>.db/<table>`, carrying one
/// owner-specific descriptor parameter.
pub fn create_test_table(db: &str, table: &str) -> Table {
	let mut descriptor = orc_descriptor();
	descriptor.location = Some(format!("/warehouse/{}.db/{}", db, table));
	descriptor.parameters.insert("owner_param".to_string(), table.to_string());

	Table {
		owner: Some("hive".to_string()),
		create_time: 1_600_000_000,
		table_type: Some("MANAGED_TABLE".to_string()),
		descriptor: Some(descriptor),
		parameters: BTreeMap::from([("numFiles".to_string(), "1".to_string())]),
		..Table::new(db, table)
	}
}

/// A partition stored as ORC under `/warehouse/<db>.db/<table>/<v1>/.../<vN>`.
pub fn create_test_partition(db: &str, table: &str, values: &[&str]) -> Partition {
	let mut descriptor = orc_descriptor();
	descriptor.location = Some(format!("/warehouse/{}.db/{}/{}", db, table, values.join("/")));

	Partition {
		create_time: 1_600_000_000,
		descriptor: Some(descriptor),
		..Partition::new(db, table, values.iter().copied())
	}
}
