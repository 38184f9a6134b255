// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{DescriptorOwner, FieldSchema, StorageDescriptor};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
	pub db_name: String,
	pub table_name: String,
	pub owner: Option<String>,
	pub create_time: i32,
	pub last_access_time: i32,
	pub retention: i32,
	pub descriptor: Option<StorageDescriptor>,
	pub partition_keys: Vec<FieldSchema>,
	pub parameters: BTreeMap<String, String>,
	pub table_type: Option<String>,
	pub view_original_text: Option<String>,
	pub view_expanded_text: Option<String>,
	pub temporary: bool,
}

impl Table {
	pub fn new(db_name: impl Into<String>, table_name: impl Into<String>) -> Self {
		Self {
			db_name: db_name.into(),
			table_name: table_name.into(),
			..Default::default()
		}
	}

	pub fn is_partitioned(&self) -> bool {
		!self.partition_keys.is_empty()
	}
}

impl DescriptorOwner for Table {
	fn descriptor(&self) -> Option<&StorageDescriptor> {
		self.descriptor.as_ref()
	}

	fn take_descriptor(&mut self) -> Option<StorageDescriptor> {
		self.descriptor.take()
	}

	fn set_descriptor(&mut self, descriptor: StorageDescriptor) {
		self.descriptor = Some(descriptor);
	}
}
