// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{DescriptorOwner, StorageDescriptor};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
	pub db_name: String,
	pub table_name: String,
	/// Partition values in the positional order of the table's partition keys.
	pub values: Vec<String>,
	pub create_time: i32,
	pub last_access_time: i32,
	pub descriptor: Option<StorageDescriptor>,
	pub parameters: BTreeMap<String, String>,
}

impl Partition {
	pub fn new<V: Into<String>>(
		db_name: impl Into<String>,
		table_name: impl Into<String>,
		values: impl IntoIterator<Item = V>,
	) -> Self {
		Self {
			db_name: db_name.into(),
			table_name: table_name.into(),
			values: values.into_iter().map(Into::into).collect(),
			..Default::default()
		}
	}
}

impl DescriptorOwner for Partition {
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
