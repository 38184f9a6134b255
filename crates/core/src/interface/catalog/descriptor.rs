// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::BTreeMap,
	fmt::{Display, Formatter},
};

use metacache_type::{
	Result,
	hash::{Hash128, xxh3_128},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
	pub name: String,
	pub data_type: String,
	pub comment: Option<String>,
}

impl FieldSchema {
	pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			data_type: data_type.into(),
			comment: None,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerDeInfo {
	pub name: Option<String>,
	pub serialization_lib: Option<String>,
	pub parameters: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
	Ascending,
	Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
	pub column: String,
	pub order: SortOrder,
}

impl Order {
	pub fn asc(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			order: SortOrder::Ascending,
		}
	}

	pub fn desc(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			order: SortOrder::Descending,
		}
	}
}

/// Skew information: the skewed columns, their skewed value tuples and where
/// each value tuple is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkewedInfo {
	pub skewed_column_names: Vec<String>,
	pub skewed_column_values: Vec<Vec<String>>,
	pub skewed_column_value_locations: BTreeMap<Vec<String>, String>,
}

/// Physical layout of a table or partition.
///
/// `location` and `parameters` belong to the owning entity even though they
/// live in this structure; everything else may be shared between owners.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageDescriptor {
	pub columns: Vec<FieldSchema>,
	pub location: Option<String>,
	pub input_format: Option<String>,
	pub output_format: Option<String>,
	pub compressed: bool,
	pub num_buckets: i32,
	pub serde_info: Option<SerDeInfo>,
	pub bucket_columns: Option<Vec<String>>,
	pub sort_columns: Option<Vec<Order>>,
	pub parameters: BTreeMap<String, String>,
	pub skewed_info: Option<SkewedInfo>,
	pub stored_as_sub_directories: bool,
}

impl StorageDescriptor {
	/// Replaces unset bucket, sort and skew fields with empty values.
	pub fn normalize(&mut self) {
		if self.bucket_columns.is_none() {
			self.bucket_columns = Some(Vec::new());
		}
		if self.sort_columns.is_none() {
			self.sort_columns = Some(Vec::new());
		}
		if self.skewed_info.is_none() {
			self.skewed_info = Some(SkewedInfo::default());
		}
	}

	/// Removes the per-owner fields, leaving only the shareable layout.
	pub fn detach_owner_fields(&mut self) -> (Option<String>, BTreeMap<String, String>) {
		(self.location.take(), std::mem::take(&mut self.parameters))
	}
}

/// Content address of a shared [`StorageDescriptor`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptorHash(pub Hash128);

impl DescriptorHash {
	/// Hashes the shareable part of a descriptor.
	///
	/// `location` and `parameters` are excluded, so descriptors that differ
	/// only in those fields share one address.
	pub fn of(descriptor: &StorageDescriptor) -> Result<Self> {
		let bytes = if descriptor.location.is_none() && descriptor.parameters.is_empty() {
			postcard::to_allocvec(descriptor)?
		} else {
			let mut shared = descriptor.clone();
			shared.detach_owner_fields();
			postcard::to_allocvec(&shared)?
		};
		Ok(Self(xxh3_128(&bytes)))
	}
}

impl From<u128> for DescriptorHash {
	fn from(value: u128) -> Self {
		Self(Hash128(value))
	}
}

impl Display for DescriptorHash {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}
