// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use dashmap::DashMap;
use metacache_core::interface::catalog::{DescriptorHash, StorageDescriptor};
use metacache_type::{error, error::diagnostic::cache::descriptor_not_found};
use tracing::{instrument, trace, warn};

use crate::{
	Result,
	store::{DescriptorPublisher, DescriptorStore},
};

#[derive(Debug)]
struct SharedDescriptor {
	descriptor: Arc<StorageDescriptor>,
	refs: usize,
}

/// In-memory, reference-counted descriptor store.
///
/// Each distinct shareable layout is held once. Publishing an equal layout
/// again only bumps its reference count; the entry is dropped when the last
/// reference is released.
#[derive(Debug, Default)]
pub struct MaterializedDescriptors {
	descriptors: DashMap<DescriptorHash, SharedDescriptor>,
}

impl MaterializedDescriptors {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn contains(&self, hash: DescriptorHash) -> bool {
		self.descriptors.contains_key(&hash)
	}

	/// Number of owners referencing `hash`, zero when it is not stored.
	pub fn ref_count(&self, hash: DescriptorHash) -> usize {
		self.descriptors.get(&hash).map(|entry| entry.refs).unwrap_or(0)
	}

	/// Number of distinct descriptors held.
	pub fn len(&self) -> usize {
		self.descriptors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.descriptors.is_empty()
	}
}

impl DescriptorStore for MaterializedDescriptors {
	fn get(&self, hash: DescriptorHash) -> Result<Arc<StorageDescriptor>> {
		self.descriptors
			.get(&hash)
			.map(|entry| Arc::clone(&entry.descriptor))
			.ok_or_else(|| error!(descriptor_not_found(hash)))
	}
}

impl DescriptorPublisher for MaterializedDescriptors {
	#[instrument(name = "catalog::descriptor::publish", level = "trace", skip(self, descriptor))]
	fn publish(&self, mut descriptor: StorageDescriptor) -> Result<DescriptorHash> {
		descriptor.detach_owner_fields();
		let hash = DescriptorHash::of(&descriptor)?;

		let mut entry = self.descriptors.entry(hash).or_insert_with(|| SharedDescriptor {
			descriptor: Arc::new(descriptor),
			refs: 0,
		});
		entry.refs += 1;
		trace!(%hash, refs = entry.refs, "descriptor published");

		Ok(hash)
	}

	#[instrument(name = "catalog::descriptor::release", level = "trace", skip(self))]
	fn release(&self, hash: DescriptorHash) -> bool {
		match self.descriptors.get_mut(&hash) {
			Some(mut entry) => {
				entry.refs = entry.refs.saturating_sub(1);
				trace!(%hash, refs = entry.refs, "descriptor released");
				if entry.refs > 0 {
					return true;
				}
			}
			None => {
				warn!(%hash, "release of unknown descriptor");
				return false;
			}
		}

		// A concurrent publish may have revived the entry in between.
		self.descriptors.remove_if(&hash, |_, entry| entry.refs == 0);
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::{orc_descriptor, parquet_descriptor};

	#[test]
	fn test_publish_and_get() {
		let store = MaterializedDescriptors::new();
		let hash = store.publish(orc_descriptor()).unwrap();

		let found = store.get(hash).unwrap();
		assert_eq!(found.input_format, orc_descriptor().input_format);
		assert_eq!(store.len(), 1);
		assert_eq!(store.ref_count(hash), 1);
	}

	#[test]
	fn test_get_unknown_hash() {
		let store = MaterializedDescriptors::new();
		let err = store.get(DescriptorHash::from(42u128)).unwrap_err();

		assert_eq!(err.code, "CACHE_001");
		assert!(err.message.contains("0000000000000000000000000000002a"));
	}

	#[test]
	fn test_publish_deduplicates_shared_layout() {
		let store = MaterializedDescriptors::new();

		let mut a = orc_descriptor();
		a.location = Some("/warehouse/a".to_string());
		a.parameters.insert("transient_lastDdlTime".to_string(), "1".to_string());
		let mut b = orc_descriptor();
		b.location = Some("/warehouse/b".to_string());

		let hash_a = store.publish(a).unwrap();
		let hash_b = store.publish(b).unwrap();

		assert_eq!(hash_a, hash_b);
		assert_eq!(store.len(), 1);
		assert_eq!(store.ref_count(hash_a), 2);
	}

	#[test]
	fn test_published_descriptor_has_no_owner_fields() {
		let store = MaterializedDescriptors::new();
		let mut sd = orc_descriptor();
		sd.location = Some("/warehouse/a".to_string());
		sd.parameters.insert("k".to_string(), "v".to_string());

		let hash = store.publish(sd).unwrap();
		let shared = store.get(hash).unwrap();

		assert!(shared.location.is_none());
		assert!(shared.parameters.is_empty());
	}

	#[test]
	fn test_distinct_layouts() {
		let store = MaterializedDescriptors::new();
		let orc = store.publish(orc_descriptor()).unwrap();
		let parquet = store.publish(parquet_descriptor()).unwrap();

		assert_ne!(orc, parquet);
		assert_eq!(store.len(), 2);
	}

	#[test]
	fn test_release_removes_at_zero() {
		let store = MaterializedDescriptors::new();
		let hash = store.publish(orc_descriptor()).unwrap();
		store.publish(orc_descriptor()).unwrap();

		assert!(store.release(hash));
		assert!(store.contains(hash));
		assert_eq!(store.ref_count(hash), 1);

		assert!(store.release(hash));
		assert!(!store.contains(hash));
		assert_eq!(store.ref_count(hash), 0);
		assert!(store.is_empty());
	}

	#[test]
	fn test_release_unknown() {
		let store = MaterializedDescriptors::new();
		assert!(!store.release(DescriptorHash::from(7u128)));
	}

	#[test]
	fn test_republish_after_release() {
		let store = MaterializedDescriptors::new();
		let hash = store.publish(orc_descriptor()).unwrap();
		store.release(hash);

		assert!(store.get(hash).is_err());
		assert_eq!(store.publish(orc_descriptor()).unwrap(), hash);
		assert!(store.get(hash).is_ok());
	}
}
