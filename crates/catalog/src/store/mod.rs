// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use metacache_core::interface::catalog::{DescriptorHash, StorageDescriptor};

use crate::Result;

/// Read access to content-addressed storage descriptors.
///
/// Implementations must tolerate concurrent readers. The returned descriptor is
/// the canonical shared copy; callers clone it before changing anything.
pub trait DescriptorStore: Send + Sync {
	/// Resolves a hash, failing with `CACHE_001` when it is unknown.
	fn get(&self, hash: DescriptorHash) -> Result<Arc<StorageDescriptor>>;
}

/// A descriptor store that also accepts new descriptors.
pub trait DescriptorPublisher: DescriptorStore {
	/// Stores the shareable part of `descriptor` (owner fields are ignored)
	/// and takes one reference on it.
	fn publish(&self, descriptor: StorageDescriptor) -> Result<DescriptorHash>;

	/// Drops one reference. Returns `false` if the hash was unknown.
	fn release(&self, hash: DescriptorHash) -> bool;
}

impl<S: DescriptorStore + ?Sized> DescriptorStore for Arc<S> {
	fn get(&self, hash: DescriptorHash) -> Result<Arc<StorageDescriptor>> {
		(**self).get(hash)
	}
}

impl<S: DescriptorPublisher + ?Sized> DescriptorPublisher for Arc<S> {
	fn publish(&self, descriptor: StorageDescriptor) -> Result<DescriptorHash> {
		(**self).publish(descriptor)
	}

	fn release(&self, hash: DescriptorHash) -> bool {
		(**self).release(hash)
	}
}

impl<S: DescriptorStore + ?Sized> DescriptorStore for &S {
	fn get(&self, hash: DescriptorHash) -> Result<Arc<StorageDescriptor>> {
		(**self).get(hash)
	}
}
