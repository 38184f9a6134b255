// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeMap;

use metacache_core::{
	CacheKey, EncodableKey,
	interface::catalog::{DescriptorHash, DescriptorOwner, Partition, Table},
	key::{PartitionKey, TableKey},
};
use tracing::instrument;

use crate::{Result, store::DescriptorPublisher};

/// A cached table or partition split into its skeleton, a reference to the
/// shared storage descriptor and the descriptor fields that belong to this
/// owner alone.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedEntry<T> {
	skeleton: T,
	descriptor_hash: Option<DescriptorHash>,
	location: Option<String>,
	parameters: BTreeMap<String, String>,
}

pub type TableWrapper = CachedEntry<Table>;
pub type PartitionWrapper = CachedEntry<Partition>;

impl<T: DescriptorOwner> CachedEntry<T> {
	pub fn new(
		skeleton: T,
		descriptor_hash: Option<DescriptorHash>,
		location: Option<String>,
		parameters: BTreeMap<String, String>,
	) -> Self {
		Self {
			skeleton,
			descriptor_hash,
			location,
			parameters,
		}
	}

	/// Wraps an entity that keeps its own descriptor, if any, unshared.
	pub fn unshared(entity: T) -> Self {
		Self::new(entity, None, None, BTreeMap::new())
	}

	/// Moves the entity's descriptor into `store` and keeps only a reference
	/// plus the owner-specific location and parameters.
	#[instrument(name = "catalog::wrapper::split", level = "trace", skip_all)]
	pub fn split<P: DescriptorPublisher + ?Sized>(mut entity: T, store: &P) -> Result<Self> {
		let Some(mut descriptor) = entity.take_descriptor() else {
			return Ok(Self::unshared(entity));
		};

		let (location, parameters) = descriptor.detach_owner_fields();
		let hash = store.publish(descriptor)?;

		Ok(Self::new(entity, Some(hash), location, parameters))
	}

	/// Drops this entry's reference on its shared descriptor and returns the
	/// skeleton.
	pub fn release<P: DescriptorPublisher + ?Sized>(self, store: &P) -> T {
		if let Some(hash) = self.descriptor_hash {
			store.release(hash);
		}
		self.skeleton
	}

	pub fn skeleton(&self) -> &T {
		&self.skeleton
	}

	pub fn descriptor_hash(&self) -> Option<DescriptorHash> {
		self.descriptor_hash
	}

	pub fn location(&self) -> Option<&str> {
		self.location.as_deref()
	}

	pub fn parameters(&self) -> &BTreeMap<String, String> {
		&self.parameters
	}

	pub fn set_location(&mut self, location: Option<String>) {
		self.location = location;
	}

	pub fn set_parameters(&mut self, parameters: BTreeMap<String, String>) {
		self.parameters = parameters;
	}
}

impl TableWrapper {
	pub fn key(&self) -> CacheKey {
		TableKey::of(&self.skeleton).encode()
	}
}

impl PartitionWrapper {
	pub fn key(&self) -> CacheKey {
		PartitionKey::of(&self.skeleton).encode()
	}
}
