// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Read-time reconstruction of cached tables and partitions.
//!
//! The result of every call is a fresh value owning all of its data: the
//! skeleton is cloned out of the wrapper and the shared descriptor is cloned
//! out of the store before it is touched, so a caller mutating what it got
//! back can never reach cache state or another caller's copy.

use metacache_core::interface::catalog::{DescriptorOwner, Partition, StorageDescriptor, Table};
use tracing::instrument;

use crate::{
	PartitionWrapper, Result, TableWrapper,
	store::DescriptorStore,
	wrapper::CachedEntry,
};

/// Merges a wrapper with its shared descriptor into an independent entity.
///
/// Without a descriptor reference the cloned skeleton is returned as-is. With
/// one, the descriptor is resolved (failing with `CACHE_001` if the store does
/// not know it), its bucket, sort and skew fields are filled with empty values
/// when unset and its location and parameters are replaced by the wrapper's.
pub fn assemble<T, S>(entry: &CachedEntry<T>, store: &S) -> Result<T>
where
	T: DescriptorOwner + Clone,
	S: DescriptorStore + ?Sized,
{
	let mut entity = entry.skeleton().clone();

	let Some(hash) = entry.descriptor_hash() else {
		return Ok(entity);
	};

	let shared = store.get(hash)?;
	let mut descriptor = StorageDescriptor::clone(&shared);
	descriptor.normalize();
	descriptor.location = entry.location().map(str::to_string);
	descriptor.parameters = entry.parameters().clone();

	entity.set_descriptor(descriptor);
	Ok(entity)
}

#[instrument(name = "catalog::assemble::table", level = "trace", skip_all, fields(key = %wrapper.key()))]
pub fn assemble_table<S: DescriptorStore + ?Sized>(wrapper: &TableWrapper, store: &S) -> Result<Table> {
	assemble(wrapper, store)
}

#[instrument(name = "catalog::assemble::partition", level = "trace", skip_all, fields(key = %wrapper.key()))]
pub fn assemble_partition<S: DescriptorStore + ?Sized>(wrapper: &PartitionWrapper, store: &S) -> Result<Partition> {
	assemble(wrapper, store)
}
