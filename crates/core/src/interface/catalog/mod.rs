// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub use descriptor::*;
pub use partition::Partition;
pub use table::Table;

mod descriptor;
pub mod partition;
pub mod table;

/// A catalog entity that physically embeds a storage descriptor.
///
/// Tables and partitions both carry an optional descriptor; the cache keeps it
/// outside the entity and re-attaches it on read.
pub trait DescriptorOwner {
	fn descriptor(&self) -> Option<&StorageDescriptor>;

	fn take_descriptor(&mut self) -> Option<StorageDescriptor>;

	fn set_descriptor(&mut self, descriptor: StorageDescriptor);
}
