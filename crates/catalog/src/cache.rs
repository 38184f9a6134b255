// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metacache_core::interface::catalog::{DescriptorOwner, Partition, Table};

use crate::{
	CatalogCacheConfig, PartitionWrapper, Result, TableWrapper,
	assemble::{assemble_partition, assemble_table},
	pattern::{Pattern, PatternMatcher},
	store::{DescriptorPublisher, DescriptorStore},
	wrapper::CachedEntry,
};

/// Entry point for the cache-map layer: assembles cached entities against a
/// descriptor store and builds name filters according to the configuration.
#[derive(Debug, Clone)]
pub struct CatalogCache<S> {
	store: S,
	config: CatalogCacheConfig,
}

impl<S: DescriptorStore> CatalogCache<S> {
	pub fn new(store: S) -> Self {
		Self::with_config(store, CatalogCacheConfig::default())
	}

	pub fn with_config(store: S, config: CatalogCacheConfig) -> Self {
		Self {
			store,
			config,
		}
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	pub fn config(&self) -> &CatalogCacheConfig {
		&self.config
	}

	pub fn assemble_table(&self, wrapper: &TableWrapper) -> Result<Table> {
		assemble_table(wrapper, &self.store)
	}

	pub fn assemble_partition(&self, wrapper: &PartitionWrapper) -> Result<Partition> {
		assemble_partition(wrapper, &self.store)
	}

	/// Compiles a name filter. Malformed patterns fail only when
	/// `strict_patterns` is set; otherwise they match nothing.
	pub fn matcher(&self, pattern: Option<&str>) -> Result<PatternMatcher> {
		let pattern = if self.config.strict_patterns {
			Pattern::try_new(pattern)?
		} else {
			Pattern::new(pattern)
		};
		Ok(PatternMatcher::new(pattern, self.config.normalization))
	}

	/// Tests a single name; a malformed pattern never matches.
	pub fn matches(&self, name: &str, pattern: Option<&str>) -> bool {
		PatternMatcher::new(Pattern::new(pattern), self.config.normalization).matches(name)
	}

	pub fn filter_names<N, I>(&self, names: I, pattern: Option<&str>) -> Result<Vec<N>>
	where
		N: AsRef<str>,
		I: IntoIterator<Item = N>,
	{
		Ok(self.matcher(pattern)?.filter(names))
	}
}

impl<S: DescriptorPublisher> CatalogCache<S> {
	pub fn split_table(&self, table: Table) -> Result<TableWrapper> {
		TableWrapper::split(table, &self.store)
	}

	pub fn split_partition(&self, partition: Partition) -> Result<PartitionWrapper> {
		PartitionWrapper::split(partition, &self.store)
	}

	pub fn release<T: DescriptorOwner>(&self, wrapper: CachedEntry<T>) -> T {
		wrapper.release(&self.store)
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use metacache_core::util::identifier::IdentifierNormalization;

	use super::*;
	use crate::{
		MaterializedDescriptors,
		test_utils::{create_test_partition, create_test_table},
	};

	#[test]
	fn test_split_and_assemble_round_trip() {
		let cache = CatalogCache::new(MaterializedDescriptors::new());
		let table = create_test_table("sales", "orders");

		let wrapper = cache.split_table(table.clone()).unwrap();
		let assembled = cache.assemble_table(&wrapper).unwrap();

		let mut expected = table;
		expected.descriptor.as_mut().unwrap().normalize();
		assert_eq!(assembled, expected);
	}

	#[test]
	fn test_partition_round_trip() {
		let cache = CatalogCache::new(Arc::new(MaterializedDescriptors::new()));
		let partition = create_test_partition("sales", "orders", &["2020", "01"]);

		let wrapper = cache.split_partition(partition.clone()).unwrap();
		let assembled = cache.assemble_partition(&wrapper).unwrap();

		let mut expected = partition;
		expected.descriptor.as_mut().unwrap().normalize();
		assert_eq!(assembled, expected);
	}

	#[test]
	fn test_release_through_cache() {
		let cache = CatalogCache::new(MaterializedDescriptors::new());
		let wrapper = cache.split_table(create_test_table("d", "t")).unwrap();
		assert_eq!(cache.store().len(), 1);

		let skeleton = cache.release(wrapper);
		assert_eq!(skeleton.table_name, "t");
		assert!(cache.store().is_empty());
	}

	#[test]
	fn test_lenient_matcher() {
		let cache = CatalogCache::new(MaterializedDescriptors::new());
		let matcher = cache.matcher(Some("(")).unwrap();
		assert!(!matcher.matches("anything"));
		assert!(cache.filter_names(vec!["a", "b"], Some("(")).unwrap().is_empty());
	}

	#[test]
	fn test_strict_matcher() {
		let config = CatalogCacheConfig::new().strict_patterns(true);
		let cache = CatalogCache::with_config(MaterializedDescriptors::new(), config);

		let err = cache.matcher(Some("(")).unwrap_err();
		assert_eq!(err.code, "CACHE_002");
		assert!(cache.filter_names(vec!["a"], Some("(")).is_err());
		assert!(!cache.matches("a", Some("(")));
		assert_eq!(cache.filter_names(vec!["a", "b"], Some("a")).unwrap(), vec!["a"]);
	}

	#[test]
	fn test_configured_normalization() {
		let config = CatalogCacheConfig::new().normalization(IdentifierNormalization::verbatim());
		let cache = CatalogCache::with_config(MaterializedDescriptors::new(), config);

		assert!(!cache.matches("Sales", Some("sales")));
		assert!(cache.matches("Sales", Some("Sales")));
		assert!(cache.matches("Sales", None));
	}
}
