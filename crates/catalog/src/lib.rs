// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]
// #![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
// #![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

pub use assemble::{assemble, assemble_partition, assemble_table};
pub use cache::CatalogCache;
pub use config::CatalogCacheConfig;
pub use materialized::MaterializedDescriptors;
pub use metacache_type::{Error, Result};
pub use pattern::{Pattern, PatternMatcher, filter_names, matches};
pub use store::{DescriptorPublisher, DescriptorStore};
pub use wrapper::{CachedEntry, PartitionWrapper, TableWrapper};

pub mod assemble;
mod cache;
pub mod config;
pub mod materialized;
pub mod pattern;
pub mod store;
pub mod test_utils;
pub mod wrapper;
