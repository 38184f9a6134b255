// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Content hashes used to address shared catalog fragments.
//!
//! xxHash3 in its pure Rust implementation; the 128-bit variant keeps the
//! collision probability negligible for the number of distinct storage
//! descriptors a catalog holds.

use core::hash::{Hash, Hasher};
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hash128(pub u128);

impl From<u128> for Hash128 {
	fn from(value: u128) -> Self {
		Hash128(value)
	}
}

impl From<Hash128> for u128 {
	fn from(hash: Hash128) -> Self {
		hash.0
	}
}

impl Hash for Hash128 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_u128(self.0)
	}
}

impl Display for Hash128 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:032x}", self.0)
	}
}

/// Compute xxHash3 128-bit hash of data.
#[inline]
pub fn xxh3_128(data: &[u8]) -> Hash128 {
	Hash128(xxh3::xxh3_128(data))
}
