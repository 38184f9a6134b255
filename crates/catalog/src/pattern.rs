// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Name filters used when listing databases, tables and partitions.
//!
//! A filter is either absent or `*` (everything matches) or a regular
//! expression that must match the whole normalized name.

use metacache_core::util::identifier::IdentifierNormalization;
use metacache_type::{error, error::diagnostic::cache::invalid_pattern, internal_error};
use regex::Regex;
use regex_syntax::ast::{parse::Parser, print::Printer};
use tracing::debug;

use crate::Result;

pub const WILDCARD: &str = "*";

#[derive(Debug, Clone)]
pub enum Pattern {
	All,
	Regex(Regex),
	/// A pattern that failed to compile; matches nothing.
	Invalid,
}

impl Pattern {
	/// Compiles a filter, turning a malformed expression into [`Pattern::Invalid`].
	pub fn new(pattern: Option<&str>) -> Self {
		match Self::try_new(pattern) {
			Ok(pattern) => pattern,
			Err(err) => {
				debug!(code = %err.code, "{}", err.message);
				Pattern::Invalid
			}
		}
	}

	/// Compiles a filter, failing with `CACHE_002` on a malformed expression.
	pub fn try_new(pattern: Option<&str>) -> Result<Self> {
		let pattern = match pattern {
			None => return Ok(Pattern::All),
			Some(WILDCARD) => return Ok(Pattern::All),
			Some(pattern) => pattern,
		};

		let anchored = format!("^(?:{})$", canonical(pattern)?);
		let regex = Regex::new(&anchored).map_err(|err| error!(invalid_pattern(pattern, err)))?;
		Ok(Pattern::Regex(regex))
	}

	/// Tests an already normalized name.
	pub fn is_match(&self, name: &str) -> bool {
		match self {
			Pattern::All => true,
			Pattern::Regex(regex) => regex.is_match(name),
			Pattern::Invalid => false,
		}
	}

	pub fn is_all(&self) -> bool {
		matches!(self, Pattern::All)
	}
}

/// Reprints `pattern` from its syntax tree.
///
/// Parsing on its own rejects stray parentheses that the anchoring group could
/// otherwise balance, and the printed form drops `(?x)` comments and
/// whitespace, so nothing in it can swallow the closing anchor.
fn canonical(pattern: &str) -> Result<String> {
	let ast = Parser::new().parse(pattern).map_err(|err| error!(invalid_pattern(pattern, err)))?;

	let mut out = String::with_capacity(pattern.len());
	Printer::new()
		.print(&ast, &mut out)
		.map_err(|_| error!(internal_error!("cannot print parsed pattern `{}`", pattern)))?;
	Ok(out)
}

/// A compiled filter together with the identifier normalization applied to
/// every candidate name.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
	pattern: Pattern,
	normalization: IdentifierNormalization,
}

impl PatternMatcher {
	pub fn new(pattern: Pattern, normalization: IdentifierNormalization) -> Self {
		Self {
			pattern,
			normalization,
		}
	}

	pub fn pattern(&self) -> &Pattern {
		&self.pattern
	}

	pub fn matches(&self, name: &str) -> bool {
		match &self.pattern {
			Pattern::All => true,
			Pattern::Invalid => false,
			pattern => pattern.is_match(&self.normalization.apply(name)),
		}
	}

	/// Keeps the names that match, in their original order.
	pub fn filter<N, I>(&self, names: I) -> Vec<N>
	where
		N: AsRef<str>,
		I: IntoIterator<Item = N>,
	{
		names.into_iter().filter(|name| self.matches(name.as_ref())).collect()
	}
}

/// Tests `name` against `pattern` with the catalog's default normalization.
///
/// `None` and `*` match everything, including the empty name. A malformed
/// pattern matches nothing.
pub fn matches(name: &str, pattern: Option<&str>) -> bool {
	PatternMatcher::new(Pattern::new(pattern), IdentifierNormalization::default()).matches(name)
}

pub fn filter_names<N, I>(names: I, pattern: Option<&str>) -> Vec<N>
where
	N: AsRef<str>,
	I: IntoIterator<Item = N>,
{
	PatternMatcher::new(Pattern::new(pattern), IdentifierNormalization::default()).filter(names)
}
