// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Wraps a diagnostic into an [`Error`](crate::Error).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error($diagnostic)
	};
}

/// Creates an internal error diagnostic capturing the source location.
#[macro_export]
macro_rules! internal_error {
	($reason:expr) => {
		$crate::error::diagnostic::internal::internal_with_context(
			$reason,
			file!(),
			line!(),
			column!(),
			module_path!(),
		)
	};
	($fmt:expr, $($arg:tt)*) => {
		$crate::error::diagnostic::internal::internal_with_context(
			format!($fmt, $($arg)*),
			file!(),
			line!(),
			column!(),
			module_path!(),
		)
	};
}

#[cfg(test)]
mod tests {
	use crate::{Result, error::diagnostic::cache::descriptor_not_found};

	#[test]
	fn test_error_macro() {
		let err = error!(descriptor_not_found("1"));
		assert_eq!(err.code, "CACHE_001");
	}

	#[test]
	fn test_error_propagates() {
		fn fail() -> Result<()> {
			Err(error!(descriptor_not_found("2")))
		}

		let err = fail().unwrap_err();
		assert_eq!(err.code, "CACHE_001");
	}

	#[test]
	fn test_internal_error_with_format() {
		let err = error!(internal_error!("cannot print parsed pattern `{}`", "abc"));
		assert_eq!(err.code, "INTERNAL_ERROR");
		assert!(err.message.contains("cannot print parsed pattern `abc`"));
		assert!(err.label.as_ref().unwrap().contains("macro.rs"));
	}
}
