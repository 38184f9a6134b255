// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

pub mod diagnostic;
mod r#macro;

use diagnostic::{Diagnostic, render::DefaultRenderer, serialization};

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(diagnostic)
	}
}

impl From<postcard::Error> for Error {
	fn from(err: postcard::Error) -> Self {
		crate::error!(serialization::postcard_encode_error(err))
	}
}
