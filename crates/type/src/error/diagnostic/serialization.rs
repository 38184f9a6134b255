// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

pub fn postcard_encode_error(err: postcard::Error) -> Diagnostic {
	Diagnostic {
		code: "SERIALIZE_001".to_string(),
		message: format!("postcard encoding error: {}", err),
		label: None,
		help: Some("check that the value is serializable".to_string()),
		notes: vec![],
		cause: None,
	}
}
