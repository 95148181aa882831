// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors returned by [`crate::LocaleRegistry`] operations.
#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
	#[error("Invalid locale config '{locale_code}': {}", format_issues(.issues))]
	InvalidConfig {
		locale_code: String,
		issues: Vec<ConfigIssue>,
	},

	#[error("Locale '{0}' is already registered")]
	DuplicateLocale(String),

	#[error("Locale '{0}' not found")]
	LocaleNotFound(String),

	#[error("Locale registry is sealed; no further registrations are accepted")]
	RegistrySealed,

	#[error("Cannot seal an empty locale registry")]
	EmptyRegistry,
}

/// A single structural problem found in a [`crate::LocaleConfig`].
#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum ConfigIssue {
	#[error("locale_code is empty")]
	EmptyLocaleCode,

	#[error("locale_code contains whitespace")]
	WhitespaceInLocaleCode,

	#[error("name is empty")]
	EmptyName,

	#[error("info widget {index} has empty content")]
	EmptyWidgetContent { index: usize },

	#[error("time format field '{field}' is empty")]
	EmptyTimeFormat { field: &'static str },
}

fn format_issues(issues: &[ConfigIssue]) -> String {
	issues
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("; ")
}
