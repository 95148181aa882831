// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Structural validation of locale records.

use crate::error::ConfigIssue;
use crate::model::LocaleConfig;

/// Check a record for structural completeness.
///
/// Only presence is checked: widget content is opaque HTML and the time
/// patterns belong to the formatting libraries, so neither is parsed here.
/// A whitespace-only value counts as empty. All issues are reported, not just
/// the first.
pub fn validate(config: &LocaleConfig) -> Result<(), Vec<ConfigIssue>> {
	let mut issues = Vec::new();

	if config.locale_code.is_empty() {
		issues.push(ConfigIssue::EmptyLocaleCode);
	} else if config.locale_code.chars().any(char::is_whitespace) {
		issues.push(ConfigIssue::WhitespaceInLocaleCode);
	}

	if is_blank(&config.name) {
		issues.push(ConfigIssue::EmptyName);
	}

	for (index, widget) in config.info_widgets.iter().enumerate() {
		if is_blank(&widget.content) {
			issues.push(ConfigIssue::EmptyWidgetContent { index });
		}
	}

	for (field, pattern) in config.time.fields() {
		if is_blank(pattern) {
			issues.push(ConfigIssue::EmptyTimeFormat { field });
		}
	}

	if issues.is_empty() {
		Ok(())
	} else {
		Err(issues)
	}
}

fn is_blank(value: &str) -> bool {
	value.trim().is_empty()
}
