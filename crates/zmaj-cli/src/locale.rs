// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Operating system locale detection.

/// Language tags preferred by the operating system, most preferred first.
/// Empty when detection fails.
pub fn system_preferences() -> Vec<String> {
	let locales: Vec<String> = sys_locale::get_locales().collect();
	tracing::debug!(locales = ?locales, "detected system locales");
	locales
}

