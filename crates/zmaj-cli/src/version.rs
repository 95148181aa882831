// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Build information and version utilities.

/// Platform string in `{os}-{arch}` format, e.g. "linux-x86_64".
pub fn platform() -> String {
	format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Format version info for display.
pub fn format_version_info() -> String {
	format!(
		"Version:  {}\n\
		 Platform: {}",
		env!("CARGO_PKG_VERSION"),
		platform(),
	)
}
