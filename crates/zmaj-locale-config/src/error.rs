// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration error types.

use std::path::PathBuf;

use zmaj_common_locale::RegistryError;

/// Errors that can occur while loading settings, reading locale records, or
/// building the registry.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// I/O error reading a settings or locale file
	#[error("Failed to read {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// I/O error listing the locale directory
	#[error("Failed to read locale directory {path}: {source}")]
	ReadDir {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// TOML parsing error
	#[error("TOML parse error in {origin}: {source}")]
	TomlParse {
		origin: String,
		#[source]
		source: toml::de::Error,
	},

	/// Invalid value
	#[error("Invalid value for {key}: {message}")]
	InvalidValue { key: String, message: String },

	/// A locale named in the enabled list is not provided by any source
	#[error("Enabled locale '{0}' is not provided by any locale source")]
	UnknownEnabledLocale(String),

	/// Registration or sealing failed
	#[error("Locale registry error: {0}")]
	Registry(#[from] RegistryError),
}

impl ConfigError {
	/// Create an invalid value error
	pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidValue {
			key: key.into(),
			message: message.into(),
		}
	}
}
