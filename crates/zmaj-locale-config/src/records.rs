// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale record sources: the bundled locales and a directory of TOML files.

use std::path::Path;

use tracing::{debug, trace};
use zmaj_common_locale::LocaleConfig;

use crate::error::ConfigError;

/// Locales shipped with the client, in registration order.
const BUNDLED: &[(&str, &str)] = &[
	("bundled:en", include_str!("../locales/en.toml")),
	("bundled:sl", include_str!("../locales/sl.toml")),
];

/// Parse one locale document. `origin` names the document in errors.
pub fn parse_locale(text: &str, origin: &str) -> Result<LocaleConfig, ConfigError> {
	let config: LocaleConfig = toml::from_str(text).map_err(|e| ConfigError::TomlParse {
		origin: origin.to_string(),
		source: e,
	})?;

	trace!(origin, locale = %config.locale_code, "parsed locale record");
	Ok(config)
}

/// The bundled English and Slovenian locales.
pub fn bundled_locales() -> Result<Vec<LocaleConfig>, ConfigError> {
	BUNDLED
		.iter()
		.map(|(origin, text)| parse_locale(text, origin))
		.collect()
}

/// Every `*.toml` file in `dir`, one locale per file, in file-name order.
pub fn load_locale_dir(dir: &Path) -> Result<Vec<LocaleConfig>, ConfigError> {
	let read_dir_err = |e| ConfigError::ReadDir {
		path: dir.to_path_buf(),
		source: e,
	};

	let mut paths = Vec::new();
	for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
		let path = entry.map_err(read_dir_err)?.path();
		if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
			paths.push(path);
		}
	}
	paths.sort();

	debug!(dir = %dir.display(), files = paths.len(), "loading locale directory");

	paths
		.iter()
		.map(|path| {
			let text = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
				path: path.clone(),
				source: e,
			})?;
			parse_locale(&text, &path.display().to_string())
		})
		.collect()
}
