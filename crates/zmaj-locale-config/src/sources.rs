// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Settings sources: built-in defaults, TOML file and environment variables.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::LocaleSettingsLayer;

pub const SYSTEM_SETTINGS_PATH: &str = "/etc/zmaj/locales.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for settings sources.
pub trait SettingsSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<LocaleSettingsLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl SettingsSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<LocaleSettingsLayer, ConfigError> {
		debug!("loading defaults");
		Ok(LocaleSettingsLayer::default())
	}
}

/// TOML file settings source. A missing file is skipped.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_SETTINGS_PATH)
	}
}

impl SettingsSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<LocaleSettingsLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "settings file not found, skipping");
			return Ok(LocaleSettingsLayer::default());
		}

		debug!(path = %self.path.display(), "loading settings file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: LocaleSettingsLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				origin: self.path.display().to_string(),
				source: e,
			})?;

		trace!("parsed settings layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: ZMAJ_LOCALE_<FIELD>, plus ZMAJ_LOG_LEVEL. Empty values count
/// as unset.
pub struct EnvSource;

impl EnvSource {
	/// Build a layer from an arbitrary variable lookup.
	pub fn load_from(
		lookup: impl Fn(&str) -> Option<String>,
	) -> Result<LocaleSettingsLayer, ConfigError> {
		let var = |name: &str| lookup(name).filter(|s| !s.is_empty());

		let include_bundled = match var("ZMAJ_LOCALE_BUNDLED") {
			Some(v) => Some(parse_bool("ZMAJ_LOCALE_BUNDLED", &v)?),
			None => None,
		};

		let enabled = var("ZMAJ_LOCALE_ENABLED").map(|s| {
			s.split(',')
				.map(|s| s.trim().to_string())
				.filter(|s| !s.is_empty())
				.collect()
		});

		Ok(LocaleSettingsLayer {
			default_locale: var("ZMAJ_LOCALE_DEFAULT"),
			locale_dir: var("ZMAJ_LOCALE_DIR").map(PathBuf::from),
			include_bundled,
			enabled,
			log_level: var("ZMAJ_LOG_LEVEL"),
		})
	}
}

impl SettingsSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<LocaleSettingsLayer, ConfigError> {
		debug!("loading environment variables");
		Self::load_from(|name| std::env::var(name).ok())
	}
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
	match value.to_ascii_lowercase().as_str() {
		"true" | "1" | "yes" => Ok(true),
		"false" | "0" | "no" => Ok(false),
		_ => Err(ConfigError::invalid_value(
			key,
			format!("invalid boolean value '{value}'"),
		)),
	}
}
