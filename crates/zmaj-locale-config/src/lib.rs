// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale settings and registry bootstrap for the Zmaj trip planner.
//!
//! This crate provides:
//! - Layered settings from multiple sources (defaults, TOML file, environment)
//! - The bundled English and Slovenian locale records
//! - Loading extra or replacement locale records from a directory of TOML files
//! - Building the sealed [`LocaleRegistry`](zmaj_common_locale::LocaleRegistry)
//!
//! # Usage
//!
//! ```ignore
//! use zmaj_locale_config::{build_registry, load_settings};
//!
//! let settings = load_settings()?;
//! let registry = build_registry(&settings)?;
//! println!("locales: {:?}", registry.list());
//! ```

pub mod bootstrap;
pub mod error;
pub mod layer;
pub mod records;
pub mod sources;

pub use bootstrap::build_registry;
pub use error::ConfigError;
pub use layer::LocaleSettingsLayer;
pub use records::{bundled_locales, load_locale_dir, parse_locale};
pub use sources::{DefaultsSource, EnvSource, Precedence, SettingsSource, TomlSource};

use std::path::PathBuf;

use tracing::{debug, info};

/// Fully resolved locale settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
	/// Explicit default locale; the first registered locale otherwise.
	pub default_locale: Option<String>,
	/// Directory of additional `*.toml` locale records.
	pub locale_dir: Option<PathBuf>,
	pub include_bundled: bool,
	/// When set, only these locales are registered.
	pub enabled: Option<Vec<String>>,
	/// Log filter used when `RUST_LOG` is not set.
	pub log_level: String,
}

impl Default for LocaleSettings {
	fn default() -> Self {
		LocaleSettingsLayer::default().finalize()
	}
}

/// Load settings from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`ZMAJ_LOCALE_*`, `ZMAJ_LOG_LEVEL`)
/// 2. Settings file (`/etc/zmaj/locales.toml`)
/// 3. Built-in defaults
pub fn load_settings() -> Result<LocaleSettings, ConfigError> {
	let sources: Vec<Box<dyn SettingsSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Load settings with a custom settings file path.
pub fn load_settings_with_file(
	config_path: impl Into<PathBuf>,
) -> Result<LocaleSettings, ConfigError> {
	let sources: Vec<Box<dyn SettingsSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Merge the given sources in precedence order.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn SettingsSource>>,
) -> Result<LocaleSettings, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = LocaleSettingsLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading settings source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	let settings = merged.finalize();
	info!(
		default_locale = settings.default_locale.as_deref().unwrap_or("<first registered>"),
		locale_dir = ?settings.locale_dir,
		include_bundled = settings.include_bundled,
		enabled = ?settings.enabled,
		"Locale settings loaded"
	);
	Ok(settings)
}
