// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Startup construction of the sealed locale registry.

use std::collections::HashSet;

use tracing::{debug, info};
use zmaj_common_locale::{LocaleConfig, LocaleRegistry};

use crate::error::ConfigError;
use crate::records::{bundled_locales, load_locale_dir};
use crate::LocaleSettings;

/// Build and seal the registry described by `settings`.
///
/// Bundled locales come first, then the locale directory. A directory record
/// with the code of a bundled locale replaces it in place; any other repeated
/// code is reported as a duplicate. Every error is fatal: the caller should
/// refuse to start rather than run with a partial locale set.
pub fn build_registry(settings: &LocaleSettings) -> Result<LocaleRegistry, ConfigError> {
	let records = collect_records(settings)?;
	let records = filter_enabled(records, settings.enabled.as_deref())?;

	let mut registry = LocaleRegistry::new();
	for record in records {
		registry.register(record)?;
	}

	if let Some(default_locale) = &settings.default_locale {
		registry.set_default(default_locale)?;
	}
	registry.seal()?;

	info!(
		locales = ?registry.list(),
		default = registry.default_locale().unwrap_or_default(),
		"locale registry ready"
	);
	Ok(registry)
}

fn collect_records(settings: &LocaleSettings) -> Result<Vec<LocaleConfig>, ConfigError> {
	let mut records = if settings.include_bundled {
		bundled_locales()?
	} else {
		debug!("bundled locales disabled");
		Vec::new()
	};
	let bundled_count = records.len();

	let Some(dir) = &settings.locale_dir else {
		return Ok(records);
	};

	let mut overridden = HashSet::new();
	for record in load_locale_dir(dir)? {
		let bundled_pos = records[..bundled_count]
			.iter()
			.position(|r| r.locale_code == record.locale_code);

		match bundled_pos {
			Some(pos) if overridden.insert(pos) => {
				info!(locale = %record.locale_code, dir = %dir.display(), "overriding bundled locale");
				records[pos] = record;
			}
			_ => records.push(record),
		}
	}

	Ok(records)
}

fn filter_enabled(
	records: Vec<LocaleConfig>,
	enabled: Option<&[String]>,
) -> Result<Vec<LocaleConfig>, ConfigError> {
	let Some(enabled) = enabled else {
		return Ok(records);
	};

	if let Some(missing) = enabled
		.iter()
		.find(|code| !records.iter().any(|r| &r.locale_code == *code))
	{
		return Err(ConfigError::UnknownEnabledLocale(missing.clone()));
	}

	let before = records.len();
	let records: Vec<_> = records
		.into_iter()
		.filter(|r| enabled.contains(&r.locale_code))
		.collect();
	debug!(
		kept = records.len(),
		dropped = before - records.len(),
		"applied enabled locale filter"
	);
	Ok(records)
}
