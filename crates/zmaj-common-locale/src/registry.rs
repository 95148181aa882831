// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The locale registry.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::RegistryError;
use crate::model::LocaleConfig;
use crate::validate::validate;

/// Lifecycle of a [`LocaleRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
	/// Accepting registrations.
	Building,
	/// Read-only. The transition is one-way.
	Sealed,
}

/// Locale records keyed by locale code, kept in registration order.
///
/// Records are registered during startup and the registry is then sealed.
/// Once sealed nothing can change it, so it can be shared behind an `Arc`
/// without locking.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
	locales: Vec<LocaleConfig>,
	index: HashMap<String, usize>,
	default_locale: Option<String>,
	state: RegistryState,
}

impl LocaleRegistry {
	pub fn new() -> Self {
		Self {
			locales: Vec::new(),
			index: HashMap::new(),
			default_locale: None,
			state: RegistryState::Building,
		}
	}

	/// Validate and add a record.
	///
	/// The registry is left untouched when this fails.
	pub fn register(&mut self, config: LocaleConfig) -> Result<(), RegistryError> {
		if self.state == RegistryState::Sealed {
			warn!(locale = %config.locale_code, "registration attempted on sealed locale registry");
			return Err(RegistryError::RegistrySealed);
		}

		if let Err(issues) = validate(&config) {
			warn!(locale = %config.locale_code, issues = issues.len(), "rejecting invalid locale config");
			return Err(RegistryError::InvalidConfig {
				locale_code: config.locale_code,
				issues,
			});
		}

		if self.index.contains_key(&config.locale_code) {
			warn!(locale = %config.locale_code, "rejecting duplicate locale");
			return Err(RegistryError::DuplicateLocale(config.locale_code));
		}

		debug!(
			locale = %config.locale_code,
			name = %config.name,
			metric = config.metric,
			widgets = config.info_widgets.len(),
			"registering locale"
		);
		self
			.index
			.insert(config.locale_code.clone(), self.locales.len());
		self.locales.push(config);
		Ok(())
	}

	/// Designate the default locale instead of the first registered one.
	pub fn set_default(&mut self, locale_code: &str) -> Result<(), RegistryError> {
		if self.state == RegistryState::Sealed {
			return Err(RegistryError::RegistrySealed);
		}
		if !self.contains(locale_code) {
			return Err(RegistryError::LocaleNotFound(locale_code.to_string()));
		}
		debug!(locale = %locale_code, "designating default locale");
		self.default_locale = Some(locale_code.to_string());
		Ok(())
	}

	/// Freeze the registry. Sealing an already sealed registry is a no-op.
	pub fn seal(&mut self) -> Result<(), RegistryError> {
		if self.state == RegistryState::Sealed {
			return Ok(());
		}
		if self.locales.is_empty() {
			return Err(RegistryError::EmptyRegistry);
		}
		self.state = RegistryState::Sealed;
		info!(
			locales = self.locales.len(),
			default = self.default_locale().unwrap_or_default(),
			"locale registry sealed"
		);
		Ok(())
	}

	/// Look up a record by exact locale code. No fallback is applied; see
	/// [`crate::resolve_locale`] for that.
	pub fn get(&self, locale_code: &str) -> Result<&LocaleConfig, RegistryError> {
		self
			.index
			.get(locale_code)
			.map(|&i| &self.locales[i])
			.ok_or_else(|| RegistryError::LocaleNotFound(locale_code.to_string()))
	}

	pub fn contains(&self, locale_code: &str) -> bool {
		self.index.contains_key(locale_code)
	}

	/// Locale codes in registration order, for populating a locale switcher.
	pub fn list(&self) -> Vec<&str> {
		self.locales.iter().map(|l| l.locale_code.as_str()).collect()
	}

	/// Records in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &LocaleConfig> {
		self.locales.iter()
	}

	/// The designated default, else the first registered locale. `None` only
	/// while the registry is empty, which sealing rules out.
	pub fn default_locale(&self) -> Option<&str> {
		self
			.default_locale
			.as_deref()
			.or_else(|| self.locales.first().map(|l| l.locale_code.as_str()))
	}

	pub fn default_config(&self) -> Option<&LocaleConfig> {
		self.default_locale().and_then(|code| self.get(code).ok())
	}

	pub fn state(&self) -> RegistryState {
		self.state
	}

	pub fn is_sealed(&self) -> bool {
		self.state == RegistryState::Sealed
	}

	pub fn len(&self) -> usize {
		self.locales.len()
	}

	pub fn is_empty(&self) -> bool {
		self.locales.is_empty()
	}
}

impl Default for LocaleRegistry {
	fn default() -> Self {
		Self::new()
	}
}
