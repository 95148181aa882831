// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial settings produced by a single source.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::LocaleSettings;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LocaleSettingsLayer {
	pub default_locale: Option<String>,
	pub locale_dir: Option<PathBuf>,
	pub include_bundled: Option<bool>,
	pub enabled: Option<Vec<String>>,
	pub log_level: Option<String>,
}

impl LocaleSettingsLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.locale_dir.is_some() {
			self.locale_dir = other.locale_dir;
		}
		if other.include_bundled.is_some() {
			self.include_bundled = other.include_bundled;
		}
		if other.enabled.is_some() {
			self.enabled = other.enabled;
		}
		if other.log_level.is_some() {
			self.log_level = other.log_level;
		}
	}

	pub fn finalize(self) -> LocaleSettings {
		LocaleSettings {
			default_locale: self.default_locale,
			locale_dir: self.locale_dir,
			include_bundled: self.include_bundled.unwrap_or(true),
			enabled: self.enabled,
			log_level: self
				.log_level
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn arb_layer() -> impl Strategy<Value = LocaleSettingsLayer> {
		(
			proptest::option::of("[a-z]{2}"),
			proptest::option::of("/[a-z]{1,8}"),
			proptest::option::of(any::<bool>()),
			proptest::option::of(prop::collection::vec("[a-z]{2}", 0..4)),
			proptest::option::of("(trace|debug|info|warn)"),
		)
			.prop_map(
				|(default_locale, locale_dir, include_bundled, enabled, log_level)| {
					LocaleSettingsLayer {
						default_locale,
						locale_dir: locale_dir.map(PathBuf::from),
						include_bundled,
						enabled,
						log_level,
					}
				},
			)
	}

	#[test]
	fn test_finalize_defaults() {
		let settings = LocaleSettingsLayer::default().finalize();
		assert!(settings.default_locale.is_none());
		assert!(settings.locale_dir.is_none());
		assert!(settings.include_bundled);
		assert!(settings.enabled.is_none());
		assert_eq!(settings.log_level, "info");
	}

	#[test]
	fn test_merge_overwrites() {
		let mut base = LocaleSettingsLayer {
			default_locale: Some("en".to_string()),
			include_bundled: Some(true),
			..Default::default()
		};
		let overlay = LocaleSettingsLayer {
			default_locale: Some("sl".to_string()),
			include_bundled: Some(false),
			..Default::default()
		};
		base.merge(overlay);
		assert_eq!(base.default_locale, Some("sl".to_string()));
		assert_eq!(base.include_bundled, Some(false));
	}

	#[test]
	fn test_merge_preserves_base_when_none() {
		let mut base = LocaleSettingsLayer {
			locale_dir: Some(PathBuf::from("/srv/zmaj/locales")),
			enabled: Some(vec!["sl".to_string()]),
			..Default::default()
		};
		base.merge(LocaleSettingsLayer::default());
		assert_eq!(base.locale_dir, Some(PathBuf::from("/srv/zmaj/locales")));
		assert_eq!(base.enabled, Some(vec!["sl".to_string()]));
	}

	#[test]
	fn test_deserialize_empty() {
		let layer: LocaleSettingsLayer = toml::from_str("").unwrap();
		assert_eq!(layer, LocaleSettingsLayer::default());
	}

	#[test]
	fn test_deserialize_rejects_unknown_keys() {
		let result: Result<LocaleSettingsLayer, _> = toml::from_str("default_lang = \"sl\"");
		assert!(result.is_err());
	}

	#[test]
	fn test_serde_roundtrip() {
		let layer = LocaleSettingsLayer {
			default_locale: Some("sl".to_string()),
			locale_dir: Some(PathBuf::from("/srv/zmaj/locales")),
			include_bundled: Some(false),
			enabled: Some(vec!["sl".to_string(), "en".to_string()]),
			log_level: Some("debug".to_string()),
		};
		let toml_str = toml::to_string(&layer).unwrap();
		let parsed: LocaleSettingsLayer = toml::from_str(&toml_str).unwrap();
		assert_eq!(layer, parsed);
	}

	proptest! {
		/// Merging keeps the overlay's set fields and the base's fields elsewhere.
		#[test]
		fn merge_prefers_overlay_fields(base in arb_layer(), overlay in arb_layer()) {
			let mut merged = base.clone();
			merged.merge(overlay.clone());

			prop_assert_eq!(
				merged.default_locale,
				overlay.default_locale.or(base.default_locale)
			);
			prop_assert_eq!(merged.locale_dir, overlay.locale_dir.or(base.locale_dir));
			prop_assert_eq!(
				merged.include_bundled,
				overlay.include_bundled.or(base.include_bundled)
			);
			prop_assert_eq!(merged.enabled, overlay.enabled.or(base.enabled));
			prop_assert_eq!(merged.log_level, overlay.log_level.or(base.log_level));
		}
	}
}
