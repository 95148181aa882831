// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution with an explicit fallback policy.
//!
//! [`LocaleRegistry::get`] never falls back. The functions here are the
//! caller-side policy layered on top of it.

use tracing::{debug, warn};

use crate::model::LocaleConfig;
use crate::registry::LocaleRegistry;

/// Resolve the locale to use for a requested language tag.
///
/// Resolution order (highest to lowest priority):
/// 1. Exact locale code match
/// 2. Primary language subtag (`sl-SI` and `sl_SI` resolve to `sl`),
///    compared case-insensitively
/// 3. The registry's default locale
///
/// Returns `None` only when the registry is empty.
///
/// # Example
///
/// ```
/// use zmaj_common_locale::{resolve_locale, LocaleConfig, LocaleRegistry, TimeFormatConfig};
///
/// let mut registry = LocaleRegistry::new();
/// for code in ["en", "sl"] {
/// 	registry
/// 		.register(LocaleConfig::new(
/// 			code,
/// 			code,
/// 			true,
/// 			"",
/// 			vec![],
/// 			TimeFormatConfig::new("D. MM. YYYY H:mm", "DD.MM.YYYY", "H:mm", "HH:mm"),
/// 		))
/// 		.unwrap();
/// }
/// registry.seal().unwrap();
///
/// assert_eq!(resolve_locale(&registry, Some("sl")).unwrap().locale_code, "sl");
/// assert_eq!(resolve_locale(&registry, Some("sl_SI")).unwrap().locale_code, "sl");
/// assert_eq!(resolve_locale(&registry, Some("fr")).unwrap().locale_code, "en");
/// assert_eq!(resolve_locale(&registry, None).unwrap().locale_code, "en");
/// ```
pub fn resolve_locale<'a>(
	registry: &'a LocaleRegistry,
	requested: Option<&str>,
) -> Option<&'a LocaleConfig> {
	if let Some(tag) = requested {
		if let Some(config) = match_tag(registry, tag) {
			return Some(config);
		}
		return fallback(registry, tag);
	}

	registry.default_config()
}

/// Resolve the first supported entry of an ordered preference list, such as
/// the browser's language list, falling back to the default locale.
pub fn resolve_preferred<'a, I, S>(
	registry: &'a LocaleRegistry,
	candidates: I,
) -> Option<&'a LocaleConfig>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut tried = Vec::new();
	for candidate in candidates {
		let tag = candidate.as_ref();
		if let Some(config) = match_tag(registry, tag) {
			return Some(config);
		}
		tried.push(tag.to_string());
	}

	if tried.is_empty() {
		return registry.default_config();
	}
	fallback(registry, &tried.join(","))
}

/// The primary language subtag of a tag like `sl-SI` or `en_US`.
pub fn language_subtag(tag: &str) -> &str {
	tag.split(['-', '_']).next().unwrap_or(tag)
}

fn match_tag<'a>(registry: &'a LocaleRegistry, tag: &str) -> Option<&'a LocaleConfig> {
	let tag = tag.trim();
	if tag.is_empty() {
		return None;
	}

	if let Ok(config) = registry.get(tag) {
		return Some(config);
	}

	let primary = language_subtag(tag);
	let matched = registry
		.iter()
		.find(|config| config.locale_code.eq_ignore_ascii_case(tag))
		.or_else(|| {
			registry
				.iter()
				.find(|config| config.locale_code.eq_ignore_ascii_case(primary))
		});
	if let Some(config) = matched {
		debug!(requested = %tag, locale = %config.locale_code, "matched locale by language subtag");
	}
	matched
}

fn fallback<'a>(registry: &'a LocaleRegistry, requested: &str) -> Option<&'a LocaleConfig> {
	let config = registry.default_config()?;
	warn!(
		requested = %requested,
		fallback = %config.locale_code,
		"requested locale not registered, using default"
	);
	Some(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::TimeFormatConfig;

	fn registry(codes: &[&str]) -> LocaleRegistry {
		let mut registry = LocaleRegistry::new();
		for code in codes {
			registry
				.register(LocaleConfig::new(
					*code,
					*code,
					true,
					"",
					vec![],
					TimeFormatConfig::new("D. MM. YYYY H:mm", "DD.MM.YYYY", "H:mm", "HH:mm"),
				))
				.unwrap();
		}
		registry
	}

	fn code(config: Option<&LocaleConfig>) -> Option<&str> {
		config.map(|c| c.locale_code.as_str())
	}

	#[test]
	fn test_exact_match_takes_priority() {
		let registry = registry(&["en", "sl"]);
		assert_eq!(code(resolve_locale(&registry, Some("sl"))), Some("sl"));
	}

	#[test]
	fn test_region_tag_matches_language() {
		let registry = registry(&["en", "sl"]);
		assert_eq!(code(resolve_locale(&registry, Some("sl-SI"))), Some("sl"));
		assert_eq!(code(resolve_locale(&registry, Some("sl_SI"))), Some("sl"));
		assert_eq!(code(resolve_locale(&registry, Some("SL"))), Some("sl"));
	}

	#[test]
	fn test_regional_locale_registered_exactly() {
		let registry = registry(&["en", "pt", "pt-BR"]);
		assert_eq!(code(resolve_locale(&registry, Some("pt-BR"))), Some("pt-BR"));
		assert_eq!(code(resolve_locale(&registry, Some("pt-br"))), Some("pt-BR"));
		assert_eq!(code(resolve_locale(&registry, Some("pt-PT"))), Some("pt"));
	}

	#[test]
	fn test_unknown_falls_back_to_default() {
		let mut registry = registry(&["en", "sl"]);
		assert_eq!(code(resolve_locale(&registry, Some("fr"))), Some("en"));

		registry.set_default("sl").unwrap();
		assert_eq!(code(resolve_locale(&registry, Some("fr"))), Some("sl"));
		assert_eq!(code(resolve_locale(&registry, None)), Some("sl"));
	}

	#[test]
	fn test_empty_string_falls_back() {
		let registry = registry(&["en", "sl"]);
		assert_eq!(code(resolve_locale(&registry, Some(""))), Some("en"));
		assert_eq!(code(resolve_locale(&registry, Some("  "))), Some("en"));
	}

	#[test]
	fn test_empty_registry_resolves_nothing() {
		let registry = LocaleRegistry::new();
		assert!(resolve_locale(&registry, Some("en")).is_none());
		assert!(resolve_preferred(&registry, ["en"]).is_none());
	}

	#[test]
	fn test_preferred_list_first_supported_wins() {
		let registry = registry(&["en", "sl"]);
		assert_eq!(
			code(resolve_preferred(&registry, ["de-DE", "sl-SI", "en"])),
			Some("sl")
		);
		assert_eq!(code(resolve_preferred(&registry, ["de", "fr"])), Some("en"));
		assert_eq!(
			code(resolve_preferred(&registry, Vec::<String>::new())),
			Some("en")
		);
	}

	#[test]
	fn test_language_subtag() {
		assert_eq!(language_subtag("sl-SI"), "sl");
		assert_eq!(language_subtag("en_US"), "en");
		assert_eq!(language_subtag("en"), "en");
		assert_eq!(language_subtag(""), "");
	}
}
