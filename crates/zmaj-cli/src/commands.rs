// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Output for the `zmaj-locales` subcommands.

use anyhow::{Context, Result};
use zmaj_common_locale::{resolve_preferred, LocaleConfig, LocaleRegistry};

/// One line per locale in registration order; the default is marked `*`.
pub fn render_list(registry: &LocaleRegistry) -> String {
	let default = registry.default_locale();
	registry
		.iter()
		.map(|locale| {
			let marker = if Some(locale.locale_code.as_str()) == default {
				'*'
			} else {
				' '
			};
			format!(
				"{marker} {:<8} {:<16} {}\n",
				locale.locale_code,
				locale.name,
				locale.unit_system()
			)
		})
		.collect()
}

/// A single locale as text or pretty JSON.
pub fn render_show(registry: &LocaleRegistry, locale_code: &str, json: bool) -> Result<String> {
	let locale = registry.get(locale_code)?;
	if json {
		return serde_json::to_string_pretty(locale).context("failed to serialize locale");
	}
	Ok(render_locale_text(locale))
}

fn render_locale_text(locale: &LocaleConfig) -> String {
	let mut lines = vec![
		format!("{} ({})", locale.name, locale.locale_code),
		format!("units:              {}", locale.unit_system()),
		format!(
			"date picker locale: {}",
			locale.datepicker_locale().unwrap_or("(default)")
		),
		"time formats:".to_string(),
	];
	lines.extend(
		locale
			.time
			.fields()
			.iter()
			.map(|(field, pattern)| format!("  {field:<19} {pattern}")),
	);
	lines.push(format!("info widgets:       {}", locale.info_widgets.len()));
	lines.extend(locale.info_widgets.iter().enumerate().map(|(i, widget)| {
		let class = widget
			.css_class
			.as_deref()
			.map(|c| format!(", class {c}"))
			.unwrap_or_default();
		format!(
			"  [{i}] {} ({} bytes{class})",
			widget.title.as_deref().unwrap_or("(untitled)"),
			widget.content.len()
		)
	}));

	let mut out = lines.join("\n");
	out.push('\n');
	out
}

/// Summary printed by `check` once the registry has been built.
pub fn render_check(registry: &LocaleRegistry) -> String {
	format!(
		"ok: {} locale(s) registered [{}], default '{}'\n",
		registry.len(),
		registry.list().join(", "),
		registry.default_locale().unwrap_or_default()
	)
}

/// The locale chosen for an ordered list of language tags.
pub fn render_resolve(registry: &LocaleRegistry, tags: &[String]) -> Result<String> {
	let locale = resolve_preferred(registry, tags).context("locale registry is empty")?;
	Ok(format!("{}\n", locale.locale_code))
}

#[cfg(test)]
mod tests {
	use super::*;
	use zmaj_common_locale::{InfoWidget, TimeFormatConfig};

	fn registry() -> LocaleRegistry {
		let mut registry = LocaleRegistry::new();
		registry
			.register(LocaleConfig::new(
				"English",
				"en",
				false,
				"",
				vec![InfoWidget::new("<p>About</p>").with_title("About")],
				TimeFormatConfig::new("MMM Do YYYY, h:mma", "MM/DD/YYYY", "h:mma", "hh:mmtt"),
			))
			.unwrap();
		registry
			.register(LocaleConfig::new(
				"Slovensko",
				"sl",
				true,
				"sl",
				vec![InfoWidget::new("<p>Kontakt</p>").with_css_class("otp-contactWidget")],
				TimeFormatConfig::new("D. MM. YYYY H:mm", "DD.MM.YYYY", "H:mm", "HH:mm"),
			))
			.unwrap();
		registry.set_default("sl").unwrap();
		registry.seal().unwrap();
		registry
	}

	#[test]
	fn test_list_marks_default_in_registration_order() {
		let out = render_list(&registry());
		let lines: Vec<_> = out.lines().collect();
		assert_eq!(lines.len(), 2);
		assert!(lines[0].starts_with("  en"));
		assert!(lines[0].ends_with("imperial"));
		assert!(lines[1].starts_with("* sl"));
		assert!(lines[1].ends_with("metric"));
	}

	#[test]
	fn test_show_text() {
		let out = render_show(&registry(), "en", false).unwrap();
		assert!(out.starts_with("English (en)\n"));
		assert!(out.contains("date picker locale: (default)"));
		assert!(out.contains("date_format         MM/DD/YYYY"));
		assert!(out.contains("[0] About (12 bytes)"));
	}

	#[test]
	fn test_show_text_untitled_widget_with_class() {
		let out = render_show(&registry(), "sl", false).unwrap();
		assert!(out.contains("date picker locale: sl"));
		assert!(out.contains("[0] (untitled) (14 bytes, class otp-contactWidget)"));
	}

	#[test]
	fn test_show_json() {
		let out = render_show(&registry(), "sl", true).unwrap();
		let value: serde_json::Value = serde_json::from_str(&out).unwrap();
		assert_eq!(value["locale_code"], "sl");
		assert_eq!(value["time"]["date_format"], "DD.MM.YYYY");
		assert_eq!(value["info_widgets"][0]["css_class"], "otp-contactWidget");
	}

	#[test]
	fn test_show_unknown_locale() {
		let err = render_show(&registry(), "fr", false).unwrap_err();
		assert_eq!(err.to_string(), "Locale 'fr' not found");
	}

	#[test]
	fn test_check_summary() {
		assert_eq!(
			render_check(&registry()),
			"ok: 2 locale(s) registered [en, sl], default 'sl'\n"
		);
	}

	#[test]
	fn test_resolve() {
		let registry = registry();
		let tags = vec!["de-AT".to_string(), "en-US".to_string()];
		assert_eq!(render_resolve(&registry, &tags).unwrap(), "en\n");
		assert_eq!(render_resolve(&registry, &[]).unwrap(), "sl\n");
	}
}
