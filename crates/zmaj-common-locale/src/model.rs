// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale record schema.

use serde::{Deserialize, Serialize};

/// Configuration bundle for one supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleConfig {
	/// Name of the language written in the language itself, e.g. "Slovensko".
	pub name: String,
	/// Registry key, also the name of the translation catalog.
	#[serde(alias = "locale_short")]
	pub locale_code: String,
	/// `true` for metric units, `false` for imperial.
	pub metric: bool,
	/// Key into the date picker's regional table. Empty means the picker's
	/// built-in default is used.
	#[serde(default, alias = "datepicker_locale_short")]
	pub datepicker_locale_code: String,
	/// Widgets in display order.
	#[serde(default)]
	pub info_widgets: Vec<InfoWidget>,
	/// An absent table leaves every pattern empty, which registration rejects.
	#[serde(default)]
	pub time: TimeFormatConfig,
}

/// An informational panel reachable from the top bar of the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InfoWidget {
	/// Opaque HTML payload.
	pub content: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Absent means the default widget styling.
	#[serde(
		default,
		alias = "cssClass",
		skip_serializing_if = "Option::is_none"
	)]
	pub css_class: Option<String>,
}

/// Date and time patterns for one locale.
///
/// `long_format`, `date_format` and `time_format` use the date formatting
/// library's dialect; `date_format` must also agree with the date picker's
/// pattern. `time_picker_format` uses the time picker widget's own dialect.
///
/// Absent fields deserialize to the empty string and are rejected on
/// registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeFormatConfig {
	#[serde(default, alias = "format")]
	pub long_format: String,
	#[serde(default)]
	pub date_format: String,
	#[serde(default)]
	pub time_format: String,
	#[serde(default, alias = "time_format_picker")]
	pub time_picker_format: String,
}

/// Measurement system derived from [`LocaleConfig::metric`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
	Metric,
	Imperial,
}

impl std::fmt::Display for UnitSystem {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			UnitSystem::Metric => write!(f, "metric"),
			UnitSystem::Imperial => write!(f, "imperial"),
		}
	}
}

impl LocaleConfig {
	pub fn new(
		name: impl Into<String>,
		locale_code: impl Into<String>,
		metric: bool,
		datepicker_locale_code: impl Into<String>,
		info_widgets: Vec<InfoWidget>,
		time: TimeFormatConfig,
	) -> Self {
		Self {
			name: name.into(),
			locale_code: locale_code.into(),
			metric,
			datepicker_locale_code: datepicker_locale_code.into(),
			info_widgets,
			time,
		}
	}

	pub fn unit_system(&self) -> UnitSystem {
		if self.metric {
			UnitSystem::Metric
		} else {
			UnitSystem::Imperial
		}
	}

	/// The date picker localization key, or `None` when the picker should use
	/// its built-in default.
	pub fn datepicker_locale(&self) -> Option<&str> {
		if self.datepicker_locale_code.is_empty() {
			None
		} else {
			Some(&self.datepicker_locale_code)
		}
	}
}

impl InfoWidget {
	pub fn new(content: impl Into<String>) -> Self {
		Self {
			content: content.into(),
			title: None,
			css_class: None,
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn with_css_class(mut self, css_class: impl Into<String>) -> Self {
		self.css_class = Some(css_class.into());
		self
	}
}

impl TimeFormatConfig {
	/// Field names in declaration order, as reported by validation.
	pub const FIELDS: [&'static str; 4] = [
		"long_format",
		"date_format",
		"time_format",
		"time_picker_format",
	];

	pub fn new(
		long_format: impl Into<String>,
		date_format: impl Into<String>,
		time_format: impl Into<String>,
		time_picker_format: impl Into<String>,
	) -> Self {
		Self {
			long_format: long_format.into(),
			date_format: date_format.into(),
			time_format: time_format.into(),
			time_picker_format: time_picker_format.into(),
		}
	}

	/// `(field name, pattern)` pairs in the order of [`Self::FIELDS`].
	pub fn fields(&self) -> [(&'static str, &str); 4] {
		[
			(Self::FIELDS[0], self.long_format.as_str()),
			(Self::FIELDS[1], self.date_format.as_str()),
			(Self::FIELDS[2], self.time_format.as_str()),
			(Self::FIELDS[3], self.time_picker_format.as_str()),
		]
	}
}
