// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale records and the locale registry for the Zmaj trip planner client.
//!
//! Each supported language contributes one [`LocaleConfig`]: a display name,
//! the unit system, the identifiers handed to the date formatting and date
//! picker libraries, the informational widgets shown in the top bar, and the
//! date/time format strings.
//!
//! Records are registered once at startup into a [`LocaleRegistry`], which
//! validates every record eagerly and is then sealed. A sealed registry is
//! read-only and can be shared between any number of readers.
//!
//! # Example
//!
//! ```
//! use zmaj_common_locale::{
//! 	resolve_locale, InfoWidget, LocaleConfig, LocaleRegistry, TimeFormatConfig,
//! };
//!
//! let mut registry = LocaleRegistry::new();
//! registry
//! 	.register(LocaleConfig::new(
//! 		"English",
//! 		"en",
//! 		true,
//! 		"",
//! 		vec![InfoWidget::new("<p>About</p>").with_title("About")],
//! 		TimeFormatConfig::new("MMM Do YYYY, h:mma", "MM/DD/YYYY", "h:mma", "hh:mmtt"),
//! 	))
//! 	.unwrap();
//! registry.seal().unwrap();
//!
//! assert_eq!(registry.get("en").unwrap().time.date_format, "MM/DD/YYYY");
//! assert!(registry.get("fr").is_err());
//!
//! // Callers choose the fallback explicitly.
//! let locale = resolve_locale(&registry, Some("en-GB")).unwrap();
//! assert_eq!(locale.locale_code, "en");
//! ```

mod error;
mod model;
mod registry;
mod resolve;
mod validate;

pub use error::{ConfigIssue, RegistryError};
pub use model::{InfoWidget, LocaleConfig, TimeFormatConfig, UnitSystem};
pub use registry::{LocaleRegistry, RegistryState};
pub use resolve::{language_subtag, resolve_locale, resolve_preferred};
pub use validate::validate;
