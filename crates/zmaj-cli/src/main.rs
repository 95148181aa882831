// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Inspect and validate the Zmaj trip planner's locale registry.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zmaj_locale_config::{build_registry, load_settings, load_settings_with_file};

mod commands;
mod locale;
mod version;

/// Zmaj locale registry tool.
#[derive(Parser, Debug)]
#[command(
	name = "zmaj-locales",
	about = "Inspect and validate Zmaj trip planner locales",
	version
)]
struct Args {
	/// Settings file (defaults to /etc/zmaj/locales.toml)
	#[arg(long, global = true, env = "ZMAJ_LOCALE_CONFIG")]
	config: Option<PathBuf>,

	/// Directory of additional locale records, overriding the settings
	#[arg(long, global = true)]
	locale_dir: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// List registered locales in registration order
	List,
	/// Show one locale record
	Show {
		/// Locale code, e.g. "sl"
		locale_code: String,
		/// Print the record as JSON
		#[arg(long)]
		json: bool,
	},
	/// Build the registry and report whether every locale is valid
	Check,
	/// Print the locale chosen for a list of language tags (most preferred
	/// first). Uses the system locales when no tags are given.
	Resolve { tags: Vec<String> },
	/// Show version and build information
	Version,
}

fn main() -> Result<()> {
	let args = Args::parse();

	if let Command::Version = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	dotenvy::dotenv().ok();

	let mut settings = match &args.config {
		Some(path) => load_settings_with_file(path)?,
		None => load_settings()?,
	};
	if let Some(dir) = args.locale_dir {
		settings.locale_dir = Some(dir);
	}

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| settings.log_level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let registry = build_registry(&settings).context("failed to build locale registry")?;

	let output = match args.command {
		Command::List => commands::render_list(&registry),
		Command::Show { locale_code, json } => {
			commands::render_show(&registry, &locale_code, json)?
		}
		Command::Check => commands::render_check(&registry),
		Command::Resolve { tags } => {
			let tags = if tags.is_empty() {
				locale::system_preferences()
			} else {
				tags
			};
			commands::render_resolve(&registry, &tags)?
		}
		Command::Version => unreachable!("version is printed before settings are loaded"),
	};
	print!("{output}");

	Ok(())
}
