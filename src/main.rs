// SPDX-License-Identifier: PMPL-1.0-or-later

//! country-names: list, normalise and look up ISO 3166-1 countries
//!
//! Settings come from (lowest to highest precedence) the built-in defaults,
//! a `--config` JSON/YAML file, `COUNTRIES_*` environment variables and
//! command-line flags.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use country_names::config::parse_code_list;
use country_names::output::OutputFormat;
use country_names::{diagnostics, Countries, CountriesConfig, Lang};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "country-names")]
#[command(version)]
#[command(about = "ISO 3166-1 country codes and localized names")]
#[command(long_about = None)]
struct Cli {
    /// Log filter (overrides RUST_LOG), e.g. `debug`
    #[arg(long, global = true, value_name = "FILTER")]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ordered country list
    List {
        /// Settings file (JSON or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Display language
        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Codes to list first, comma separated
        #[arg(long, value_name = "CODES")]
        first: Option<String>,

        /// Separator label after the promoted codes
        #[arg(long, value_name = "LABEL")]
        first_break: Option<String>,

        /// Keep promoted codes in their sorted position too
        #[arg(long)]
        first_repeat: bool,
    },

    /// Normalise an alpha-2, alpha-3 or numeric code to alpha-2
    Alpha2 {
        #[arg(value_name = "CODE")]
        code: String,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the display name for a code
    Name {
        #[arg(value_name = "CODE")]
        code: String,

        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,
    },

    /// Find the code for an exact country name
    ByName {
        #[arg(value_name = "NAME")]
        name: String,

        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,
    },

    /// Run the data consistency checks
    Check {
        /// Directory holding `<code>.gif` flag images
        #[arg(long, value_name = "DIR")]
        flags_dir: Option<PathBuf>,

        /// List every anomaly
        #[arg(short, long)]
        verbose: bool,
    },
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    En,
    Es,
    Fr,
    De,
    Ja,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Lang::En,
            LangArg::Es => Lang::Es,
            LangArg::Fr => Lang::Fr,
            LangArg::De => Lang::De,
            LangArg::Ja => Lang::Ja,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    match cli.command {
        Commands::List {
            config,
            lang,
            format,
            first,
            first_break,
            first_repeat,
        } => {
            let mut settings = load_config(config.as_deref())?;
            if let Some(first) = first {
                settings.first = parse_code_list(&first)?;
            }
            if let Some(label) = first_break {
                settings.first_break = Some(label);
            }
            if first_repeat {
                settings.first_repeat = true;
            }

            let countries = Countries::new(settings).with_lang(lang.into());
            print!("{}", format.serialize(countries.as_slice())?);
        }

        Commands::Alpha2 { code, config } => {
            let countries = Countries::new(load_config(config.as_deref())?);
            let alpha2 = countries.alpha2(&code);
            if alpha2.is_empty() {
                bail!("unknown country code '{}'", code);
            }
            println!("{}", alpha2);
        }

        Commands::Name { code, config, lang } => {
            let countries = Countries::new(load_config(config.as_deref())?).with_lang(lang.into());
            let name = countries.name(&code);
            if name.is_empty() {
                bail!("unknown country code '{}'", code);
            }
            println!("{}", name);
        }

        Commands::ByName { name, config, lang } => {
            let countries = Countries::new(load_config(config.as_deref())?);
            let code = countries.by_name_in(&name, lang.into());
            if code.is_empty() {
                bail!("no country named '{}'", name);
            }
            println!("{}", code);
        }

        Commands::Check { flags_dir, verbose } => {
            diagnostics::run_checks(flags_dir.as_deref(), verbose)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CountriesConfig> {
    let base = match path {
        Some(path) => CountriesConfig::load(path)?,
        None => CountriesConfig::default(),
    };
    base.merge_vars(std::env::vars())
}

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
